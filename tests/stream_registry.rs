#![cfg(target_arch = "wasm32")]

use crypto_guardian_wasm::app::abort_other_streams;
use crypto_guardian_wasm::domain::market_data::Symbol;
use crypto_guardian_wasm::global_state::stream_abort_handles;
use futures::future::{AbortHandle, Abortable};
use leptos::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn switching_aborts_every_other_stream() {
    let (old_handle, old_reg) = AbortHandle::new_pair();
    let (kept_handle, _kept_reg) = AbortHandle::new_pair();

    stream_abort_handles().update(|handles| {
        handles.clear();
        handles.insert(Symbol::from("DOGEUSDT"), old_handle);
        handles.insert(Symbol::from("LINKUSDT"), kept_handle);
    });

    abort_other_streams(&Symbol::from("LINKUSDT"));

    let old_stream = Abortable::new(std::future::pending::<()>(), old_reg);
    assert!(old_stream.await.is_err());

    stream_abort_handles().with(|handles| {
        assert!(!handles.contains_key(&Symbol::from("DOGEUSDT")));
        assert!(handles.contains_key(&Symbol::from("LINKUSDT")));
    });
}
