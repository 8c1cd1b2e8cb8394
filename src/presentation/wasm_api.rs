//! Bridge to JavaScript: minimal surface, the dashboard itself lives in
//! `crate::app`.

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};

/// Mount the dashboard into `<body>`. Called from the host page after the
/// module finishes loading.
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard() {
    get_logger().info(LogComponent::Presentation("WasmApi"), "Mounting dashboard");
    leptos::mount_to_body(App);
}
