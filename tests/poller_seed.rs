use crypto_guardian_wasm::domain::errors::{DataError, PollError};
use crypto_guardian_wasm::domain::market_data::{Price, PricePoint, Symbol, Timestamp};
use crypto_guardian_wasm::domain::polling::{
    CycleOutcome, LoopStep, RetryPolicy, RollingPoller, SampleSource,
};
use futures::executor::block_on;
use std::cell::RefCell;
use std::collections::VecDeque;

struct ScriptedSource {
    seeds: RefCell<VecDeque<Result<Vec<PricePoint>, DataError>>>,
}

impl ScriptedSource {
    fn new(seeds: Vec<Result<Vec<PricePoint>, DataError>>) -> Self {
        Self { seeds: RefCell::new(seeds.into()) }
    }
}

impl SampleSource for ScriptedSource {
    async fn seed(&self, _subject: &Symbol, _limit: usize) -> Result<Vec<PricePoint>, DataError> {
        self.seeds.borrow_mut().pop_front().expect("unscripted seed fetch")
    }

    async fn latest(&self, _subject: &Symbol) -> Result<PricePoint, DataError> {
        panic!("no update fetch expected in these scenarios")
    }
}

fn point(index: u64) -> PricePoint {
    PricePoint::new(
        format!("v{index}"),
        Price::new(index as f64),
        Timestamp::from_millis(index * 60_000),
    )
}

fn poller(seeds: Vec<Result<Vec<PricePoint>, DataError>>) -> RollingPoller<ScriptedSource> {
    RollingPoller::new(
        Symbol::from("SHIBUSDT"),
        30,
        ScriptedSource::new(seeds),
        RetryPolicy::default(),
    )
}

#[test]
fn successful_seed_fills_the_window_oldest_first() {
    let poller = poller(vec![Ok((0..30).map(point).collect())]);
    poller.start();

    let outcome = block_on(poller.clone().seed_cycle());

    assert_eq!(outcome, CycleOutcome::Success);
    let state = poller.snapshot();
    assert!(state.is_seeded);
    assert!(state.last_error.is_none());
    assert_eq!(state.window.len(), 30);
    assert_eq!(state.window.oldest().unwrap().label, "v0");
    assert_eq!(state.window.latest().unwrap().label, "v29");
}

#[test]
fn oversized_seed_batch_keeps_the_most_recent_points() {
    let poller = poller(vec![Ok((0..40).map(point).collect())]);
    poller.start();
    block_on(poller.clone().seed_cycle());

    let state = poller.snapshot();
    assert_eq!(state.window.len(), 30);
    assert_eq!(state.window.oldest().unwrap().label, "v10");
}

#[test]
fn empty_seed_batch_still_counts_as_seeded() {
    let poller = poller(vec![Ok(Vec::new())]);
    poller.start();

    let outcome = block_on(poller.clone().seed_cycle());

    assert_eq!(outcome, CycleOutcome::Success);
    let state = poller.snapshot();
    assert!(state.is_seeded);
    assert!(state.window.is_empty());
    assert!(state.last_error.is_none());
}

#[test]
fn failed_seed_surfaces_a_terminal_error_without_retrying() {
    // Exactly one scripted response; a second seed attempt would panic.
    let poller = poller(vec![Err(DataError::NetworkError("refused".to_string()))]);
    poller.start();

    let outcome = block_on(poller.clone().seed_cycle());

    assert_eq!(outcome, CycleOutcome::Failed);
    let state = poller.snapshot();
    assert!(!state.is_seeded);
    assert!(state.window.is_empty());
    let error = state.last_error.expect("seed failure must be surfaced");
    assert!(matches!(error, PollError::SeedFetchFailed(_)));
    assert!(error.is_terminal());
}

#[test]
fn malformed_seed_response_is_classified_as_such() {
    let poller = poller(vec![Err(DataError::ParseError("bad json".to_string()))]);
    poller.start();
    block_on(poller.clone().seed_cycle());

    assert!(matches!(poller.snapshot().last_error, Some(PollError::MalformedResponse(_))));
}

#[test]
fn failed_seed_ends_the_lifecycle() {
    let poller = poller(vec![Err(DataError::NetworkError("refused".to_string()))]);
    poller.start();

    let outcome = block_on(poller.clone().seed_cycle());
    assert_eq!(outcome, CycleOutcome::Failed);

    // The driver exits and the instance reads as dead, not half-running.
    assert_eq!(poller.after_seed(outcome), LoopStep::Exit);
    assert!(!poller.is_running());

    // No update fetch is even attempted on a dead instance.
    assert_eq!(block_on(poller.clone().update_cycle()), CycleOutcome::Superseded);
}

#[test]
fn seed_on_a_stopped_poller_is_superseded() {
    let poller = poller(vec![Ok(vec![point(0)])]);

    // Never started: the cycle must bail out before fetching.
    let outcome = block_on(poller.clone().seed_cycle());
    assert_eq!(outcome, CycleOutcome::Superseded);
    assert!(poller.snapshot().window.is_empty());
}
