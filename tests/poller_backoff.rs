use crypto_guardian_wasm::domain::errors::DataError;
use crypto_guardian_wasm::domain::market_data::{PricePoint, Symbol};
use crypto_guardian_wasm::domain::polling::{
    CycleOutcome, RetryPolicy, RollingPoller, SampleSource,
};
use futures::executor::block_on;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

struct ScriptedSource {
    updates: RefCell<VecDeque<Result<PricePoint, DataError>>>,
}

impl SampleSource for ScriptedSource {
    async fn seed(&self, _subject: &Symbol, _limit: usize) -> Result<Vec<PricePoint>, DataError> {
        Ok(Vec::new())
    }

    async fn latest(&self, _subject: &Symbol) -> Result<PricePoint, DataError> {
        self.updates.borrow_mut().pop_front().expect("unscripted update fetch")
    }
}

fn poller(updates: Vec<Result<PricePoint, DataError>>) -> RollingPoller<ScriptedSource> {
    let poller = RollingPoller::new(
        Symbol::from("PEPEUSDT"),
        30,
        ScriptedSource { updates: RefCell::new(updates.into()) },
        RetryPolicy::default(),
    );
    poller.start();
    assert_eq!(block_on(poller.clone().seed_cycle()), CycleOutcome::Success);
    poller
}

#[test]
fn default_policy_is_two_seconds_and_five_seconds() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.success_delay, Duration::from_millis(2000));
    assert_eq!(policy.failure_delay, Duration::from_millis(5000));
}

#[test]
fn delay_is_classified_by_the_previous_outcome() {
    let poller = poller(Vec::new());
    assert_eq!(poller.next_delay(CycleOutcome::Success), Duration::from_millis(2000));
    assert_eq!(poller.next_delay(CycleOutcome::Failed), Duration::from_millis(5000));
}

#[test]
fn consecutive_failures_stay_on_the_slow_delay() {
    // Fixed two-level policy: no exponential growth across failures.
    let failure = || Err(DataError::NetworkError("down".to_string()));
    let poller = poller(vec![failure(), failure(), failure()]);

    for _ in 0..3 {
        let outcome = block_on(poller.clone().update_cycle());
        assert_eq!(outcome, CycleOutcome::Failed);
        assert_eq!(poller.next_delay(outcome), Duration::from_millis(5000));
    }
}

#[test]
fn custom_policy_is_respected() {
    let policy = RetryPolicy {
        success_delay: Duration::from_millis(100),
        failure_delay: Duration::from_millis(250),
    };
    let poller = RollingPoller::new(
        Symbol::from("PEPEUSDT"),
        30,
        ScriptedSource { updates: RefCell::new(VecDeque::new()) },
        policy,
    );
    assert_eq!(poller.policy(), policy);
    assert_eq!(poller.next_delay(CycleOutcome::Success), Duration::from_millis(100));
    assert_eq!(poller.next_delay(CycleOutcome::Failed), Duration::from_millis(250));
}
