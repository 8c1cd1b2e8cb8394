use crate::domain::errors::{DataError, PollError};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{PricePoint, RollingWindow, Symbol};
use futures::future::{AbortHandle, Abortable, Either, select};
use futures::pin_mut;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Delay until the next update fetch, classified by the outcome of the
/// previous cycle. Deliberately a fixed two-level policy, not exponential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub success_delay: Duration,
    pub failure_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            success_delay: Duration::from_millis(2000),
            failure_delay: Duration::from_millis(5000),
        }
    }
}

/// State owned by one poller instance and handed to consumers by value.
#[derive(Debug, Clone, PartialEq)]
pub struct PollState {
    pub window: RollingWindow,
    pub last_error: Option<PollError>,
    pub is_seeded: bool,
}

impl PollState {
    pub fn new(capacity: usize) -> Self {
        Self { window: RollingWindow::new(capacity), last_error: None, is_seeded: false }
    }
}

/// Outcome of one completed poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Success,
    Failed,
    /// The instance was stopped or re-subjected while the fetch was in
    /// flight; the result was discarded without touching state.
    Superseded,
}

/// Next action of the spawned driver loop after a completed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStep {
    /// Sleep for the given delay, then run the next update cycle.
    Continue(Duration),
    /// The lifecycle was superseded but the instance still runs: go back
    /// to a fresh seed fetch for the current subject.
    Reseed,
    /// The instance was stopped; the driver terminates.
    Exit,
}

/// The two collaborator fetches the poller is parameterized by.
///
/// `seed` returns the most recent `limit` points ascending; `latest`
/// returns the single newest point. A response with nothing to append must
/// be reported as `DataError::ParseError` so the cycle counts as failed.
pub trait SampleSource {
    fn seed(
        &self,
        subject: &Symbol,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<PricePoint>, DataError>>;

    fn latest(&self, subject: &Symbol) -> impl Future<Output = Result<PricePoint, DataError>>;
}

#[derive(Debug)]
struct Inner {
    subject: Symbol,
    state: PollState,
    /// Liveness token: bumped by stop/start/change_subject so a fetch
    /// issued under an older epoch is a no-op when it finally resolves.
    epoch: u64,
    running: bool,
}

/// Rolling poller for a single subject.
///
/// One logical timer-driven loop per instance; cycles are strictly
/// sequential, and the loop only terminates through `stop` (or abort of the
/// spawned driver). Consumers read state through `snapshot` and are
/// notified via `on_change` after every completed cycle.
pub struct RollingPoller<S> {
    source: Rc<S>,
    policy: RetryPolicy,
    inner: Rc<RefCell<Inner>>,
    on_change: Rc<dyn Fn(&PollState)>,
}

impl<S> Clone for RollingPoller<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            policy: self.policy,
            inner: Rc::clone(&self.inner),
            on_change: Rc::clone(&self.on_change),
        }
    }
}

impl<S: SampleSource + 'static> RollingPoller<S> {
    pub fn new(subject: Symbol, capacity: usize, source: S, policy: RetryPolicy) -> Self {
        Self {
            source: Rc::new(source),
            policy,
            inner: Rc::new(RefCell::new(Inner {
                subject,
                state: PollState::new(capacity),
                epoch: 0,
                running: false,
            })),
            on_change: Rc::new(|_| {}),
        }
    }

    /// Register the consumer callback invoked after every completed cycle.
    pub fn with_on_change(mut self, on_change: impl Fn(&PollState) + 'static) -> Self {
        self.on_change = Rc::new(on_change);
        self
    }

    pub fn subject(&self) -> Symbol {
        self.inner.borrow().subject.clone()
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Current state by value; safe to read while the poller keeps running.
    pub fn snapshot(&self) -> PollState {
        self.inner.borrow().state.clone()
    }

    /// Arm a fresh lifecycle: empty state, new epoch. The seed fetch itself
    /// is issued by `seed_cycle` (the driver calls it with no delay).
    pub fn start(&self) {
        let mut inner = self.inner.borrow_mut();
        let capacity = inner.state.window.capacity();
        inner.epoch += 1;
        inner.running = true;
        inner.state = PollState::new(capacity);
    }

    /// Cancel the lifecycle. Any fetch already in flight is invalidated by
    /// the epoch bump and ignored on arrival.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.epoch += 1;
        inner.running = false;
    }

    /// Supersede the current subject with a fresh, empty lifecycle.
    /// Idempotent under rapid repeated calls: each call fully invalidates
    /// the previous in-flight work. A spawned driver observes the
    /// supersession and restarts from a seed fetch for the new subject.
    pub fn change_subject(&self, subject: Symbol) {
        self.stop();
        self.inner.borrow_mut().subject = subject;
        self.start();
    }

    /// Issue the one-shot bulk seed fetch and apply it if still current.
    pub async fn seed_cycle(self) -> CycleOutcome {
        let (issued, subject, capacity) = {
            let inner = self.inner.borrow();
            if !inner.running {
                return CycleOutcome::Superseded;
            }
            (inner.epoch, inner.subject.clone(), inner.state.window.capacity())
        };

        let fetched = self.source.seed(&subject, capacity).await;

        let (outcome, state) = {
            let mut inner = self.inner.borrow_mut();
            if inner.epoch != issued {
                return CycleOutcome::Superseded;
            }
            let outcome = match fetched {
                Ok(batch) => {
                    get_logger().info(
                        LogComponent::Domain("RollingPoller"),
                        &format!("Seeded {} with {} points", subject.value(), batch.len()),
                    );
                    inner.state.window.reset_with(batch);
                    inner.state.is_seeded = true;
                    inner.state.last_error = None;
                    CycleOutcome::Success
                }
                Err(e) => {
                    get_logger().error(
                        LogComponent::Domain("RollingPoller"),
                        &format!("Seed fetch for {} failed: {}", subject.value(), e),
                    );
                    inner.state.last_error = Some(classify_seed(e));
                    CycleOutcome::Failed
                }
            };
            (outcome, inner.state.clone())
        };

        (self.on_change)(&state);
        outcome
    }

    /// Issue one single-sample update fetch and apply it if still current.
    /// A failure leaves the window untouched; stale data beats a gap.
    ///
    /// Updates only run against a seeded window: after a subject switch
    /// the fresh lifecycle must reseed before any single sample lands.
    pub async fn update_cycle(self) -> CycleOutcome {
        let (issued, subject) = {
            let inner = self.inner.borrow();
            if !inner.running || !inner.state.is_seeded {
                return CycleOutcome::Superseded;
            }
            (inner.epoch, inner.subject.clone())
        };

        let fetched = self.source.latest(&subject).await;

        let (outcome, state) = {
            let mut inner = self.inner.borrow_mut();
            if inner.epoch != issued {
                return CycleOutcome::Superseded;
            }
            let outcome = match fetched {
                Ok(point) => {
                    inner.state.window.push(point);
                    inner.state.last_error = None;
                    CycleOutcome::Success
                }
                Err(e) => {
                    get_logger().warn(
                        LogComponent::Domain("RollingPoller"),
                        &format!("Update fetch for {} failed: {}", subject.value(), e),
                    );
                    inner.state.last_error = Some(classify_update(e));
                    CycleOutcome::Failed
                }
            };
            (outcome, inner.state.clone())
        };

        (self.on_change)(&state);
        outcome
    }

    /// Delay before the next update, classified by the previous outcome.
    pub fn next_delay(&self, outcome: CycleOutcome) -> Duration {
        match outcome {
            CycleOutcome::Success => self.policy.success_delay,
            _ => self.policy.failure_delay,
        }
    }

    /// One update fetch raced against `timeout`. A fetch that loses the
    /// race counts as a failed cycle and its eventual response is
    /// epoch-gated out.
    pub async fn update_cycle_racing(self, timeout: impl Future<Output = ()>) -> CycleOutcome {
        let cycle = self.clone().update_cycle();
        pin_mut!(cycle);
        pin_mut!(timeout);

        match select(cycle, timeout).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => self.apply_timeout(),
        }
    }

    /// Driver-side wrapper: the explicit per-fetch timeout equals the
    /// failure delay.
    async fn update_cycle_with_timeout(self) -> CycleOutcome {
        let deadline = self.policy.failure_delay;
        self.update_cycle_racing(gloo_timers::future::sleep(deadline)).await
    }

    fn apply_timeout(&self) -> CycleOutcome {
        let state = {
            let mut inner = self.inner.borrow_mut();
            if !inner.running {
                return CycleOutcome::Superseded;
            }
            // Invalidate the abandoned fetch before recording the failure.
            inner.epoch += 1;
            inner.state.last_error =
                Some(PollError::UpdateFetchFailed("fetch timed out".to_string()));
            inner.state.clone()
        };
        (self.on_change)(&state);
        CycleOutcome::Failed
    }

    /// What the driver loop does after a seed attempt. A failed seed ends
    /// the lifecycle (the flag is cleared so the instance reads as dead);
    /// supersession while still running means the subject changed under
    /// the loop, which answers with a fresh seed.
    pub fn after_seed(&self, outcome: CycleOutcome) -> LoopStep {
        match outcome {
            CycleOutcome::Success => LoopStep::Continue(self.policy.success_delay),
            CycleOutcome::Failed => {
                self.stop();
                LoopStep::Exit
            }
            CycleOutcome::Superseded => self.step_after_supersession(),
        }
    }

    /// What the driver loop does after an update cycle.
    pub fn after_update(&self, outcome: CycleOutcome) -> LoopStep {
        match outcome {
            CycleOutcome::Superseded => self.step_after_supersession(),
            outcome => LoopStep::Continue(self.next_delay(outcome)),
        }
    }

    fn step_after_supersession(&self) -> LoopStep {
        if self.is_running() { LoopStep::Reseed } else { LoopStep::Exit }
    }

    /// The timer-driven loop: immediate seed, then sequential update
    /// cycles. A failed seed shuts the lifecycle down without retrying;
    /// a subject switch restarts the loop from a fresh seed for the new
    /// subject. The loop ends only through stop or abort of the spawned
    /// driver.
    pub async fn run(self) {
        self.start();

        'lifecycle: loop {
            let mut delay = match self.after_seed(self.clone().seed_cycle().await) {
                LoopStep::Continue(delay) => delay,
                LoopStep::Reseed => continue 'lifecycle,
                LoopStep::Exit => return,
            };

            loop {
                gloo_timers::future::sleep(delay).await;
                match self.after_update(self.clone().update_cycle_with_timeout().await) {
                    LoopStep::Continue(next) => delay = next,
                    LoopStep::Reseed => continue 'lifecycle,
                    LoopStep::Exit => return,
                }
            }
        }
    }

    /// Spawn the loop on the local event loop; the returned handle cancels
    /// the pending timer, while the epoch check covers responses that are
    /// already in flight when the handle fires.
    pub fn spawn(self) -> AbortHandle {
        let (handle, registration) = AbortHandle::new_pair();
        let poller = self.clone();
        let fut = Abortable::new(self.run(), registration);
        leptos::spawn_local(async move {
            if fut.await.is_err() {
                poller.stop();
            }
        });
        handle
    }
}

fn classify_seed(error: DataError) -> PollError {
    match error {
        DataError::ParseError(msg) => PollError::MalformedResponse(msg),
        other => PollError::SeedFetchFailed(other.to_string()),
    }
}

fn classify_update(error: DataError) -> PollError {
    match error {
        DataError::ParseError(msg) => PollError::MalformedResponse(msg),
        other => PollError::UpdateFetchFailed(other.to_string()),
    }
}
