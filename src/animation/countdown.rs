use std::time::Duration;

use crate::animation::schedule::{
    BASELINE_YEAR, COMPLETION_DELAY, START_DELAY, delay_after, step_count, value_at,
};

/// Identifies one scheduled deferral of one countdown run. Tokens from a
/// cancelled or retargeted run never match again, so an expiry that was
/// already in flight at cancellation time is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeferralToken {
    run: u64,
    seq: u64,
}

/// Timer facility supplied by the embedder. `schedule` must arrange for
/// [`CountdownAnimator::on_deferral_fired`] to be called with the same token
/// after `delay`; `cancel` withdraws a pending deferral (best effort — the
/// animator also ignores stale tokens, so a cancel that loses the race with
/// expiry is harmless).
pub trait DeferralHost {
    /// Arrange for `token` to fire after `delay`.
    fn schedule(&mut self, delay: Duration, token: DeferralToken);
    /// Withdraw a pending deferral.
    fn cancel(&mut self, token: DeferralToken);
}

/// Where a countdown run currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownPhase {
    /// Showing the baseline year, waiting out the initial delay.
    Idle,
    /// Ticking through the years.
    Running,
    /// Target year is on screen; waiting out the arrival pause.
    Completing,
    /// Terminal. The completion notification has fired, exactly once.
    Done,
    /// Terminal. No further updates or notifications from this run.
    Cancelled,
}

/// Ephemeral display state, mutated once per scheduled step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownState {
    /// The year currently on screen.
    pub current_value: i32,
    /// 0-based index of the last executed step.
    pub step_index: u64,
    /// Set when the completion notification has fired.
    pub is_complete: bool,
}

/// What a fired deferral produced for the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownUpdate {
    /// Show this year.
    Display(i32),
    /// The run finished; fires at most once per run.
    Completed,
}

/// The time-travel counter: drives a year display from a start value to a
/// target value on an accelerating-then-braking cadence.
///
/// The animator owns all scheduling decisions but performs no timing
/// itself; the embedder's [`DeferralHost`] runs the clock and feeds expiries
/// back in. Across a full run exactly `|start - target| + 1` display updates
/// occur, strictly monotonic toward the target, and the completion update is
/// delivered exactly once. Cancellation is synchronous and total.
#[derive(Debug)]
pub struct CountdownAnimator {
    start_year: i32,
    target_year: i32,
    phase: CountdownPhase,
    state: CountdownState,
    run: u64,
    next_seq: u64,
    pending: Option<DeferralToken>,
}

impl CountdownAnimator {
    /// Count down from the baseline year to `target_year`.
    pub fn new(target_year: i32) -> Self {
        Self::with_start(BASELINE_YEAR, target_year)
    }

    /// Count down (or up) from `start_year` to `target_year`.
    pub fn with_start(start_year: i32, target_year: i32) -> Self {
        Self {
            start_year,
            target_year,
            phase: CountdownPhase::Idle,
            state: CountdownState {
                current_value: start_year,
                step_index: 0,
                is_complete: false,
            },
            run: 0,
            next_seq: 0,
            pending: None,
        }
    }

    /// Where the run currently is.
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    /// Snapshot of the display state.
    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// The year the run is heading toward.
    pub fn target_year(&self) -> i32 {
        self.target_year
    }

    fn total_steps(&self) -> u64 {
        step_count(self.start_year, self.target_year)
    }

    fn issue(&mut self, host: &mut impl DeferralHost, delay: Duration) {
        let token = DeferralToken {
            run: self.run,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending = Some(token);
        host.schedule(delay, token);
    }

    /// Start the run. Only meaningful from `Idle` with nothing scheduled;
    /// a second activation is ignored.
    pub fn activate(&mut self, host: &mut impl DeferralHost) {
        if self.phase != CountdownPhase::Idle || self.pending.is_some() {
            return;
        }
        self.issue(host, START_DELAY);
    }

    /// Feed an expired deferral back in. Returns the resulting update, or
    /// `None` when the token is stale (from a cancelled or superseded run)
    /// or the run is terminal.
    pub fn on_deferral_fired(
        &mut self,
        token: DeferralToken,
        host: &mut impl DeferralHost,
    ) -> Option<CountdownUpdate> {
        if self.pending != Some(token) {
            return None;
        }
        self.pending = None;

        match self.phase {
            CountdownPhase::Idle => {
                self.phase = CountdownPhase::Running;
                self.state.step_index = 0;
                self.advance_or_complete(host)
            }
            CountdownPhase::Running => {
                self.state.step_index += 1;
                self.advance_or_complete(host)
            }
            CountdownPhase::Completing => {
                self.phase = CountdownPhase::Done;
                self.state.is_complete = true;
                Some(CountdownUpdate::Completed)
            }
            CountdownPhase::Done | CountdownPhase::Cancelled => None,
        }
    }

    fn advance_or_complete(&mut self, host: &mut impl DeferralHost) -> Option<CountdownUpdate> {
        let step = self.state.step_index;
        let total = self.total_steps();
        self.state.current_value = value_at(self.start_year, self.target_year, step);

        if step + 1 >= total {
            // Display already shows the target year.
            self.phase = CountdownPhase::Completing;
            self.issue(host, COMPLETION_DELAY);
        } else {
            self.issue(host, delay_after(step, total));
        }
        Some(CountdownUpdate::Display(self.state.current_value))
    }

    /// Withdraw the run: the pending deferral is cancelled, the step index
    /// freezes, and no further update or completion can be produced — even
    /// by an expiry that was already in flight.
    pub fn cancel(&mut self, host: &mut impl DeferralHost) {
        if matches!(self.phase, CountdownPhase::Done | CountdownPhase::Cancelled) {
            return;
        }
        if let Some(token) = self.pending.take() {
            host.cancel(token);
        }
        self.run += 1;
        self.phase = CountdownPhase::Cancelled;
    }

    /// Change the target before completion: the current schedule is
    /// withdrawn and a fresh one is computed for the new span.
    pub fn retarget(&mut self, target_year: i32, host: &mut impl DeferralHost) {
        if let Some(token) = self.pending.take() {
            host.cancel(token);
        }
        self.run += 1;
        self.target_year = target_year;
        self.phase = CountdownPhase::Idle;
        self.state = CountdownState {
            current_value: self.start_year,
            step_index: 0,
            is_complete: false,
        };
        self.issue(host, START_DELAY);
    }
}
