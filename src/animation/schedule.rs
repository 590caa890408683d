//! Cadence of the time-travel counter: near-instantaneous ticking at the
//! start, a pronounced slow-down approaching the target year. The whole
//! schedule is a pure function of the step count, so a retarget recomputes
//! it rather than replaying the old one.

use std::time::Duration;

/// Year shown before the countdown starts.
pub const BASELINE_YEAR: i32 = 2026;

/// Delay between activation and the first display update.
pub const START_DELAY: Duration = Duration::from_millis(500);

/// Shortest gap between consecutive display updates.
pub const MIN_STEP_DELAY: Duration = Duration::from_millis(15);

/// Longest gap, reached as the counter brakes into the target year.
pub const MAX_STEP_DELAY: Duration = Duration::from_millis(250);

/// Pause between the final display update and the completion notification,
/// giving the caller time to show an arrival indicator.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(800);

/// Exponent shaping the accelerate-then-brake cadence.
pub const BRAKE_EXPONENT: f64 = 2.5;

/// Number of display updates for a run: one per year between start and
/// target inclusive.
pub fn step_count(start_year: i32, target_year: i32) -> u64 {
    (i64::from(start_year) - i64::from(target_year)).unsigned_abs() + 1
}

/// The value displayed at step `step` (0-based), moving one year per step
/// from `start_year` toward `target_year`.
pub fn value_at(start_year: i32, target_year: i32, step: u64) -> i32 {
    // Walk in i64: a full-range span does not fit i32.
    let step = step.min(step_count(start_year, target_year) - 1) as i64;
    let value = if target_year <= start_year {
        i64::from(start_year) - step
    } else {
        i64::from(start_year) + step
    };
    value as i32 // lossless: value lies between start and target inclusive
}

/// Delay between step `step` and step `step + 1` of a `total_steps` run.
pub fn delay_after(step: u64, total_steps: u64) -> Duration {
    let span = total_steps.saturating_sub(1).max(1);
    let progress = (step.min(span) as f64) / (span as f64);
    let spread = MAX_STEP_DELAY.as_secs_f64() - MIN_STEP_DELAY.as_secs_f64();
    Duration::from_secs_f64(MIN_STEP_DELAY.as_secs_f64() + progress.powf(BRAKE_EXPONENT) * spread)
}
