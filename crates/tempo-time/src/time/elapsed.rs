use std::time::Duration;

use crate::error::{ensure_positive, Result, TimerError};

use super::clock::{Clock, SystemClock};

/// Checks whether a target duration has passed since the last reset.
///
/// The computer reads time from its [`Clock`] on every check. Once more than
/// the target has passed, [`is_time_elapsed`](Self::is_time_elapsed) returns
/// `true` and immediately re-arms by moving the baseline to "now".
///
/// Intended usage is one check per update-loop iteration:
///
/// ```rust
/// use tempo_time::time::{ElapsedTimer, ManualClock};
///
/// let clock = ManualClock::new(0);
/// let mut timer = ElapsedTimer::with_clock(2_000, clock.clone()).unwrap();
///
/// clock.advance(500);
/// assert!(!timer.is_time_elapsed());
/// assert_eq!(timer.elapsed_time(), 500);
///
/// clock.advance(1_501);
/// assert!(timer.is_time_elapsed());
/// assert!(!timer.is_time_elapsed());
/// ```
#[derive(Debug, Clone)]
pub struct ElapsedTimer<C = SystemClock> {
    target: i64,
    last_reset: i64,
    elapsed: i64,
    clock: C,
}

impl ElapsedTimer<SystemClock> {
    /// Creates a wall-clock computer waiting `target_ms` milliseconds.
    pub fn new(target_ms: i64) -> Result<Self> {
        Self::with_clock(target_ms, SystemClock)
    }

    /// Creates a wall-clock computer from a [`Duration`].
    ///
    /// `None` is rejected with [`TimerError::NullInput`]; a duration shorter
    /// than one millisecond is rejected with [`TimerError::InvalidArgument`].
    pub fn from_duration(duration: Option<Duration>) -> Result<Self> {
        Self::from_duration_with_clock(duration, SystemClock)
    }
}

impl<C: Clock> ElapsedTimer<C> {
    /// Creates a computer waiting `target_ms` milliseconds on `clock`.
    ///
    /// The baseline is the clock's reading at construction.
    pub fn with_clock(target_ms: i64, clock: C) -> Result<Self> {
        let target = ensure_positive(target_ms)?;
        let last_reset = clock.now_millis();
        Ok(Self { target, last_reset, elapsed: 0, clock })
    }

    /// Creates a computer from a [`Duration`] on `clock`.
    pub fn from_duration_with_clock(duration: Option<Duration>, clock: C) -> Result<Self> {
        let duration = duration.ok_or_else(|| {
            log::debug!("rejected missing target duration");
            TimerError::NullInput
        })?;
        let target_ms = i64::try_from(duration.as_millis()).map_err(|_| {
            log::debug!("rejected target duration of {duration:?}: too large");
            TimerError::InvalidArgument { target_ms: i64::MAX }
        })?;
        Self::with_clock(target_ms, clock)
    }

    /// Returns `true` if strictly more than the target has passed since the
    /// last reset, re-arming the computer in that case.
    ///
    /// Elapsed exactly equal to the target does not count. The measured value
    /// is cached for [`elapsed_time`](Self::elapsed_time) and
    /// [`completion`](Self::completion) either way.
    pub fn is_time_elapsed(&mut self) -> bool {
        let now = self.clock.now_millis();
        self.elapsed = now.saturating_sub(self.last_reset);
        if self.elapsed > self.target {
            log::trace!("elapsed {} ms > target {} ms, re-arming", self.elapsed, self.target);
            self.last_reset = now;
            return true;
        }
        false
    }

    /// Completion ratio of the last check: `elapsed / target`.
    ///
    /// Not clamped. A value above `1.0` means the target was overrun before
    /// the check that measured it.
    #[inline]
    pub fn completion(&self) -> f32 {
        self.elapsed as f32 / self.target as f32
    }

    /// Moves the baseline to the clock's current reading.
    ///
    /// The cached elapsed value is left as measured by the last check.
    pub fn reset(&mut self) {
        self.last_reset = self.clock.now_millis();
        log::trace!("timer reset at {} ms", self.last_reset);
    }

    /// Elapsed milliseconds measured by the last check (zero before any).
    #[inline]
    pub fn elapsed_time(&self) -> i64 {
        self.elapsed
    }

    /// Target duration in milliseconds.
    #[inline]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Clock this computer reads on every check.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
