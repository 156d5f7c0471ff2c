use crate::error::{ensure_positive, Result};

/// Checks a caller-supplied elapsed time against a target duration.
///
/// Owns no clock. The caller measures elapsed time itself (typically by
/// accumulating frame deltas) and restarts its own counter after a `true`
/// result; the computer never re-arms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ManualTimer {
    target: i64,
    elapsed: i64,
}

impl ManualTimer {
    /// Creates a computer waiting `target_ms` milliseconds.
    pub fn new(target_ms: i64) -> Result<Self> {
        let target = ensure_positive(target_ms)?;
        Ok(Self { target, elapsed: 0 })
    }

    /// Records `elapsed` and returns `true` once it reaches the target.
    ///
    /// Inclusive: `elapsed == target` counts. Any value is accepted,
    /// negative ones included.
    #[inline]
    pub fn is_time_elapsed(&mut self, elapsed: i64) -> bool {
        self.elapsed = elapsed;
        elapsed >= self.target
    }

    /// Last value passed to [`is_time_elapsed`](Self::is_time_elapsed).
    #[inline]
    pub fn elapsed_time(&self) -> i64 {
        self.elapsed
    }

    /// `elapsed / target` for the last supplied value, unclamped.
    #[inline]
    pub fn completion(&self) -> f32 {
        self.elapsed as f32 / self.target as f32
    }

    /// Target duration in milliseconds.
    #[inline]
    pub fn target(&self) -> i64 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimerError;

    #[test]
    fn happy_flow() {
        let mut t = ManualTimer::new(2_000).unwrap();
        assert!(!t.is_time_elapsed(500));
        assert_eq!(t.elapsed_time(), 500);
        assert!(!t.is_time_elapsed(1_500));
        assert!(t.is_time_elapsed(2_001));
        // No re-arming: only the supplied value matters.
        assert!(!t.is_time_elapsed(1));
        assert_eq!(t.elapsed_time(), 1);
    }

    #[test]
    fn supplied_values_are_not_summed() {
        // The caller owns the running total; 500 + 1500 + 1 is never seen here.
        let mut t = ManualTimer::new(2_000).unwrap();
        assert!(!t.is_time_elapsed(500));
        assert!(!t.is_time_elapsed(1_500));
        assert!(!t.is_time_elapsed(1));
        assert_eq!(t.elapsed_time(), 1);
    }

    #[test]
    fn fresh_timer_reports_zero() {
        let t = ManualTimer::new(10).unwrap();
        assert_eq!(t.elapsed_time(), 0);
        assert_eq!(t.completion(), 0.0);
        assert_eq!(t.target(), 10);
    }

    #[test]
    fn exactly_target_is_elapsed() {
        // Inclusive, unlike the self-clocking computer.
        let mut t = ManualTimer::new(2_000).unwrap();
        assert!(!t.is_time_elapsed(1_999));
        assert!(t.is_time_elapsed(2_000));
    }

    #[test]
    fn negative_elapsed_accepted() {
        let mut t = ManualTimer::new(100).unwrap();
        assert!(!t.is_time_elapsed(-50));
        assert_eq!(t.elapsed_time(), -50);
        assert_eq!(t.completion(), -0.5);
    }

    #[test]
    fn completion_is_not_clamped() {
        let mut t = ManualTimer::new(400).unwrap();
        assert!(t.is_time_elapsed(1_000));
        assert_eq!(t.completion(), 2.5);
    }

    #[test]
    fn zero_value() {
        assert_eq!(ManualTimer::new(0).unwrap_err(), TimerError::InvalidArgument { target_ms: 0 });
    }

    #[test]
    fn negative_value() {
        assert_eq!(ManualTimer::new(-1).unwrap_err(), TimerError::InvalidArgument { target_ms: -1 });
    }
}
