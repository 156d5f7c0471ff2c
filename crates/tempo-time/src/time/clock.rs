use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time, in milliseconds.
///
/// Self-clocking computers read the time through this trait so that callers
/// can substitute a deterministic source (see [`ManualClock`]).
pub trait Clock {
    /// Current time in milliseconds.
    ///
    /// Only differences between two readings are meaningful; the epoch is
    /// implementation-defined.
    fn now_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    #[inline]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Wall clock: milliseconds since the Unix epoch.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_millis()).unwrap_or(i64::MAX),
            // System time set before 1970: report it as a negative offset.
            Err(err) => i64::try_from(err.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        }
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a caller can hand one handle to a
/// computer and keep another to drive time forward:
///
/// ```rust
/// use tempo_time::time::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// let handle = clock.clone();
/// handle.advance(250);
/// assert_eq!(clock.now_millis(), 1_250);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    /// Creates a clock reading `start` milliseconds.
    pub fn new(start: i64) -> Self {
        Self { now: Rc::new(Cell::new(start)) }
    }

    /// Moves the clock to an absolute reading. Going backwards is allowed.
    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    /// Moves the clock by `delta` milliseconds (saturating).
    pub fn advance(&self, delta: i64) {
        self.now.set(self.now.get().saturating_add(delta));
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}
