//! Tempo time crate.
//!
//! Small computers telling an update loop when a configured duration has
//! passed.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`time`] | `Clock`, `SystemClock`, `ManualClock`, `ElapsedTimer`, `ManualTimer` |
//! | [`error`] | `TimerError`, `Result` |
//! | [`logging`] | `LoggingConfig`, `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use tempo_time::time::ManualTimer;
//!
//! let mut cooldown = ManualTimer::new(2_000).unwrap();
//! assert!(!cooldown.is_time_elapsed(500));
//! assert!(cooldown.is_time_elapsed(2_000));
//! ```

pub mod error;
pub mod logging;
pub mod time;

pub use error::{Result, TimerError};
pub use time::{Clock, ElapsedTimer, ManualClock, ManualTimer, SystemClock};
