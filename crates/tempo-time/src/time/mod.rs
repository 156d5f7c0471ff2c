//! Elapsed-time computers.
//!
//! Two independent computers answer "has the target duration passed?":
//! - [`ElapsedTimer`] reads a [`Clock`] itself and re-arms when it fires
//! - [`ManualTimer`] is handed the elapsed time by its caller on every check
//!
//! Both are meant to be checked once per update-loop iteration by a single
//! owner; neither synchronizes internally.

mod clock;
mod elapsed;
mod manual;

pub use clock::{Clock, ManualClock, SystemClock};
pub use elapsed::ElapsedTimer;
pub use manual::ManualTimer;
