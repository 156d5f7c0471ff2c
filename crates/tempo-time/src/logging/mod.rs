//! Logging utilities.
//!
//! The computers log through the `log` facade only. This module offers an
//! `env_logger` setup for binaries that do not bring their own backend.

mod init;

pub use init::{init_logging, LoggingConfig};
