use std::fmt;

/// Construction error for the elapsed-time computers.
///
/// Only constructors fail; checking a computer never does.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TimerError {
    /// The target duration resolved to zero or a negative number of
    /// milliseconds (or to more milliseconds than fit in an `i64`, reported
    /// as `i64::MAX`).
    InvalidArgument { target_ms: i64 },
    /// A duration argument was required but absent.
    NullInput,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { target_ms } => {
                write!(f, "target duration must be positive, got {target_ms} ms")
            }
            Self::NullInput => f.write_str("target duration is missing"),
        }
    }
}

impl std::error::Error for TimerError {}

pub type Result<T> = std::result::Result<T, TimerError>;

/// Checks that a target duration is strictly positive.
pub(crate) fn ensure_positive(target_ms: i64) -> Result<i64> {
    if target_ms > 0 {
        Ok(target_ms)
    } else {
        log::debug!("rejected target duration of {target_ms} ms");
        Err(TimerError::InvalidArgument { target_ms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_target_accepted() {
        assert_eq!(ensure_positive(1), Ok(1));
        assert_eq!(ensure_positive(i64::MAX), Ok(i64::MAX));
    }

    #[test]
    fn zero_and_negative_targets_rejected() {
        assert_eq!(ensure_positive(0), Err(TimerError::InvalidArgument { target_ms: 0 }));
        assert_eq!(ensure_positive(-1), Err(TimerError::InvalidArgument { target_ms: -1 }));
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            TimerError::InvalidArgument { target_ms: -5 }.to_string(),
            "target duration must be positive, got -5 ms"
        );
        assert_eq!(TimerError::NullInput.to_string(), "target duration is missing");
    }
}
