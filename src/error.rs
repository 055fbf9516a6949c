//! Error types for scenario context access and tally arithmetic.
//!
//! Failures are never recovered locally: steps propagate them to the harness,
//! which reports the current scenario as failed and moves on.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised when reading values from a
/// [`ScenarioContext`](crate::context::ScenarioContext).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// No value has been stored under the requested key in this scenario.
    #[error("no value stored under key {0:?} in this scenario")]
    MissingKey(String),
    /// Text could not be interpreted as an integer.
    #[error("cannot interpret {text:?} as an integer")]
    NotNumeric {
        /// The text that failed integer conversion.
        text: String,
        /// The underlying parse failure.
        source: ParseIntError,
    },
}

/// Errors raised while updating or reporting the running tally.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Reading or converting a context value failed.
    #[error(transparent)]
    Context(#[from] ContextError),
    /// Checked arithmetic left the `i64` range.
    #[error("tally overflow: current value {current}, applying {applied}")]
    Overflow {
        /// The tally value before the failing operation.
        current: i64,
        /// The amount the operation tried to apply.
        applied: i64,
    },
    /// Writing the tally report to the output sink failed.
    #[error("failed to write the tally report")]
    Report(#[from] std::io::Error),
}
