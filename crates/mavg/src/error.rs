//! Error types for mavg.
//!
//! Every moving average in this crate fails in exactly one of two ways: the
//! window is empty, or the series is too short for the window. Both are
//! surfaced as [`Error`] values and never as panics or partial output.

use thiserror::Error;

/// The error type for moving-average computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The time period is zero.
    ///
    /// A window must aggregate at least one element.
    #[error("time period must be greater than 0, got {period}")]
    NegativeTimePeriod {
        /// The period that was provided.
        period: usize,
    },

    /// The series is too short for the requested time period.
    ///
    /// For SMA and EMA the series needs at least `period` values. DEMA chains
    /// two EMA passes and needs at least `2 * period - 1`.
    #[error(
        "time period must not be greater than number of values: \
         period {period} requires at least {required} values, got {actual}"
    )]
    TimePeriodTooBig {
        /// The period that was provided.
        period: usize,
        /// The minimum number of values this period needs.
        required: usize,
        /// The number of values provided.
        actual: usize,
    },
}

/// Convenience type alias for Results using the mavg Error type.
pub type Result<T> = std::result::Result<T, Error>;
