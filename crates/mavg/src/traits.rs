//! Core traits for mavg numeric operations.
//!
//! [`SeriesElement`] abstracts over `f32` and `f64` so every moving average
//! is written once. [`ValidatedInput`] and the free validation functions
//! implement the two checks shared by every indicator: the period must be
//! positive, and the series must be long enough for it.
//!
//! # Example
//!
//! ```
//! use mavg::traits::{SeriesElement, validate_indicator_input};
//!
//! fn first_window_mean<T: SeriesElement>(data: &[T], period: usize) -> mavg::Result<T> {
//!     validate_indicator_input(data, period, "first_window_mean")?;
//!
//!     let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / T::from_usize(period))
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! assert!((first_window_mean(&data, 3).unwrap() - 2.0).abs() < 1e-10);
//! assert!(first_window_mean(&data, 0).is_err());
//! ```

use num_traits::{Float, NumCast};
use tracing::trace;

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// The trait requires:
/// - `Float`: floating-point arithmetic, NaN and infinity
/// - `NumCast`: conversion from window lengths
/// - `Copy + Default`: cheap iteration and a zero value
/// - `Send + Sync`: series can be shared across threads read-only
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Converts a window length into a series element.
    ///
    /// Float casts from `usize` are total: values past the type's range
    /// round, they never fail.
    #[inline]
    #[must_use]
    fn from_usize(value: usize) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::infinity)
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used for the EMA smoothing factor `2 / (period + 1)` and the DEMA
    /// combination `2 * first - second`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Trait for validating input series before indicator computation.
pub trait ValidatedInput {
    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series has at least `required` elements for a
    /// window of `period`.
    ///
    /// # Errors
    ///
    /// Returns `Error::TimePeriodTooBig` if the series is shorter than `required`.
    #[inline]
    fn validate_min_length(
        &self,
        period: usize,
        required: usize,
        indicator: &'static str,
    ) -> Result<()> {
        let actual = self.len();
        if actual < required {
            trace!(indicator, period, required, len = actual, "series too short for period");
            Err(Error::TimePeriodTooBig {
                period,
                required,
                actual,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that a period is usable as a window length.
///
/// # Errors
///
/// Returns `Error::NegativeTimePeriod` if the period is zero.
#[inline]
pub fn validate_period(period: usize, indicator: &'static str) -> Result<()> {
    if period == 0 {
        trace!(indicator, period, "rejected non-positive time period");
        Err(Error::NegativeTimePeriod { period })
    } else {
        Ok(())
    }
}

/// Validates input for a single-window indicator (SMA, EMA).
///
/// The period is checked before the length, so an empty series with a zero
/// period reports `NegativeTimePeriod`.
///
/// # Errors
///
/// - `Error::NegativeTimePeriod` if the period is zero
/// - `Error::TimePeriodTooBig` if the series is shorter than the period
#[inline]
pub fn validate_indicator_input<T: SeriesElement>(
    data: &[T],
    period: usize,
    indicator: &'static str,
) -> Result<()> {
    validate_period(period, indicator)?;
    data.validate_min_length(period, period, indicator)
}
