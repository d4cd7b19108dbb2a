//! Double Exponential Moving Average (DEMA) indicator.
//!
//! DEMA reduces the lag of a plain EMA by combining a single- and a
//! double-smoothed EMA of the same series.
//!
//! # Algorithm
//!
//! 1. `first = EMA(data, period)`
//! 2. `second = EMA(first, period)`, an EMA of the first EMA's output
//! 3. `DEMA[i] = 2 × first[i + period - 1] - second[i]`
//!
//! The second pass consumes `period - 1` more leading values than the first,
//! so `second[i]` lines up with `first[i + period - 1]`.
//!
//! # Minimum Length
//!
//! The chained passes overlap in at least one point when
//! `data.len() + 1 >= 2 × period`, i.e. `data.len() >= 2 × period - 1`.
//!
//! # Example
//!
//! ```
//! use mavg::indicators::dema::dema;
//!
//! let data = vec![25.0_f64, 85.0, 65.0, 12.45, 66.2, 11.3, 22.5];
//! let result = dema(&data, 3).unwrap();
//!
//! assert_eq!(result.len(), 3);
//! assert!((result[0] - 53.418).abs() < 1e-3);
//! assert!((result[1] - 22.485).abs() < 1e-3);
//! assert!((result[2] - 20.355).abs() < 1e-3);
//! ```

use crate::error::Result;
use crate::indicators::ema::ema;
use crate::traits::{validate_period, SeriesElement, ValidatedInput};

/// Returns the minimum input length required for DEMA.
///
/// This is `2 * period - 1`, the smallest length for which
/// `len + 1 >= 2 * period` holds. Periods past `usize::MAX / 2` report
/// `usize::MAX`, which no slice can reach.
///
/// # Example
///
/// ```
/// use mavg::indicators::dema::dema_min_len;
///
/// assert_eq!(dema_min_len(3), 5);
/// assert_eq!(dema_min_len(14), 27);
/// ```
#[inline]
#[must_use]
pub const fn dema_min_len(period: usize) -> usize {
    if period == 0 {
        0
    } else if period > usize::MAX / 2 {
        usize::MAX
    } else {
        2 * period - 1
    }
}

/// Returns the number of values [`dema`] produces for an input of `len`
/// elements, or 0 when the call would fail.
///
/// # Example
///
/// ```
/// use mavg::indicators::dema::dema_output_len;
///
/// assert_eq!(dema_output_len(7, 3), 3);
/// assert_eq!(dema_output_len(5, 3), 1);
/// assert_eq!(dema_output_len(4, 3), 0);
/// ```
#[inline]
#[must_use]
pub const fn dema_output_len(len: usize, period: usize) -> usize {
    if period == 0 || len < dema_min_len(period) {
        0
    } else {
        len - (dema_min_len(period) - 1)
    }
}

/// Computes the Double Exponential Moving Average (DEMA) of a data series.
///
/// # Arguments
///
/// * `data` - The input data series, oldest value first
/// * `period` - The period of both EMA passes
///
/// # Returns
///
/// A `Vec<T>` of `data.len() - 2 * period + 2` values.
///
/// # Errors
///
/// - `Error::NegativeTimePeriod` if `period` is zero
/// - `Error::TimePeriodTooBig` if `data.len() + 1 < 2 * period`
///
/// Errors from either EMA pass are returned unchanged.
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for the two intermediate EMA series and the output
#[must_use = "this returns a Result with the DEMA values, which should be used"]
pub fn dema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, "dema")?;
    data.validate_min_length(period, dema_min_len(period), "dema")?;

    let first = ema(data, period)?;
    let second = ema(&first, period)?;

    let two = T::two();
    let result = first[period - 1..]
        .iter()
        .zip(&second)
        .map(|(&single, &double)| two * single - double)
        .collect();

    Ok(result)
}
