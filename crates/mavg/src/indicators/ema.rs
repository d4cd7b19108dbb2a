//! Exponential Moving Average (EMA) indicator.
//!
//! The Exponential Moving Average weights recent values more heavily than
//! older ones, so it reacts faster than the SMA to changes in the series.
//!
//! # Algorithm
//!
//! This implementation computes EMA with O(n) time complexity:
//! 1. The seed is the SMA of the first `period` elements
//! 2. Each later value moves the average toward the new sample by a
//!    fraction `k` of the gap: `EMA = (Price - EMA_prev) × k + EMA_prev`
//!
//! The smoothing factor is `k = 2 / (period + 1)`.
//!
//! # Formula
//!
//! ```text
//! EMA[0] = SMA(prices[0..period])
//! EMA[j] = (Price[j + period - 1] - EMA[j-1]) × k + EMA[j-1]
//! ```
//!
//! # Example
//!
//! ```
//! use mavg::indicators::ema::ema;
//!
//! let data = vec![25.0_f64, 85.0, 65.0, 12.45, 66.2];
//! let result = ema(&data, 3).unwrap();
//!
//! assert_eq!(result.len(), 3);
//! assert!((result[0] - 58.333).abs() < 1e-3); // SMA seed
//! assert!((result[1] - 35.391).abs() < 1e-3);
//! assert!((result[2] - 50.795).abs() < 1e-3);
//! ```

use crate::error::Result;
use crate::traits::{validate_indicator_input, validate_period, SeriesElement};

/// Returns the minimum input length required for EMA.
///
/// # Example
///
/// ```
/// use mavg::indicators::ema::ema_min_len;
///
/// assert_eq!(ema_min_len(14), 14);
/// ```
#[inline]
#[must_use]
pub const fn ema_min_len(period: usize) -> usize {
    period
}

/// Returns the number of values [`ema`] produces for an input of `len`
/// elements, or 0 when the call would fail.
///
/// # Example
///
/// ```
/// use mavg::indicators::ema::ema_output_len;
///
/// assert_eq!(ema_output_len(5, 3), 3);
/// assert_eq!(ema_output_len(2, 3), 0);
/// ```
#[inline]
#[must_use]
pub const fn ema_output_len(len: usize, period: usize) -> usize {
    if period == 0 || len < period {
        0
    } else {
        len - period + 1
    }
}

/// Returns the standard EMA smoothing factor `2 / (period + 1)`.
///
/// # Errors
///
/// Returns `Error::NegativeTimePeriod` if `period` is zero.
///
/// # Example
///
/// ```
/// use mavg::indicators::ema::ema_alpha;
///
/// let k: f64 = ema_alpha(3).unwrap();
/// assert!((k - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn ema_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    validate_period(period, "ema")?;
    Ok(T::two() / (T::from_usize(period) + T::one()))
}

/// Computes the Exponential Moving Average (EMA) of a data series.
///
/// # Arguments
///
/// * `data` - The input data series, oldest value first
/// * `period` - The number of values in the seed window
///
/// # Returns
///
/// A `Vec<T>` of `data.len() - period + 1` values: the SMA seed followed by
/// one smoothed value per remaining input element.
///
/// # Errors
///
/// - `Error::NegativeTimePeriod` if `period` is zero
/// - `Error::TimePeriodTooBig` if `data` has fewer than `period` elements
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for the output vector
#[inline]
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "ema")?;
    let alpha = ema_alpha::<T>(period)?;
    ema_with_alpha(data, period, alpha)
}

/// Computes the EMA with a custom smoothing factor (alpha).
///
/// This is the core implementation behind [`ema`]. The seed is still the
/// SMA of the first `period` elements; `alpha` replaces `2 / (period + 1)` in
/// the recurrence.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of values in the seed window
/// * `alpha` - The smoothing factor, normally in `(0, 1]`
///
/// # Errors
///
/// - `Error::NegativeTimePeriod` if `period` is zero
/// - `Error::TimePeriodTooBig` if `data` has fewer than `period` elements
///
/// # Example
///
/// ```
/// use mavg::indicators::ema::ema_with_alpha;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let result = ema_with_alpha(&data, 3, 1.0).unwrap();
///
/// // alpha = 1 tracks the input exactly after the seed
/// assert_eq!(result, vec![2.0, 4.0, 5.0, 6.0]);
/// ```
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema_with_alpha<T: SeriesElement>(data: &[T], period: usize, alpha: T) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "ema")?;

    let mut result = Vec::with_capacity(ema_output_len(data.len(), period));
    compute_ema_core(data, period, alpha, &mut result);

    Ok(result)
}

/// Core EMA recurrence.
///
/// Assumes validation has been done. Appends the seed and every smoothed
/// value to `output`.
fn compute_ema_core<T: SeriesElement>(data: &[T], period: usize, alpha: T, output: &mut Vec<T>) {
    let (seed_window, rest) = data.split_at(period);
    let seed = seed_window.iter().fold(T::zero(), |acc, &x| acc + x) / T::from_usize(period);
    output.push(seed);

    let mut ema_prev = seed;
    for &value in rest {
        ema_prev = (value - ema_prev) * alpha + ema_prev;
        output.push(ema_prev);
    }
}
