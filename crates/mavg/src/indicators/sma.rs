//! Simple Moving Average (SMA) indicator.
//!
//! The Simple Moving Average is the arithmetic mean of the most recent
//! `period` values, recomputed at every window position.
//!
//! # Algorithm
//!
//! This implementation uses an O(n) rolling sum:
//! 1. The initial sum covers the first `period` elements
//! 2. Each step adds the incoming element and subtracts the element leaving the window
//! 3. Every window sum is divided by `period`
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (P[i] + P[i+1] + ... + P[i+period-1]) / period
//! ```
//!
//! # Output Alignment
//!
//! The output holds one value per complete window, `data.len() - period + 1`
//! values in total. `SMA[0]` is the mean of `data[0..period]`.
//!
//! # Example
//!
//! ```
//! use mavg::indicators::sma::sma;
//!
//! let data = vec![25.0_f64, 85.0, 65.0, 12.45, 66.2];
//! let result = sma(&data, 3).unwrap();
//!
//! assert_eq!(result.len(), 3);
//! assert!((result[0] - 58.333).abs() < 1e-3);
//! assert!((result[1] - 54.15).abs() < 1e-3);
//! assert!((result[2] - 47.883).abs() < 1e-3);
//! ```

use crate::error::Result;
use crate::traits::{validate_indicator_input, SeriesElement};

/// Returns the minimum input length required for SMA.
///
/// # Example
///
/// ```
/// use mavg::indicators::sma::sma_min_len;
///
/// assert_eq!(sma_min_len(5), 5);
/// ```
#[inline]
#[must_use]
pub const fn sma_min_len(period: usize) -> usize {
    period
}

/// Returns the number of values [`sma`] produces for an input of `len`
/// elements, or 0 when the call would fail.
///
/// # Example
///
/// ```
/// use mavg::indicators::sma::sma_output_len;
///
/// assert_eq!(sma_output_len(5, 3), 3);
/// assert_eq!(sma_output_len(4, 4), 1);
/// assert_eq!(sma_output_len(5, 6), 0);
/// assert_eq!(sma_output_len(5, 0), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_output_len(len: usize, period: usize) -> usize {
    if period == 0 || len < period {
        0
    } else {
        len - period + 1
    }
}

/// Computes the Simple Moving Average (SMA) of a data series.
///
/// # Arguments
///
/// * `data` - The input data series, oldest value first
/// * `period` - The number of values averaged per output point
///
/// # Returns
///
/// A `Vec<T>` of `data.len() - period + 1` window means.
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
///
/// # Example
///
/// ```
/// use mavg::indicators::sma::sma;
///
/// let result = sma(&[12.0_f64, 13.0, 15.0, 20.0], 4).unwrap();
/// assert_eq!(result, vec![15.0]);
/// ```
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "sma")?;

    let period_t = T::from_usize(period);
    let mut result = Vec::with_capacity(sma_output_len(data.len(), period));

    let mut sum = data[..period].iter().fold(T::zero(), |acc, &x| acc + x);
    result.push(sum / period_t);

    // Rolling sum: add the incoming value, drop the oldest
    for (&incoming, &outgoing) in data[period..].iter().zip(data) {
        sum = sum + incoming - outgoing;
        result.push(sum / period_t);
    }

    Ok(result)
}
