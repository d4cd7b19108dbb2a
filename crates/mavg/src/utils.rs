//! Floating-point comparison helpers.
//!
//! Moving averages accumulate rounding error through running sums and
//! recurrences, so results are compared with a tolerance rather than `==`.
//!
//! # Example
//!
//! ```
//! use mavg::indicators::ema;
//! use mavg::utils::{approx_eq, LOOSE_EPSILON};
//!
//! let result = ema(&[25.0_f64, 85.0, 65.0, 12.45, 66.2], 3).unwrap();
//! assert!(approx_eq(result[1], 35.391_666_67, LOOSE_EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Tolerance for values produced by a single division or a short sum.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for results of long running sums or recurrences.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Absolute tolerance comparison. Two NaNs compare equal, so series that
/// share a NaN position still match.
///
/// ```
/// use mavg::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(58.333_333_333_333_33, 175.0 / 3.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 58.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative tolerance comparison, scaled by the larger magnitude.
///
/// Suited to series whose level is far from 1, such as index points or
/// satoshi prices.
///
/// ```
/// use mavg::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(42_000.0, 42_000.004, 1e-6));
/// assert!(!approx_eq_relative(0.0004, 0.0005, 1e-6));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }

    let scale = a.abs().max(b.abs());
    if scale == T::zero() {
        return true;
    }
    (a - b).abs() / scale < rel_tolerance
}

/// Element-wise [`approx_eq`] over two series of equal length.
///
/// # Example
///
/// ```
/// use mavg::indicators::sma;
/// use mavg::utils::series_approx_eq;
///
/// let result = sma(&[25.0, 85.0, 65.0, 12.45, 66.2], 3).unwrap();
/// assert!(series_approx_eq(&result, &[58.333, 54.15, 47.883], 1e-3));
/// assert!(!series_approx_eq(&result, &[58.333, 54.15], 1e-3));
/// ```
#[must_use]
pub fn series_approx_eq<T: SeriesElement>(actual: &[T], expected: &[T], tolerance: T) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(&a, &b)| approx_eq(a, b, tolerance))
}
