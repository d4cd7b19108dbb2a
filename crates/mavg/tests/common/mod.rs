//! Shared test utilities for mavg tests.

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal for testing purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Asserts that two series have the same length and match element-wise.
#[allow(dead_code)]
pub fn assert_series_eq(actual: &[f64], expected: &[f64], eps: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: got {actual:?}, expected {expected:?}"
    );
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            approx_eq(a, e, eps),
            "index {i}: got {a}, expected {e} (eps {eps})"
        );
    }
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Tolerance of the published reference scenarios.
#[allow(dead_code)]
pub const REFERENCE_EPSILON: f64 = 1e-3;

/// The five-value reference series.
#[allow(dead_code)]
pub const REFERENCE_SHORT: [f64; 5] = [25.0, 85.0, 65.0, 12.45, 66.2];

/// The seven-value reference series used for DEMA.
#[allow(dead_code)]
pub const REFERENCE_LONG: [f64; 7] = [25.0, 85.0, 65.0, 12.45, 66.2, 11.3, 22.5];

/// Naive O(n·p) SMA used to cross-check the rolling implementation.
#[allow(dead_code)]
pub fn naive_sma(data: &[f64], period: usize) -> Vec<f64> {
    data.windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect()
}

/// Deterministic synthetic price series.
#[allow(dead_code)]
pub fn generate_series(size: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(size);
    let mut price = 100.0;
    for i in 0..size {
        let delta = ((i as f64 * 0.1).sin() * 2.0) + ((i as f64 * 0.03).cos() * 1.5);
        price += delta;
        price = f64::max(price, 10.0);
        data.push(price);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
    }

    #[test]
    fn test_naive_sma() {
        assert_eq!(naive_sma(&[1.0, 2.0, 3.0, 4.0], 2), vec![1.5, 2.5, 3.5]);
    }
}
