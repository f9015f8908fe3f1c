#![allow(dead_code)]

/// Asserts two floats agree to within `1e-9`.
pub fn assert_close(actual: f64, expected: f64) {
    assert_close_eps(actual, expected, 1e-9);
}

pub fn assert_close_eps(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "expected {expected}, got {actual}"
    );
}
