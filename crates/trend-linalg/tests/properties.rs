//! Property suites for the numeric kernel.

use proptest::prelude::*;
use trend_linalg::{poly, roots, Complex64, Matrix};

/// Composite Simpson quadrature of the polynomial over `[a, b]`.
fn simpson(coeffs: &[f64], a: f64, b: f64, intervals: usize) -> f64 {
    let h = (b - a) / intervals as f64;
    let mut sum = poly::value(coeffs, a) + poly::value(coeffs, b);

    for i in 1..intervals {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * poly::value(coeffs, a + i as f64 * h);
    }

    sum * h / 3.0
}

fn complex_value(coeffs: &[f64], z: Complex64) -> Complex64 {
    let mut power = Complex64::new(1.0, 0.0);
    let mut value = Complex64::new(coeffs[0], 0.0);

    for &c in &coeffs[1..] {
        power *= z;
        value += power * c;
    }

    value
}

proptest! {
    #[test]
    fn transpose_is_an_involution(
        rows in 1usize..6,
        cols in 1usize..6,
        seed in prop::collection::vec(-100.0f64..100.0, 25),
    ) {
        let m = Matrix::from_vec(rows, cols, seed[..rows * cols].to_vec()).unwrap();
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn clone_round_trips(
        rows in 1usize..6,
        cols in 1usize..6,
        seed in prop::collection::vec(-100.0f64..100.0, 25),
    ) {
        let m = Matrix::from_vec(rows, cols, seed[..rows * cols].to_vec()).unwrap();
        prop_assert_eq!(m.clone(), m);
    }

    #[test]
    fn inverse_reproduces_identity(
        n in 1usize..6,
        seed in prop::collection::vec(-1.0f64..1.0, 25),
    ) {
        // Push the diagonal away from zero so every sampled matrix is well
        // conditioned; the tolerance below assumes a sane condition number.
        let mut m = Matrix::zeros(n, n).unwrap();
        for i in 0..n {
            for j in 0..n {
                m[(i, j)] = seed[i * n + j] + if i == j { 4.0 } else { 0.0 };
            }
        }

        let product = m.mul(&m.inverse().unwrap()).unwrap();
        let tolerance = 1e-9 * n as f64;
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                prop_assert!(
                    (product[(i, j)] - expected).abs() < tolerance,
                    "element ({}, {}) is {}", i, j, product[(i, j)]
                );
            }
        }
    }

    #[test]
    fn multiplication_is_associative(
        seed in prop::collection::vec(-10.0f64..10.0, 27),
    ) {
        let a = Matrix::from_vec(3, 3, seed[0..9].to_vec()).unwrap();
        let b = Matrix::from_vec(3, 3, seed[9..18].to_vec()).unwrap();
        let c = Matrix::from_vec(3, 3, seed[18..27].to_vec()).unwrap();

        let left = a.mul(&b).unwrap().mul(&c).unwrap();
        let right = a.mul(&b.mul(&c).unwrap()).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                prop_assert!((left[(i, j)] - right[(i, j)]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn derivative_matches_central_difference(
        coeffs in prop::collection::vec(-1.0f64..1.0, 2..7),
        t in -1.0f64..1.0,
    ) {
        let h = 1e-3;
        let numeric = (poly::value(&coeffs, t + h) - poly::value(&coeffs, t - h)) / (2.0 * h);
        let exact = poly::value(&poly::derivative(&coeffs), t);
        prop_assert!(
            (numeric - exact).abs() < 1e-4,
            "difference quotient {} vs derivative {}", numeric, exact
        );
    }

    #[test]
    fn antiderivative_matches_simpson(
        coeffs in prop::collection::vec(-1.0f64..1.0, 1..6),
        a in -2.0f64..2.0,
        b in -2.0f64..2.0,
    ) {
        let exact = poly::antiderivative(&coeffs, b) - poly::antiderivative(&coeffs, a);
        let numeric = simpson(&coeffs, a, b, 2000);
        prop_assert!(
            (numeric - exact).abs() < 1e-9,
            "simpson {} vs antiderivative difference {}", numeric, exact
        );
    }

    #[test]
    fn every_returned_root_has_small_residual(
        mut coeffs in prop::collection::vec(-10.0f64..10.0, 2..10),
        negative_leading in any::<bool>(),
    ) {
        // Keep the leading coefficient well away from zero so the effective
        // degree is the nominal one.
        let d = coeffs.len() - 1;
        let magnitude = 1.0 + 0.9 * coeffs[d].abs();
        coeffs[d] = if negative_leading { -magnitude } else { magnitude };

        let found = roots::find(&coeffs).unwrap();
        prop_assert_eq!(found.len(), d);

        for root in found {
            let value = complex_value(&coeffs, root);
            prop_assert!(
                value.norm() < 1e-4,
                "root {} has residual {}", root, value.norm()
            );
        }
    }
}
