//! Complex roots of real polynomials.
//!
//! Degrees 0 through 2 are handled in closed form; higher degrees run the
//! Weierstrass (Durand-Kerner) iteration, which refines all root
//! approximations simultaneously and needs no derivative.

use num_complex::Complex64;

use crate::{poly, LinalgError};

/// Residual tolerance shared by the iteration's acceptance test and by
/// callers that filter spurious complex roots.
pub const EPSILON: f64 = 1.0e-6;

const MAX_ITERATIONS: u32 = 200;

/// Finds all complex roots of the polynomial `coeffs[i] * t^i`.
///
/// Trailing zero coefficients are ignored; the number of returned roots
/// equals the effective degree. A nonzero constant has no roots, and the
/// identically-zero polynomial is rejected with
/// [`LinalgError::AllNumbersAreRoots`].
///
/// A complex-conjugate quadratic pair is returned with the negative
/// imaginary part first.
pub fn find(coeffs: &[f64]) -> Result<Vec<Complex64>, LinalgError> {
    let mut degree = coeffs.len().saturating_sub(1);
    while degree > 0 && coeffs[degree] == 0.0 {
        degree -= 1;
    }

    if degree == 0 {
        return if coeffs.is_empty() || coeffs[0] == 0.0 {
            Err(LinalgError::AllNumbersAreRoots)
        } else {
            Ok(Vec::new())
        };
    }

    if degree == 1 {
        return Ok(vec![Complex64::new(-coeffs[0] / coeffs[1], 0.0)]);
    }

    if degree == 2 {
        return Ok(quadratic(coeffs));
    }

    weierstrass(&coeffs[..=degree])
}

fn quadratic(c: &[f64]) -> Vec<Complex64> {
    let discriminant = c[1] * c[1] - 4.0 * c[2] * c[0];

    if discriminant > 0.0 {
        // Vieta pairing: compute the root that avoids cancellation first,
        // then recover the other from the product of roots.
        let q = if c[1] > 0.0 {
            -c[1] - libm::sqrt(discriminant)
        } else {
            -c[1] + libm::sqrt(discriminant)
        };

        vec![
            Complex64::new(0.5 * q / c[2], 0.0),
            Complex64::new(2.0 * c[0] / q, 0.0),
        ]
    } else {
        let re = -0.5 * c[1] / c[2];
        let im = libm::fabs(0.5 * libm::sqrt(-discriminant) / c[2]);

        vec![Complex64::new(re, -im), Complex64::new(re, im)]
    }
}

/// Durand-Kerner iteration for degree >= 3.
///
/// All root magnitudes lie in the annulus `[lower, upper]` given by the
/// Cauchy bounds. Approximations are seeded on a circle inside the annulus
/// at angles offset by a quarter step to break symmetry; while the radius is
/// still growing, a sweep whose largest update exceeds the radius is
/// discarded and the circle is doubled instead.
fn weierstrass(coeffs: &[f64]) -> Result<Vec<Complex64>, LinalgError> {
    let degree = coeffs.len() - 1;
    let leading = coeffs[degree];

    let mut upper = 1.0_f64;
    let mut lower = 1.0_f64;
    for i in 0..degree {
        upper = upper.max(libm::fabs(coeffs[i] / leading));
        lower = lower.max(libm::fabs(coeffs[i + 1] / coeffs[0]));
    }
    let lower = 1.0 / lower;
    let mut radius = lower;

    let mut roots = circle(degree, radius);
    let mut updates = vec![Complex64::new(0.0, 0.0); degree];
    let mut initialized = false;
    let mut converged = false;
    let mut iteration = 0;

    while iteration < MAX_ITERATIONS && !converged {
        iteration += 1;

        if !initialized {
            radius *= 2.0;
            if radius <= upper {
                roots = circle(degree, radius);
            } else {
                initialized = true;
            }
        }

        converged = true;
        let mut max_update = 0.0_f64;

        for i in 0..degree {
            let z = roots[i];

            let mut denominator = Complex64::new(leading, 0.0);
            for (j, &other) in roots.iter().enumerate() {
                if j != i {
                    denominator *= z - other;
                }
            }

            let mut power = Complex64::new(1.0, 0.0);
            let mut value = Complex64::new(coeffs[0], 0.0);
            for &c in &coeffs[1..] {
                power *= z;
                value += power * c;
            }

            let residual = libm::fabs(value.re) + libm::fabs(value.im);
            converged = converged && residual < EPSILON;

            // A zero denominator means two approximations coincide, which
            // only happens once they have met at a multiple root; leave them
            // in place.
            updates[i] = if denominator.norm_sqr() == 0.0 {
                Complex64::new(0.0, 0.0)
            } else {
                value / denominator
            };

            max_update = max_update.max(updates[i].norm_sqr());
        }

        if !initialized && max_update > radius * radius {
            // The step wants to leave the current circle: the seed is still
            // too small, so discard this sweep and grow it.
            continue;
        }
        initialized = true;

        for (root, update) in roots.iter_mut().zip(&updates) {
            *root -= *update;
        }
    }

    if converged {
        Ok(roots)
    } else {
        Err(LinalgError::NoConvergence(MAX_ITERATIONS))
    }
}

fn circle(degree: usize, radius: f64) -> Vec<Complex64> {
    (0..degree)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i as f64 + 0.25) / degree as f64;
            Complex64::new(radius * libm::cos(angle), radius * libm::sin(angle))
        })
        .collect()
}

/// `|p(z)|`-style residual used in tests and by callers that need to verify
/// a candidate root is effectively real.
pub fn residual(coeffs: &[f64], t: f64) -> f64 {
    libm::fabs(poly::value(coeffs, t))
}
