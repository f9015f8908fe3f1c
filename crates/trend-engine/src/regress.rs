//! Least-squares fitting of a sample series to a fit family.

use trend_linalg::{LinalgError, Matrix};
use trend_model::FitFamily;

use crate::EngineError;

/// Validates the parallel sample slices shared by every entry point.
pub(crate) fn check_samples(t: &[f64], x: &[f64]) -> Result<(), EngineError> {
    if t.len() != x.len() {
        return Err(EngineError::SampleLengthMismatch {
            times: t.len(),
            values: x.len(),
        });
    }

    if t.is_empty() {
        return Err(EngineError::NoSamples);
    }

    Ok(())
}

/// Builds the design matrix whose rows are the family's basis functions
/// evaluated at each sample time.
///
/// Log-space time axes take `ln(t)` without a domain check: a non-positive
/// sample time yields a non-finite basis value, which propagates through the
/// solve instead of being masked here.
fn design_matrix(t: &[f64], fit: FitFamily) -> Result<Matrix, LinalgError> {
    let n = t.len();

    match fit {
        FitFamily::Linear | FitFamily::Exponential => {
            let mut m = Matrix::zeros(n, 2)?;
            for (i, &time) in t.iter().enumerate() {
                m[(i, 0)] = 1.0;
                m[(i, 1)] = time;
            }
            Ok(m)
        }
        FitFamily::Logarithmic | FitFamily::Power => {
            let mut m = Matrix::zeros(n, 2)?;
            for (i, &time) in t.iter().enumerate() {
                m[(i, 0)] = 1.0;
                m[(i, 1)] = libm::log(time);
            }
            Ok(m)
        }
        FitFamily::Polynomial(k) => {
            // A degree-k fit needs k + 1 basis functions, so k larger than
            // n - 1 is clamped down to it.
            let k = (k as usize).min(n - 1);
            let mut m = Matrix::zeros(n, k + 1)?;
            for (i, &time) in t.iter().enumerate() {
                let mut power = 1.0;
                for j in 0..=k {
                    m[(i, j)] = power;
                    power *= time;
                }
            }
            Ok(m)
        }
    }
}

/// Builds the response column, applying the family's log transform.
fn response_vector(x: &[f64], fit: FitFamily) -> Result<Matrix, EngineError> {
    let mut m = Matrix::zeros(x.len(), 1).map_err(EngineError::Fit)?;

    if fit.log_transforms_values() {
        for (i, &value) in x.iter().enumerate() {
            if value <= 0.0 {
                return Err(EngineError::NonPositiveValue { fit, value });
            }
            m[(i, 0)] = libm::log(value);
        }
    } else {
        for (i, &value) in x.iter().enumerate() {
            m[(i, 0)] = value;
        }
    }

    Ok(m)
}

/// Solves the normal equations `(A^T A) beta = A^T b`.
///
/// Computed as `inverse(A^T A) * (A^T b)`, right-associated to keep every
/// intermediate product small.
fn least_squares(design: &Matrix, response: &Matrix) -> Result<Matrix, LinalgError> {
    let transposed = design.transpose();
    let normal = transposed.mul(design)?;
    let inverted = normal.inverse()?;
    let moment = transposed.mul(response)?;
    inverted.mul(&moment)
}

/// Fits the samples to the family and returns the coefficient column: entry
/// `i` multiplies basis function `i`.
///
/// Two-coefficient families yield `[intercept, slope]` in the transformed
/// space; polynomials yield one coefficient per power of `t`.
pub fn fit_coefficients(t: &[f64], x: &[f64], fit: FitFamily) -> Result<Vec<f64>, EngineError> {
    check_samples(t, x)?;

    let design = design_matrix(t, fit).map_err(EngineError::Fit)?;
    let response = response_vector(x, fit)?;
    let beta = least_squares(&design, &response).map_err(EngineError::Fit)?;

    Ok(beta.into_vec())
}
