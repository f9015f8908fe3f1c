//! Time remaining until the fitted trajectory reaches a threshold.

use smallvec::SmallVec;
use trend_linalg::roots;
use trend_model::FitFamily;

use crate::eval::value_at;
use crate::regress::fit_coefficients;
use crate::EngineError;

/// Estimates how long after `now` the fitted trajectory first equals
/// `threshold`.
///
/// Returns `-1.0` when the threshold is not reached in the forward
/// direction; that is a legitimate result, not an error. Monotone families
/// are inverted in closed form; polynomials search the roots of the fitted
/// polynomial shifted down by the threshold.
pub fn time_left(
    t: &[f64],
    x: &[f64],
    now: f64,
    threshold: f64,
    fit: FitFamily,
) -> Result<f64, EngineError> {
    let beta = fit_coefficients(t, x, fit)?;

    if value_at(fit, &beta, now) == threshold {
        return Ok(0.0);
    }

    let raw = match fit {
        FitFamily::Linear => {
            if beta[1] == 0.0 {
                -1.0
            } else {
                (threshold - beta[0]) / beta[1] - now
            }
        }
        FitFamily::Exponential => {
            if beta[1] == 0.0 {
                -1.0
            } else {
                (libm::log(threshold) - beta[0]) / beta[1] - now
            }
        }
        FitFamily::Logarithmic => {
            if beta[1] == 0.0 {
                -1.0
            } else {
                libm::exp((threshold - beta[0]) / beta[1]) - now
            }
        }
        FitFamily::Power => {
            if beta[1] == 0.0 {
                -1.0
            } else {
                libm::exp((libm::log(threshold) - beta[0]) / beta[1]) - now
            }
        }
        FitFamily::Polynomial(_) => polynomial_time_left(&beta, now, threshold)?,
    };

    // Negative means the crossing lies in the past; NaN means the inverse
    // never attains the threshold (log of a non-positive threshold and the
    // like). Both normalize to the "not reached" sentinel.
    Ok(if raw < 0.0 || raw.is_nan() { -1.0 } else { raw })
}

/// Nearest future real root of the fitted polynomial shifted down by
/// `threshold`.
fn polynomial_time_left(beta: &[f64], now: f64, threshold: f64) -> Result<f64, EngineError> {
    let mut shifted: SmallVec<[f64; 8]> = SmallVec::from_slice(beta);
    shifted[0] -= threshold;

    let candidates = roots::find(&shifted).map_err(EngineError::Analysis)?;

    // Keep the smallest real part beyond `now`. A candidate whose residual
    // is not tiny is genuinely complex and is skipped.
    let mut nearest: Option<f64> = None;
    for candidate in &candidates {
        let t = candidate.re;
        if t > now && roots::residual(&shifted, t) < roots::EPSILON {
            nearest = Some(match nearest {
                Some(best) if best <= t => best,
                _ => t,
            });
        }
    }

    Ok(match nearest {
        Some(t) => t - now,
        None => -1.0,
    })
}
