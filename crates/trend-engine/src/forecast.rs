//! Trajectory summaries over a forecast horizon.

use smallvec::SmallVec;
use trend_linalg::{poly, roots};
use trend_model::{FitFamily, Mode};

use crate::eval::value_at;
use crate::regress::fit_coefficients;
use crate::EngineError;

/// Extrapolates the fitted trajectory over `[now, now + horizon]` and
/// reduces it to the scalar summary selected by `mode`.
pub fn forecast(
    t: &[f64],
    x: &[f64],
    now: f64,
    horizon: f64,
    fit: FitFamily,
    mode: Mode,
) -> Result<f64, EngineError> {
    let beta = fit_coefficients(t, x, fit)?;

    if mode == Mode::Value {
        return Ok(value_at(fit, &beta, now + horizon));
    }

    if horizon == 0.0 {
        // The interval collapses to a point: max, min and avg all equal the
        // value at `now`, and the spread is zero.
        return Ok(match mode {
            Mode::Delta => 0.0,
            _ => value_at(fit, &beta, now),
        });
    }

    if fit.is_monotone() {
        Ok(monotone_summary(fit, &beta, now, horizon, mode))
    } else {
        polynomial_summary(&beta, now, horizon, mode)
    }
}

/// Monotone families reach their extrema at the interval endpoints.
fn monotone_summary(fit: FitFamily, beta: &[f64], now: f64, horizon: f64, mode: Mode) -> f64 {
    let left = value_at(fit, beta, now);
    let right = value_at(fit, beta, now + horizon);

    match mode {
        Mode::Value => right,
        Mode::Max => left.max(right),
        Mode::Min => left.min(right),
        Mode::Delta => (left - right).abs(),
        Mode::Avg => monotone_average(fit, beta, now, horizon, left, right),
    }
}

/// Closed-form mean of the fitted curve over `[now, now + horizon]`.
fn monotone_average(
    fit: FitFamily,
    beta: &[f64],
    now: f64,
    horizon: f64,
    left: f64,
    right: f64,
) -> f64 {
    match fit {
        FitFamily::Linear => 0.5 * (left + right),
        FitFamily::Exponential => (right - left) / (horizon * beta[1]),
        FitFamily::Logarithmic => {
            right + beta[1] * (libm::log(1.0 + horizon / now) * now / horizon - 1.0)
        }
        FitFamily::Power => {
            if beta[1] != -1.0 {
                (right * (now + horizon) - left * now) / (horizon * (beta[1] + 1.0))
            } else {
                // The antiderivative of 1/t is logarithmic.
                libm::exp(beta[0]) * libm::log(1.0 + horizon / now) / horizon
            }
        }
        FitFamily::Polynomial(_) => {
            unreachable!("polynomial averages go through polynomial_summary")
        }
    }
}

fn polynomial_summary(
    beta: &[f64],
    now: f64,
    horizon: f64,
    mode: Mode,
) -> Result<f64, EngineError> {
    match mode {
        Mode::Value => Ok(poly::value(beta, now + horizon)),
        Mode::Avg => Ok(
            (poly::antiderivative(beta, now + horizon) - poly::antiderivative(beta, now)) / horizon,
        ),
        Mode::Max | Mode::Min | Mode::Delta => polynomial_minmax(beta, now, horizon, mode),
    }
}

/// Candidate extrema are the interval endpoints plus every derivative root
/// whose real part falls inside the interval. Imaginary parts are ignored: a
/// spurious candidate is still a legal evaluation point and can only widen
/// the candidate set, never displace the true extremum.
fn polynomial_minmax(
    beta: &[f64],
    now: f64,
    horizon: f64,
    mode: Mode,
) -> Result<f64, EngineError> {
    let critical = roots::find(&poly::derivative(beta)).map_err(EngineError::Analysis)?;

    let mut candidates: SmallVec<[f64; 8]> = SmallVec::new();
    candidates.push(now);
    candidates.push(now + horizon);
    candidates.extend(
        critical
            .iter()
            .map(|root| root.re)
            .filter(|&t| t >= now && t <= now + horizon),
    );

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &t in &candidates {
        let value = poly::value(beta, t);
        min = min.min(value);
        max = max.max(value);
    }

    Ok(match mode {
        Mode::Max => max,
        Mode::Min => min,
        _ => max - min,
    })
}
