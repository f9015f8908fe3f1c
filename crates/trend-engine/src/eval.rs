//! Per-family evaluation of the fitted model, inverse transform included.

use trend_linalg::poly;
use trend_model::FitFamily;

/// The fitted model's predicted value at `t`.
pub(crate) fn value_at(fit: FitFamily, beta: &[f64], t: f64) -> f64 {
    match fit {
        FitFamily::Linear => beta[0] + beta[1] * t,
        FitFamily::Polynomial(_) => poly::value(beta, t),
        FitFamily::Exponential => libm::exp(beta[0] + beta[1] * t),
        FitFamily::Logarithmic => beta[0] + beta[1] * libm::log(t),
        FitFamily::Power => libm::exp(beta[0] + beta[1] * libm::log(t)),
    }
}
