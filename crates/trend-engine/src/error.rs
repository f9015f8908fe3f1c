use thiserror::Error;
use trend_linalg::LinalgError;
use trend_model::FitFamily;

/// Failure of a forecast or time-left evaluation.
///
/// Every failure names the stage that produced it; partial results are never
/// returned. The `-1.0` sentinel of [`crate::time_left`] is a result, not an
/// error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The sample slices were empty.
    #[error("no samples provided")]
    NoSamples,

    /// The parallel time and value slices disagree in length.
    #[error("time and value samples differ in length ({times} vs {values})")]
    SampleLengthMismatch { times: usize, values: usize },

    /// A log-transforming family was given a value outside its domain.
    #[error("{fit} fit requires strictly positive values, got {value}")]
    NonPositiveValue { fit: FitFamily, value: f64 },

    /// The least-squares solve failed (degenerate normal equations, most
    /// commonly duplicate sample times with too high a polynomial degree).
    #[error("least-squares fit failed: {0}")]
    Fit(#[source] LinalgError),

    /// Root finding over the fitted trajectory failed.
    #[error("trajectory analysis failed: {0}")]
    Analysis(#[source] LinalgError),
}
