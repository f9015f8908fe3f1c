//! Selector types shared across the trend forecasting crates.
//!
//! Monitoring hosts store the fit family and forecast mode as short strings
//! (`"linear"`, `"polynomial3"`, `"avg"`, ...). These are parsed once at the
//! boundary into the enums below; the numeric code never branches on strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to interpret a fit-family or mode selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("unknown fit family: {0:?}")]
    UnknownFit(String),
    #[error("unknown forecast mode: {0:?}")]
    UnknownMode(String),
    #[error("invalid polynomial degree {0:?}: expected a positive integer")]
    InvalidDegree(String),
}

/// Parametric model class used to regress sampled values against time.
///
/// The empty selector string is an alias for [`FitFamily::Linear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FitFamily {
    #[default]
    Linear,
    Exponential,
    Logarithmic,
    Power,
    /// Polynomial of the given degree (at least 1). The degree is clamped to
    /// `n - 1` when a design matrix is built from `n` samples.
    Polynomial(u32),
}

impl FitFamily {
    /// Whether the fitted curve is monotone over any forecast interval, so
    /// that its extrema lie at the interval endpoints.
    pub fn is_monotone(self) -> bool {
        !matches!(self, FitFamily::Polynomial(_))
    }

    /// Whether sampled values are fitted in log space. Such fits require
    /// every sampled value to be strictly positive.
    pub fn log_transforms_values(self) -> bool {
        matches!(self, FitFamily::Exponential | FitFamily::Power)
    }

    /// Whether the time axis is fitted in log space.
    pub fn log_transforms_times(self) -> bool {
        matches!(self, FitFamily::Logarithmic | FitFamily::Power)
    }
}

impl FromStr for FitFamily {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "linear" => Ok(FitFamily::Linear),
            "exponential" => Ok(FitFamily::Exponential),
            "logarithmic" => Ok(FitFamily::Logarithmic),
            "power" => Ok(FitFamily::Power),
            _ => match s.strip_prefix("polynomial") {
                Some(degree) => match degree.parse::<u32>() {
                    Ok(k) if k >= 1 => Ok(FitFamily::Polynomial(k)),
                    _ => Err(SelectorError::InvalidDegree(degree.to_owned())),
                },
                None => Err(SelectorError::UnknownFit(s.to_owned())),
            },
        }
    }
}

impl fmt::Display for FitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitFamily::Linear => f.write_str("linear"),
            FitFamily::Exponential => f.write_str("exponential"),
            FitFamily::Logarithmic => f.write_str("logarithmic"),
            FitFamily::Power => f.write_str("power"),
            FitFamily::Polynomial(k) => write!(f, "polynomial{k}"),
        }
    }
}

impl From<FitFamily> for String {
    fn from(fit: FitFamily) -> String {
        fit.to_string()
    }
}

impl TryFrom<String> for FitFamily {
    type Error = SelectorError;

    fn try_from(s: String) -> Result<Self, SelectorError> {
        s.parse()
    }
}

/// Scalar summary extracted from the fitted trajectory over the forecast
/// horizon. The empty selector string is an alias for [`Mode::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Mode {
    /// Point value at the end of the horizon.
    #[default]
    Value,
    Max,
    Min,
    /// `max - min` over the horizon.
    Delta,
    /// Mean of the trajectory over the horizon.
    Avg,
}

impl FromStr for Mode {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "value" => Ok(Mode::Value),
            "max" => Ok(Mode::Max),
            "min" => Ok(Mode::Min),
            "delta" => Ok(Mode::Delta),
            "avg" => Ok(Mode::Avg),
            _ => Err(SelectorError::UnknownMode(s.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Value => "value",
            Mode::Max => "max",
            Mode::Min => "min",
            Mode::Delta => "delta",
            Mode::Avg => "avg",
        })
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> String {
        mode.to_string()
    }
}

impl TryFrom<String> for Mode {
    type Error = SelectorError;

    fn try_from(s: String) -> Result<Self, SelectorError> {
        s.parse()
    }
}
