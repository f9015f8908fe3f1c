//! Forecasting and time-to-threshold engine for monitored metrics.
//!
//! Given a time-indexed sample of past observations, a parametric
//! [`FitFamily`], and a query [`Mode`], the engine either summarizes the
//! predicted trajectory over a forecast horizon ([`forecast`]) or estimates
//! the time remaining until the trajectory first reaches a threshold
//! ([`time_left`]).
//!
//! The engine is a pure, synchronous library: every call fits its own
//! coefficients from the samples it is handed, holds no state between calls,
//! and returns a single scalar or an [`EngineError`] naming the stage that
//! failed.
//!
//! ```
//! use trend_engine::{forecast, time_left, FitFamily, Mode};
//!
//! let t = [0.0, 1.0, 2.0, 3.0];
//! let x = [1.0, 3.0, 5.0, 7.0];
//!
//! let value = forecast(&t, &x, 10.0, 0.0, FitFamily::Linear, Mode::Value).unwrap();
//! assert!((value - 21.0).abs() < 1e-9);
//!
//! let remaining = time_left(&t, &x, 3.0, 15.0, FitFamily::Linear).unwrap();
//! assert!((remaining - 4.0).abs() < 1e-9);
//! ```

mod error;
mod eval;
mod forecast;
mod regress;
mod timeleft;

pub use error::EngineError;
pub use forecast::forecast;
pub use regress::fit_coefficients;
pub use timeleft::time_left;

pub use trend_model::{FitFamily, Mode, SelectorError};
