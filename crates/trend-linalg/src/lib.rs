//! Numeric kernel for the trend forecasting engine.
//!
//! Three building blocks, each sized for small systems (a few thousand
//! samples, polynomial degrees around six):
//!
//! - [`Matrix`]: dense row-major `f64` matrices with transpose, naive
//!   multiplication, and Gauss-Jordan inversion with partial pivoting.
//! - [`poly`]: evaluation, formal derivative, and antiderivative of a real
//!   polynomial given as a coefficient slice.
//! - [`roots`]: all complex roots of a real polynomial, closed-form up to
//!   degree 2 and Weierstrass (Durand-Kerner) iteration beyond.

mod error;
pub mod matrix;
pub mod poly;
pub mod roots;

pub use error::LinalgError;
pub use matrix::Matrix;
pub use num_complex::Complex64;
