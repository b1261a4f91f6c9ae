//! # mathfuncs
//!
//! Small numeric helpers used by `extcalls`.
//!
//! - [`sum`]: adds two [`Number`]s.
//! - [`sum_values`]: the same, for untyped JSON inputs, rejecting anything
//!   that is not a number.

pub mod error;
pub mod number;
pub mod sum;

pub use error::{MathError, Result};
pub use number::Number;
pub use sum::{sum, sum_values};
