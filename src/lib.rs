//! # fixr
//!
//! **Arbitrary-precision elementary functions in scaled-integer fixed point.**
//!
//! fixr evaluates `ln`, `exp`, `cosh`/`sinh`, `cos`/`sin` and `Γ` to any
//! binary precision the caller asks for. Values are big-integer mantissas
//! with an explicit binary scale; no floating point is involved in the
//! evaluation.
//!
//! ## Why fixed point?
//!
//! - **Predictable cost**: every operation is an integer multiply, shift,
//!   division by a small integer, or square root
//! - **Tunable**: reduction depth `r` and split degree `J` trade argument
//!   reduction against series length, per call
//! - **Deterministic**: truncation everywhere, so identical inputs give
//!   bit-identical outputs
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixr::prelude::*;
//!
//! let x = FixedPoint::from_ratio(137, 100, 200)?;
//! let y = ln(&x, &LogOptions::default())?;
//! let e = exp(&y, &ExpOptions::default())?;
//!
//! let table = GammaCoefficients::load("gamma_data.txt")?;
//! let g = gamma(&FixedPoint::from_ratio(57, 10, 200)?, &table)?;
//! println!("{}", g.to_f64());
//! ```
//!
//! ## Modules
//!
//! - [`fixed`]: the [`FixedPoint`](fixed::FixedPoint) type and truncating
//!   primitives
//! - [`algorithm`]: the logarithm, exponential and gamma engines
//! - [`error`]: error taxonomy (domain, resource, I/O)
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: `debug` for lookup-cache
//! population and coefficient loading, `trace` for per-call parameters.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod error;
pub mod fixed;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::{
        cos_sin, cosh_sinh, exp, exp_series, gamma, gamma_installed, ln, ln_with_table,
        ExpMode, ExpOptions, GammaCoefficients, GammaValue, LogLookupTable, LogOptions,
    };
    pub use crate::error::{Error, Result};
    pub use crate::fixed::FixedPoint;
}
