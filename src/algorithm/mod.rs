//! Series-evaluation engines
//!
//! Each engine takes a [`FixedPoint`](crate::fixed::FixedPoint) argument and
//! returns its result at the same scale. Internally every evaluation widens
//! to a working precision `wp` with guard bits sized to its reduction depth,
//! reduces the argument, sums a Taylor series and undoes the reduction.
//!
//! | Engine | Reduction | Series | Reconstruction | `wp` |
//! |--------|-----------|--------|----------------|------|
//! | [`log`] | lookup breakpoint, `r` square roots | `2·artanh(u)` | `· 2^(r+1)` | `prec + r + 10` |
//! | [`exp`] | `x / 2^r` | `cosh`/`cos` | `r` duplications | `prec + 2r + 10` |
//! | [`gamma`] | falling factorial | `1/Γ(1+u)` polynomial | division | `prec + 15` |
//!
//! The logarithm and exponential engines share the split-degree summation
//! in [`series`].

pub mod exp;
pub mod gamma;
pub mod log;
pub mod series;

pub use exp::{cos_sin, cosh_sinh, exp, exp_series, ExpMode, ExpOptions};
pub use gamma::{gamma, gamma_installed, DegreeFit, GammaCoefficients, GammaValue};
pub use log::{ln, ln_with_table, LogLookupTable, LogOptions};
pub use series::SplitSeries;
