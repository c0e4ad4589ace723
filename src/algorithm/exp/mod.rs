//! Fixed-point exponential, hyperbolic and circular functions
//!
//! All three families share one even-power series,
//!
//! ```text
//! cosh(x) = 1 + x²/2! + x⁴/4! + …
//! cos(x)  = 1 - x²/2! + x⁴/4! - …
//! ```
//!
//! evaluated on `x / 2^r` with [`SplitSeries`] and scaled back up by `r`
//! applications of a duplication formula:
//!
//! ```text
//! cosh(2x) = 2·cosh(x)² - 1
//! cos(2x)  = 2·cos(x)² - 1
//! exp(2x)  = exp(x)²
//! ```
//!
//! The companion `s = sqrt(|1 - c²|)` (sinh or sin) is taken from `c`
//! *before* the squarings in exponential mode, where `exp(x) = cosh(x) +
//! sinh(x)` must be formed on the reduced argument, and *after* them in the
//! other two modes. The two orders are not interchangeable.

use super::log::reduction_depth;
use crate::algorithm::series::SplitSeries;
use crate::error::Result;
use crate::fixed::{fixed_one, fixsquare, isqrt, shr_trunc, FixedPoint};
use num_bigint::BigInt;
use num_traits::Signed;

/// Guard bits added on top of `prec + 2r`.
const GUARD_BITS: u32 = 10;

/// Which pair of functions [`exp_series`] produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpMode {
    /// `(cosh(x), sinh(x))`
    Hyperbolic,
    /// `(cos(x), |sin(x)|)`
    Circular,
    /// `(exp(x), scratch)`; only the first value is meaningful
    Exponential,
}

/// Configuration options for the exponential engine
#[derive(Debug, Clone)]
pub struct ExpOptions {
    /// Number of argument halvings `r` (default: 6). Must be non-negative.
    pub reduction_steps: i32,
    /// Number of series accumulators `J` (default: 3). Values below 1 act as 1.
    pub split_degree: usize,
}

impl Default for ExpOptions {
    fn default() -> Self {
        Self {
            reduction_steps: 6,
            split_degree: 3,
        }
    }
}

/// Evaluate the pair selected by `mode` at the scale of `x`.
///
/// In hyperbolic and exponential mode the second value carries the sign of
/// `x`. In circular mode it is the magnitude of `sin(x)`; the sign is not
/// recoverable from `cos(x)` alone.
///
/// # Errors
///
/// - [`Error::Domain`](crate::error::Error::Domain) if `reduction_steps < 0`
pub fn exp_series(
    x: &FixedPoint,
    mode: ExpMode,
    options: &ExpOptions,
) -> Result<(FixedPoint, FixedPoint)> {
    let reduction = reduction_depth("exp", options.reduction_steps)?;
    let prec = x.scale();
    let (c, s) = exp_pair(x.mantissa(), prec, reduction, options.split_degree, mode);
    Ok((FixedPoint::new(c, prec), FixedPoint::new(s, prec)))
}

/// `exp(x)` at the scale of `x`.
pub fn exp(x: &FixedPoint, options: &ExpOptions) -> Result<FixedPoint> {
    exp_series(x, ExpMode::Exponential, options).map(|(c, _)| c)
}

/// `(cosh(x), sinh(x))` at the scale of `x`.
pub fn cosh_sinh(x: &FixedPoint, options: &ExpOptions) -> Result<(FixedPoint, FixedPoint)> {
    exp_series(x, ExpMode::Hyperbolic, options)
}

/// `(cos(x), |sin(x)|)` at the scale of `x`.
pub fn cos_sin(x: &FixedPoint, options: &ExpOptions) -> Result<(FixedPoint, FixedPoint)> {
    exp_series(x, ExpMode::Circular, options)
}

fn exp_pair(x: &BigInt, prec: u32, r: u32, split: usize, mode: ExpMode) -> (BigInt, BigInt) {
    let wp = prec + 2 * r + GUARD_BITS;
    let one = fixed_one(wp);
    let v = shr_trunc(&(x << (wp - prec)), r);

    log::trace!("exp: mode={:?} prec={} r={} J={} wp={}", mode, prec, r, split, wp);

    let mut series = SplitSeries::new(&v, wp, split);
    let first = series.square().clone();
    let alternate = mode == ExpMode::Circular;
    let mut k: u64 = 2;
    series.accumulate(first, |term| {
        *term = &*term / ((k - 1) * k);
        let negate = alternate && (k & 2) != 0;
        k += 2;
        if negate {
            -term.clone()
        } else {
            term.clone()
        }
    });
    let mut c = one.clone() + series.recombine();

    let one_squared: BigInt = &one << wp;
    let companion = |c: &BigInt| -> BigInt {
        let s = isqrt(&(&one_squared - c * c).abs());
        if mode != ExpMode::Circular && x.is_negative() {
            -s
        } else {
            s
        }
    };

    let s = match mode {
        ExpMode::Exponential => {
            let s = companion(&c);
            c += &s;
            for _ in 0..r {
                c = fixsquare(&c, wp);
            }
            s
        }
        ExpMode::Hyperbolic | ExpMode::Circular => {
            for _ in 0..r {
                c = shr_trunc(&(&c * &c), wp - 1) - &one;
            }
            companion(&c)
        }
    };

    (shr_trunc(&c, wp - prec), shr_trunc(&s, wp - prec))
}
