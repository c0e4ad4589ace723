//! Fixed-point gamma function for `x >= 0.5`
//!
//! # Algorithm
//!
//! 1. Work at `wp = prec + 15` bits.
//! 2. Reduce to `[0.5, 1.5)` with the recurrence `Γ(x) = (x-1)·Γ(x-1)`,
//!    accumulating the falling factorial `(x-1)(x-2)…(x-n)`. Every fourth
//!    factor the accumulator is shifted back to about `wp` bits and the
//!    shift is added to a binary exponent, so the mantissa never grows
//!    without bound.
//! 3. Evaluate the polynomial `P(u) ≈ 1/Γ(1+u)` at `u = x - n - 1` by
//!    Horner's rule, with coefficients narrowed from the table's precision.
//! 4. `Γ(x) = factorial / P(u) · 2^exponent`.

mod coefficients;

pub use coefficients::{
    DegreeFit, GammaCoefficients, DEFAULT_GAMMA_DATA_FILE, GAMMA_DATA_ENV,
    MAX_GAMMA_COEFFICIENTS,
};

use crate::error::{Error, Result};
use crate::fixed::{fixed_one, fixmul, mul_pow2, shr_trunc, FixedPoint};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Guard bits added on top of `prec`.
const GUARD_BITS: u32 = 15;

/// Rescale the falling factorial every this many factors.
const RESCALE_INTERVAL: u64 = 4;

/// `Γ(x) ≈ mantissa · 2^exponent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaValue {
    /// Fixed-point mantissa at the scale of the input
    pub mantissa: FixedPoint,
    /// Binary exponent applied on top of the mantissa
    pub exponent: i64,
}

impl GammaValue {
    /// Nearest `f64`, for display and diagnostics.
    pub fn to_f64(&self) -> f64 {
        mul_pow2(self.mantissa.to_f64(), self.exponent)
    }
}

/// Compute `Γ(x)` at the scale of `x` using `table`.
///
/// # Errors
///
/// - [`Error::Domain`] if `x < 0.5`
/// - [`Error::Resource`] if the working precision exceeds the table's
///   precision or the required degree exceeds the table's length
pub fn gamma(x: &FixedPoint, table: &GammaCoefficients) -> Result<GammaValue> {
    let prec = x.scale();
    if (x.mantissa() << 1u32) < fixed_one(prec) {
        return Err(Error::domain("gamma", "argument must be at least 0.5"));
    }

    let wp = prec + GUARD_BITS;
    if wp > table.precision() {
        return Err(Error::resource(
            "gamma",
            format!(
                "working precision {} exceeds coefficient precision {}",
                wp,
                table.precision()
            ),
        ));
    }
    let terms = table.fit().terms(wp);
    if terms >= table.len() {
        return Err(Error::resource(
            "gamma",
            format!(
                "degree {} needs {} coefficients, table holds {}",
                terms,
                terms + 1,
                table.len()
            ),
        ));
    }

    log::trace!("gamma: prec={} wp={} terms={}", prec, wp, terms);

    let one = fixed_one(wp);
    let mut t: BigInt = x.mantissa() << (wp - prec);

    // n = floor(2x) >= 1
    let doubled = shr_trunc(&t, wp - 1)
        .to_u64()
        .ok_or_else(|| Error::resource("gamma", "argument too large to reduce"))?;
    let steps = (doubled - 1) / 2;

    let mut exponent: i64 = 0;
    let factorial = if steps > 0 {
        t -= &one;
        let mut acc = t.clone();
        for k in 1..steps {
            t -= &one;
            acc = fixmul(&acc, &t, wp);
            if k % RESCALE_INTERVAL == 0 {
                let excess = acc.bits() as i64 - i64::from(wp);
                if excess > 0 {
                    acc = shr_trunc(&acc, excess as u32);
                    exponent += excess;
                }
            }
        }
        acc
    } else {
        one.clone()
    };

    // the table is centred on 1
    let u = t - &one;

    let drop = table.precision() - wp;
    let coefficients = table.coefficients();
    let mut p = shr_trunc(&coefficients[terms], drop);
    for c in coefficients[..terms].iter().rev() {
        p = fixmul(&p, &u, wp) + shr_trunc(c, drop);
    }
    if p.is_zero() {
        return Err(Error::resource("gamma", "polynomial evaluated to zero"));
    }

    let y = (factorial << prec).div_floor(&p);
    Ok(GammaValue {
        mantissa: FixedPoint::new(y, prec),
        exponent,
    })
}

/// Compute `Γ(x)` with the process-wide table.
///
/// # Errors
///
/// [`Error::Resource`] if no table has been installed with
/// [`GammaCoefficients::install`], otherwise as [`gamma`].
pub fn gamma_installed(x: &FixedPoint) -> Result<GammaValue> {
    let table = GammaCoefficients::installed()
        .ok_or_else(|| Error::resource("gamma", "no coefficient table installed"))?;
    gamma(x, table)
}
