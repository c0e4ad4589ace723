//! Fixed-point values and arithmetic primitives
//!
//! A [`FixedPoint`] pairs an arbitrary-precision mantissa `M` with a binary
//! scale `p` and represents `M / 2^p`. The scale travels with the value
//! across every public call, so an engine always knows the precision the
//! caller asked for.

pub mod primitives;

pub use primitives::{fixed_one, fixmul, fixsquare, isqrt, rescale, shr_trunc};

use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// A scaled-integer value `mantissa / 2^scale`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    mantissa: BigInt,
    scale: u32,
}

impl FixedPoint {
    /// Wrap a raw mantissa at the given scale.
    pub fn new(mantissa: BigInt, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Zero at the given scale.
    pub fn zero(scale: u32) -> Self {
        Self::new(BigInt::zero(), scale)
    }

    /// One at the given scale.
    pub fn one(scale: u32) -> Self {
        Self::new(fixed_one(scale), scale)
    }

    /// An integer value at the given scale.
    pub fn from_int(value: i64, scale: u32) -> Self {
        Self::new(BigInt::from(value) << scale, scale)
    }

    /// `num / den` at the given scale, truncated toward zero.
    pub fn from_ratio(num: i64, den: i64, scale: u32) -> Result<Self> {
        if den == 0 {
            return Err(Error::InvalidArgument {
                arg: "den",
                reason: "denominator must be non-zero".to_string(),
            });
        }
        let mantissa = (BigInt::from(num) << scale) / BigInt::from(den);
        Ok(Self::new(mantissa, scale))
    }

    /// The raw mantissa.
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Number of bits after the binary point.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Split into `(mantissa, scale)`.
    pub fn into_parts(self) -> (BigInt, u32) {
        (self.mantissa, self.scale)
    }

    /// Same value at another scale; narrowing truncates toward zero.
    pub fn rescale(&self, scale: u32) -> Self {
        Self::new(rescale(&self.mantissa, self.scale, scale), scale)
    }

    /// Whether the mantissa is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Absolute difference to `other`, in units of the last place of `self`.
    pub fn ulps_from(&self, other: &FixedPoint) -> BigInt {
        let other = rescale(&other.mantissa, other.scale, self.scale);
        (&self.mantissa - other).abs()
    }

    /// Nearest `f64`, for display and diagnostics.
    pub fn to_f64(&self) -> f64 {
        let bits = self.mantissa.bits();
        let (head, dropped) = if bits > 64 {
            let dropped = (bits - 64) as u32;
            (shr_trunc(&self.mantissa, dropped), i64::from(dropped))
        } else {
            (self.mantissa.clone(), 0)
        };
        let head = head.to_f64().unwrap_or(f64::NAN);
        mul_pow2(head, dropped - i64::from(self.scale))
    }
}

/// `value * 2^exp` without overflowing `powi`'s exponent range midway.
pub(crate) fn mul_pow2(mut value: f64, mut exp: i64) -> f64 {
    const STEP: i64 = 1000;
    while exp > STEP {
        value *= 2f64.powi(STEP as i32);
        exp -= STEP;
    }
    while exp < -STEP {
        value *= 2f64.powi(-STEP as i32);
        exp += STEP;
    }
    value * 2f64.powi(exp as i32)
}
