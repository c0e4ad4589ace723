//! Scaled-integer primitives shared by every engine
//!
//! A mantissa `m` at precision `wp` represents `m / 2^wp`. All narrowing
//! operations truncate toward zero; nothing in the crate rounds.

use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::One;

/// The mantissa representing 1.0 at `wp` bits.
pub fn fixed_one(wp: u32) -> BigInt {
    BigInt::one() << wp
}

/// Shift right by `bits`, truncating toward zero.
///
/// `BigInt >> n` rounds toward negative infinity, which would bias negative
/// intermediates differently from positive ones.
pub fn shr_trunc(a: &BigInt, bits: u32) -> BigInt {
    BigInt::from_biguint(a.sign(), a.magnitude() >> bits)
}

/// Fixed-point product `(a * b) / 2^wp`, truncated toward zero.
pub fn fixmul(a: &BigInt, b: &BigInt, wp: u32) -> BigInt {
    shr_trunc(&(a * b), wp)
}

/// Fixed-point square, `(a * a) / 2^wp`.
pub fn fixsquare(a: &BigInt, wp: u32) -> BigInt {
    fixmul(a, a, wp)
}

/// Integer square root of `|a|`.
///
/// Called on values already shifted to `2 * wp` bits, so the root lands
/// back at `wp`.
pub fn isqrt(a: &BigInt) -> BigInt {
    BigInt::from(Roots::sqrt(a.magnitude()))
}

/// Move a mantissa from scale `from` to scale `to`.
///
/// Widening is exact, narrowing truncates toward zero.
pub fn rescale(a: &BigInt, from: u32, to: u32) -> BigInt {
    if to >= from {
        a << (to - from)
    } else {
        shr_trunc(a, from - to)
    }
}
