//! Fixed-point natural logarithm
//!
//! # Algorithm
//!
//! For `x > 0` at precision `prec`, with reduction depth `r` and split `J`:
//!
//! 1. Work at `wp = prec + r + 10` bits.
//! 2. Optionally divide out a cached breakpoint `t = k / 2^9` taken from the
//!    leading bits of `x`, so that `ln(x) = ln(t) + ln(x / t)` with `x / t`
//!    close to 1 (see [`LogLookupTable`]).
//! 3. Take `r` square roots, each halving `ln(x)`.
//! 4. Map to `u = (x - 1) / (x + 1)`, since `ln(x) = 2·artanh(u)`.
//! 5. Sum `u + u³/3 + u⁵/5 + …` with [`SplitSeries`].
//! 6. Multiply by `2^(r+1)`, add back the cached `ln(t)`, truncate to `prec`.

mod lookup;

pub use lookup::{
    LogLookupTable, LOOKUP_POPULATE_REDUCTION, LOOKUP_POPULATE_SPLIT, LOOKUP_PRECISION,
    LOOKUP_SIZE, LOOKUP_STEP,
};

use crate::algorithm::series::SplitSeries;
use crate::error::{Error, Result};
use crate::fixed::{fixed_one, isqrt, shr_trunc, FixedPoint};
use num_bigint::BigInt;
use num_traits::Signed;

/// Guard bits added on top of `prec + r`.
const GUARD_BITS: u32 = 10;

/// Configuration options for the logarithm engine
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Number of square-root reductions `r` (default: 3). Must be non-negative.
    pub reduction_steps: i32,
    /// Number of series accumulators `J` (default: 2). Values below 1 act as 1.
    pub split_degree: usize,
    /// Divide out a cached breakpoint before reducing (default: true)
    pub use_lookup: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            reduction_steps: 3,
            split_degree: 2,
            use_lookup: true,
        }
    }
}

/// Compute `ln(x)` at the scale of `x`, using the process-wide lookup cache.
///
/// # Errors
///
/// - [`Error::Domain`] if `x <= 0` or `reduction_steps < 0`
/// - [`Error::Resource`] if the lookup path is taken and the leading bits of
///   `x` fall outside the cache (`x < 2^-9` or `x >= 2`)
pub fn ln(x: &FixedPoint, options: &LogOptions) -> Result<FixedPoint> {
    ln_with_table(x, options, LogLookupTable::global())
}

/// Compute `ln(x)` at the scale of `x`, using the given lookup cache.
///
/// # Errors
///
/// - [`Error::Domain`] if `x <= 0` or `reduction_steps < 0`
/// - [`Error::Resource`] if the lookup path is taken and the leading bits of
///   `x` fall outside `table` (`x < 2^-9` or `x >= 2`)
pub fn ln_with_table(
    x: &FixedPoint,
    options: &LogOptions,
    table: &LogLookupTable,
) -> Result<FixedPoint> {
    if !x.mantissa().is_positive() {
        return Err(Error::domain("ln", "argument must be positive"));
    }
    let reduction = reduction_depth("ln", options.reduction_steps)?;
    let lookup = options.use_lookup.then_some(table);

    let prec = x.scale();
    let y = log_series(x.mantissa(), prec, reduction, options.split_degree, lookup)?;
    Ok(FixedPoint::new(y, prec))
}

/// Validate a signed reduction depth.
pub(crate) fn reduction_depth(op: &'static str, steps: i32) -> Result<u32> {
    u32::try_from(steps)
        .map_err(|_| Error::domain(op, format!("reduction depth {} is negative", steps)))
}

/// Core evaluator on raw mantissas. `x` must be positive.
///
/// Everything mutable lives in this frame, so the nested call made while
/// populating a lookup entry cannot disturb an outer evaluation.
pub(crate) fn log_series(
    x: &BigInt,
    prec: u32,
    r: u32,
    split: usize,
    lookup: Option<&LogLookupTable>,
) -> Result<BigInt> {
    let wp = prec + r + GUARD_BITS;
    let one = fixed_one(wp);
    let mut v: BigInt = x << (wp - prec);

    log::trace!("ln: prec={} r={} J={} wp={}", prec, r, split, wp);

    let lookup = lookup.filter(|_| LogLookupTable::supports(wp));
    let mut coarse = None;
    if let Some(table) = lookup {
        // x = t·(x/t) with t = k/2^STEP, and x/t = x·2^STEP/k
        let index = LogLookupTable::index_for(&v, wp)?;
        coarse = Some(table.coarse_log(index, wp)?);
        v = (v << LOOKUP_STEP) / BigInt::from(index);
    }

    for _ in 0..r {
        v = isqrt(&(v << wp));
    }

    let u = ((&v - &one) << wp) / (&v + &one);

    let mut series = SplitSeries::new(&u, wp, split);
    let mut k: u64 = 1;
    series.accumulate(u, |term| {
        let contribution = &*term / k;
        k += 2;
        contribution
    });
    let y = series.recombine();

    Ok(match coarse {
        Some(coarse) => shr_trunc(&((y << (r + 1)) + coarse), wp - prec),
        None => shr_trunc(&y, wp - prec - r - 1),
    })
}
