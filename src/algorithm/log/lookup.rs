//! Lazily populated table of `ln(k / 2^LOOKUP_STEP)`
//!
//! The leading `LOOKUP_STEP + 1` bits of the argument select a breakpoint
//! `t = k / 2^LOOKUP_STEP`. Dividing `t` out leaves a value within about
//! `2^-LOOKUP_STEP` of 1, so fewer square-root reductions are needed for
//! the same accuracy.
//!
//! Entries are computed on first use by a single nested call into the
//! logarithm engine at `LOOKUP_PRECISION` bits with the lookup disabled, so
//! population never recurses further. Each slot is an explicit
//! `Option<BigInt>`: `ln(1) = 0` is a real, cached value, not a hole.

use super::log_series;
use crate::error::{Error, Result};
use crate::fixed::shr_trunc;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Number of fractional bits in a breakpoint `k / 2^LOOKUP_STEP`.
pub const LOOKUP_STEP: u32 = 9;

/// Number of slots; covers breakpoints in `[0, 2)`.
pub const LOOKUP_SIZE: usize = 1 << (LOOKUP_STEP + 1);

/// Precision of cached values. Evaluations above it skip the table.
pub const LOOKUP_PRECISION: u32 = 4096;

/// Reduction depth used when populating an entry.
pub const LOOKUP_POPULATE_REDUCTION: u32 = 8;

/// Split degree used when populating an entry.
pub const LOOKUP_POPULATE_SPLIT: usize = 8;

/// Memo table of logarithms at fixed breakpoints.
///
/// Safe to share between threads. Two threads missing the same slot may
/// both compute it; the computation is deterministic and the first value
/// stored wins.
pub struct LogLookupTable {
    entries: RwLock<Vec<Option<BigInt>>>,
    populations: AtomicUsize,
}

impl LogLookupTable {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(vec![None; LOOKUP_SIZE]),
            populations: AtomicUsize::new(0),
        }
    }

    /// The process-wide table used by [`ln`](super::ln).
    pub fn global() -> &'static LogLookupTable {
        static GLOBAL: OnceLock<LogLookupTable> = OnceLock::new();
        GLOBAL.get_or_init(LogLookupTable::new)
    }

    /// Whether cached values can be narrowed to `wp` bits.
    pub fn supports(wp: u32) -> bool {
        wp <= LOOKUP_PRECISION
    }

    /// Slot for a positive mantissa `x` at `wp` bits: `floor(x · 2^STEP)`.
    pub fn index_for(x: &BigInt, wp: u32) -> Result<usize> {
        let index = shr_trunc(x, wp - LOOKUP_STEP)
            .to_usize()
            .filter(|&k| k > 0 && k < LOOKUP_SIZE)
            .ok_or_else(|| {
                Error::resource(
                    "ln",
                    format!(
                        "lookup index outside 1..{} (argument must lie in [2^-{}, 2))",
                        LOOKUP_SIZE, LOOKUP_STEP
                    ),
                )
            })?;
        Ok(index)
    }

    /// `ln(index / 2^STEP)` narrowed to `wp` bits, computing it on a miss.
    pub fn coarse_log(&self, index: usize, wp: u32) -> Result<BigInt> {
        if index == 0 || index >= LOOKUP_SIZE {
            return Err(Error::resource(
                "ln",
                format!("lookup index {} outside 1..{}", index, LOOKUP_SIZE),
            ));
        }
        if !Self::supports(wp) {
            return Err(Error::resource(
                "ln",
                format!("wp {} exceeds lookup precision {}", wp, LOOKUP_PRECISION),
            ));
        }

        if let Some(value) = &self.entries.read()[index] {
            return Ok(shr_trunc(value, LOOKUP_PRECISION - wp));
        }

        // Computed without holding the lock; the nested call has no table.
        let value = self.populate(index)?;
        let mut entries = self.entries.write();
        let value = entries[index].get_or_insert(value);
        Ok(shr_trunc(value, LOOKUP_PRECISION - wp))
    }

    fn populate(&self, index: usize) -> Result<BigInt> {
        log::debug!("ln lookup: populating slot {}", index);
        self.populations.fetch_add(1, Ordering::Relaxed);
        let t = BigInt::from(index) << (LOOKUP_PRECISION - LOOKUP_STEP);
        log_series(
            &t,
            LOOKUP_PRECISION,
            LOOKUP_POPULATE_REDUCTION,
            LOOKUP_POPULATE_SPLIT,
            None,
        )
    }

    /// Whether slot `index` holds a value.
    pub fn contains(&self, index: usize) -> bool {
        self.entries
            .read()
            .get(index)
            .is_some_and(|entry| entry.is_some())
    }

    /// Number of slots holding a value.
    pub fn populated(&self) -> usize {
        self.entries.read().iter().filter(|e| e.is_some()).count()
    }

    /// Number of nested evaluations run to fill slots.
    pub fn populations(&self) -> usize {
        self.populations.load(Ordering::Relaxed)
    }
}

impl Default for LogLookupTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LogLookupTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogLookupTable")
            .field("populated", &self.populated())
            .field("populations", &self.populations())
            .finish()
    }
}
