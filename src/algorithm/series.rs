//! Split-degree Taylor summation
//!
//! Both the logarithm and the exponential engines sum series whose terms
//! advance by a fixed even power of the reduced variable `x`. Instead of one
//! full multiplication per term, the terms are dealt round-robin into `J`
//! accumulators: accumulator `i` only ever sees terms whose power is
//! congruent to `2i` modulo `2J`, so the running term needs one
//! multiplication by `x^(2J)` per pass over all `J` accumulators. The
//! missing `x^(2i)` factors are applied once at the end.
//!
//! ```text
//! pows[0] = 1
//! pows[1] = x²
//! pows[i] = pows[i-1] · x²          (i ≥ 2)
//! stride  = x^(2J)
//! result  = sums[0] + Σ sums[i] · pows[i]
//! ```
//!
//! Every product is truncated to `wp` bits. The state is built per call and
//! dropped when the call returns, so nested evaluations never share it.

use crate::fixed::{fixed_one, fixmul, fixsquare};
use num_bigint::BigInt;
use num_traits::Zero;

/// Per-call power table and residue-class accumulators.
#[derive(Debug)]
pub struct SplitSeries {
    wp: u32,
    square: BigInt,
    stride: BigInt,
    pows: Vec<BigInt>,
    sums: Vec<BigInt>,
}

impl SplitSeries {
    /// Build the power table for `x` at `wp` bits with `split` accumulators.
    ///
    /// A split below 1 is treated as 1.
    pub fn new(x: &BigInt, wp: u32, split: usize) -> Self {
        let split = split.max(1);
        let square = fixsquare(x, wp);

        let mut pows = Vec::with_capacity(split);
        pows.push(fixed_one(wp));
        if split > 1 {
            pows.push(square.clone());
        }
        for i in 2..split {
            let next = fixmul(&pows[i - 1], &pows[1], wp);
            pows.push(next);
        }

        let stride = if split == 1 {
            square.clone()
        } else {
            fixmul(&pows[split - 1], &pows[1], wp)
        };

        Self {
            wp,
            square,
            stride,
            pows,
            sums: vec![BigInt::zero(); split],
        }
    }

    /// Number of accumulators.
    pub fn split(&self) -> usize {
        self.sums.len()
    }

    /// `x²` at `wp` bits.
    pub fn square(&self) -> &BigInt {
        &self.square
    }

    /// Multiplier applied to the running term after each pass, `x^(2J)`.
    pub fn stride(&self) -> &BigInt {
        &self.stride
    }

    /// The power table `pows[0..J]`.
    pub fn powers(&self) -> &[BigInt] {
        &self.pows
    }

    /// Sum the series starting from `term`.
    ///
    /// `next` is called once per accumulator per pass. It may rewrite the
    /// running term in place (for series whose denominators compound) and
    /// returns the signed contribution added to that accumulator. After each
    /// pass the running term is multiplied by the stride; summation stops
    /// once it truncates to zero.
    pub fn accumulate<F>(&mut self, mut term: BigInt, mut next: F)
    where
        F: FnMut(&mut BigInt) -> BigInt,
    {
        while !term.is_zero() {
            for sum in self.sums.iter_mut() {
                *sum += next(&mut term);
            }
            term = fixmul(&term, &self.stride, self.wp);
        }
    }

    /// Weight each accumulator by its power and add them up.
    pub fn recombine(self) -> BigInt {
        let wp = self.wp;
        let mut sums = self.sums.into_iter();
        let mut total = sums.next().unwrap_or_default();
        for (sum, pow) in sums.zip(self.pows.iter().skip(1)) {
            total += fixmul(&sum, pow, wp);
        }
        total
    }
}
