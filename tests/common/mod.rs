//! Common test utilities
#![allow(dead_code)]

use fixr::algorithm::GammaCoefficients;
use fixr::fixed::FixedPoint;
use num_bigint::BigInt;
use num_traits::Num;
use std::path::PathBuf;

/// Precision of the hard-coded reference mantissas.
pub const REF_PREC: u32 = 200;

/// Parse a (possibly negative) hexadecimal mantissa.
pub fn hex(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 16).expect("valid hex literal")
}

/// `num / den` at `prec` bits, truncated toward zero.
pub fn ratio(num: i64, den: i64, prec: u32) -> FixedPoint {
    FixedPoint::from_ratio(num, den, prec).expect("non-zero denominator")
}

/// Assert `actual` is within `ulps` units in the last place of `expected`.
pub fn assert_within_ulps(actual: &FixedPoint, expected: &BigInt, ulps: u64, msg: &str) {
    let expected = FixedPoint::new(expected.clone(), actual.scale());
    let diff = actual.ulps_from(&expected);
    assert!(
        diff <= BigInt::from(ulps),
        "{}: off by {} ulps (tolerance {}), got {:?} expected {:?}",
        msg,
        diff,
        ulps,
        actual.mantissa(),
        expected.mantissa()
    );
}

/// Assert two f64 values are close within relative tolerance
pub fn assert_close_f64(actual: f64, expected: f64, rtol: f64, msg: &str) {
    let diff = (actual - expected).abs();
    let tol = rtol * expected.abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        actual,
        expected,
        diff,
        tol
    );
}

/// Path to a file under `tests/data`.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// The 768-bit, 180-coefficient table shipped with the tests.
pub fn gamma_table() -> GammaCoefficients {
    GammaCoefficients::load(data_path("gamma_coefficients.txt")).expect("test coefficient table")
}

/// Assert that an error grid indexed `[split][reduction]` never grows by more
/// than `slack` ulps when either index increases by one.
pub fn assert_error_non_increasing(
    errors: &[Vec<BigInt>],
    first_split: usize,
    first_reduction: i32,
    slack: u64,
    msg: &str,
) {
    let slack = BigInt::from(slack);
    for (j, row) in errors.iter().enumerate() {
        for (r, err) in row.iter().enumerate() {
            let label = |dj: usize, dr: usize| {
                format!(
                    "{}: error at J={} r={} exceeds {} at J={} r={}",
                    msg,
                    first_split + j + dj,
                    first_reduction + (r + dr) as i32,
                    err,
                    first_split + j,
                    first_reduction + r as i32
                )
            };
            if let Some(next) = row.get(r + 1) {
                assert!(*next <= err + &slack, "{} ({})", label(0, 1), next);
            }
            if let Some(next) = errors.get(j + 1).and_then(|row| row.get(r)) {
                assert!(*next <= err + &slack, "{} ({})", label(1, 0), next);
            }
        }
    }
}
