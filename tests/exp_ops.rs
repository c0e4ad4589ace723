//! Integration tests for the exponential / hyperbolic / circular engine
//!
//! Tests verify:
//! - Accuracy of exp, cosh, sinh, cos, sin against 200-bit references
//! - Exact results at zero for every mode and parameter choice
//! - cosh² - sinh² = 1 and cos² + sin² = 1
//! - Sign handling for negative arguments
//! - Roundtrip: exp(ln(x)) ≈ x

use fixr::prelude::*;
use num_bigint::BigInt;
use num_traits::Signed;

mod common;

use common::{assert_within_ulps, hex, ratio, REF_PREC};

// floor(f(x) · 2^200) for x = trunc(±37 · 2^200 / 100) / 2^200
const EXP_037: &str = "1729ebc574421ca8d968398a698cbbc034163f5cc65ba643c33";
const COSH_037: &str = "111b959b3c9fce0aa54c8e19f5a2c584e22a79f11ba31aa1e0d";
const SINH_037: &str = "60e562a37a24e9e341bab7073e9f63b51ebc56baab88ba1e26";
const COS_037: &str = "eead01428b5e444ffc12c8341017d0213d3c0357657b2358a8";
const SIN_037: &str = "5c92d43604b77b6626abba41e2b210ddaa943ad771793a0bd7";
const EXP_M037: &str = "b0d3f7104fd7f6c7130e2a981b8cf49903eb48570ea8efffe6";
const EXP_25: &str = "c2eb7ec98f05d8ea6f61a6f424fca73b0c7428e7dfa224439c1";

const MODES: [ExpMode; 3] = [ExpMode::Hyperbolic, ExpMode::Circular, ExpMode::Exponential];

fn options(r: i32, split: usize) -> ExpOptions {
    ExpOptions {
        reduction_steps: r,
        split_degree: split,
    }
}

// ============================================================================
// Accuracy
// ============================================================================

#[test]
fn test_exp_037() {
    let x = ratio(37, 100, REF_PREC);
    let y = exp(&x, &ExpOptions::default()).unwrap();
    assert_within_ulps(&y, &hex(EXP_037), 4, "exp(0.37)");
    assert!((y.to_f64() - 1.447735).abs() < 1e-6);
}

#[test]
fn test_exp_family_across_parameters() {
    let x = ratio(37, 100, REF_PREC);
    let exp_ref = hex(EXP_037);
    let cosh_ref = hex(COSH_037);
    let sinh_ref = hex(SINH_037);
    let cos_ref = hex(COS_037);
    let sin_ref = hex(SIN_037);

    for split in 0..8 {
        for r in 0..16 {
            let opts = options(r, split);
            let label = format!("r={} J={}", r, split);

            let e = exp(&x, &opts).unwrap();
            assert_within_ulps(&e, &exp_ref, 4, &format!("exp {}", label));

            let (c, s) = cosh_sinh(&x, &opts).unwrap();
            assert_within_ulps(&c, &cosh_ref, 4, &format!("cosh {}", label));
            assert_within_ulps(&s, &sinh_ref, 4, &format!("sinh {}", label));

            let (c, s) = cos_sin(&x, &opts).unwrap();
            assert_within_ulps(&c, &cos_ref, 4, &format!("cos {}", label));
            assert_within_ulps(&s, &sin_ref, 4, &format!("sin {}", label));
        }
    }
}

#[test]
fn test_exp_larger_argument() {
    let x = ratio(5, 2, REF_PREC);
    let expected = hex(EXP_25);
    for (r, split) in [(0, 1), (6, 3), (12, 5)] {
        let y = exp(&x, &options(r, split)).unwrap();
        assert_within_ulps(&y, &expected, 4, &format!("exp(2.5) r={} J={}", r, split));
    }
}

#[test]
fn test_exp_negative_argument() {
    let x = ratio(-37, 100, REF_PREC);
    let y = exp(&x, &options(4, 3)).unwrap();
    assert_within_ulps(&y, &hex(EXP_M037), 4, "exp(-0.37)");

    let (c, s) = cosh_sinh(&x, &options(4, 3)).unwrap();
    assert_within_ulps(&c, &hex(COSH_037), 4, "cosh(-0.37)");
    assert_within_ulps(&s, &-hex(SINH_037), 4, "sinh(-0.37)");

    // circular mode reports |sin|
    let (_, s) = cos_sin(&x, &options(4, 3)).unwrap();
    assert_within_ulps(&s, &hex(SIN_037), 4, "|sin(-0.37)|");
}

#[test]
fn test_exp_error_non_increasing_in_r_and_j() {
    let prec = 200;
    let high = 600;
    // with |x| > 1 and no halving, larger J amplifies truncation in the
    // power table, so the sweep for 2.5 starts at r = 1
    let cases = [((37, 100), 0), ((-37, 100), 0), ((5, 2), 1), ((-5, 2), 1)];

    for mode in MODES {
        for ((num, den), first_r) in cases {
            if mode == ExpMode::Circular && num < 0 {
                continue;
            }
            let x = ratio(num, den, prec);
            let (ref_c, ref_s) = exp_series(&x.rescale(high), mode, &options(6, 3)).unwrap();
            let (ref_c, ref_s) = (ref_c.rescale(prec), ref_s.rescale(prec));

            let errors: Vec<Vec<BigInt>> = (1..7)
                .map(|split| {
                    (first_r..12)
                        .map(|r| {
                            let (c, s) = exp_series(&x, mode, &options(r, split)).unwrap();
                            let err = c.ulps_from(&ref_c);
                            if mode == ExpMode::Exponential {
                                err
                            } else {
                                err.max(s.ulps_from(&ref_s))
                            }
                        })
                        .collect()
                })
                .collect();
            common::assert_error_non_increasing(
                &errors,
                1,
                first_r,
                1,
                &format!("{:?} x={}/{}", mode, num, den),
            );
        }
    }
}

// ============================================================================
// Exact values and identities
// ============================================================================

#[test]
fn test_exp_family_at_zero() {
    for prec in [1, 53, 200] {
        let zero = FixedPoint::zero(prec);
        for mode in MODES {
            for split in 0..8 {
                for r in 0..12 {
                    let (c, s) = exp_series(&zero, mode, &options(r, split)).unwrap();
                    assert_eq!(c, FixedPoint::one(prec), "{:?} r={} J={}", mode, r, split);
                    assert!(s.is_zero(), "{:?} r={} J={}", mode, r, split);
                }
            }
        }
    }
}

#[test]
fn test_pythagorean_identities() {
    let prec = 120;
    let one = BigInt::from(1) << (2 * prec);
    let tolerance = BigInt::from(64);

    for (num, den) in [(1, 10), (37, 100), (3, 2), (3, 1), (-2, 1)] {
        let x = ratio(num, den, prec);
        for split in 1..6 {
            for r in 0..10 {
                let opts = options(r, split);

                let (c, s) = cosh_sinh(&x, &opts).unwrap();
                let (c, s) = (c.mantissa(), s.mantissa());
                let residual = ((c * c - s * s - &one).abs()) >> prec;
                assert!(
                    residual <= tolerance,
                    "cosh²-sinh² x={}/{} r={} J={} off by {}",
                    num,
                    den,
                    r,
                    split,
                    residual
                );

                let (c, s) = cos_sin(&x, &opts).unwrap();
                let (c, s) = (c.mantissa(), s.mantissa());
                let residual = ((c * c + s * s - &one).abs()) >> prec;
                assert!(
                    residual <= tolerance,
                    "cos²+sin² x={}/{} r={} J={} off by {}",
                    num,
                    den,
                    r,
                    split,
                    residual
                );
            }
        }
    }
}

#[test]
fn test_exp_is_cosh_plus_sinh() {
    let x = ratio(7, 5, 150);
    let opts = options(5, 2);
    let e = exp(&x, &opts).unwrap();
    let (c, s) = cosh_sinh(&x, &opts).unwrap();
    let sum = FixedPoint::new(c.mantissa() + s.mantissa(), 150);
    assert!(e.ulps_from(&sum) <= BigInt::from(16));
}

// ============================================================================
// Roundtrip
// ============================================================================

#[test]
fn test_exp_ln_roundtrip() {
    let prec = 120;
    let log_opts = LogOptions {
        reduction_steps: 6,
        split_degree: 3,
        use_lookup: false,
    };
    let exp_opts = options(6, 3);

    for (num, den) in [(1, 2), (137, 100), (5, 2), (10, 1)] {
        let x = ratio(num, den, prec);
        let y = ln(&x, &log_opts).unwrap();
        let back = exp(&y, &exp_opts).unwrap();
        // relative tolerance of 2^-(prec-8)
        let tolerance = BigInt::from(256 * num.max(den) / den);
        assert!(
            back.ulps_from(&x) <= tolerance,
            "exp(ln({}/{})) off by {}",
            num,
            den,
            back.ulps_from(&x)
        );
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_negative_reduction_is_domain_error() {
    let x = ratio(1, 3, 64);
    for mode in MODES {
        let err = exp_series(&x, mode, &options(-2, 2)).unwrap_err();
        assert!(err.is_domain());
    }
}
