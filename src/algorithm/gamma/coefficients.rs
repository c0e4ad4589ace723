//! Precomputed Taylor coefficients of `1/Γ(1+u)`
//!
//! # File Format
//!
//! ```text
//! <precision>
//! <hex coefficient 0>
//! <hex coefficient 1>
//! ...
//! ```
//!
//! The first token is the number of fractional bits every coefficient was
//! computed at. Each following token is one coefficient as a (possibly
//! negative) hexadecimal integer; coefficient `k` multiplies `u^k`. Reading
//! stops at end of input or after [`MAX_GAMMA_COEFFICIENTS`] entries.

use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_traits::Num;
use std::path::Path;
use std::sync::OnceLock;

/// Capacity of a coefficient table.
pub const MAX_GAMMA_COEFFICIENTS: usize = 3000;

/// Environment variable naming the coefficient file for [`GammaCoefficients::load_default`].
pub const GAMMA_DATA_ENV: &str = "FIXR_GAMMA_DATA";

/// File read by [`GammaCoefficients::load_default`] when the variable is unset.
pub const DEFAULT_GAMMA_DATA_FILE: &str = "gamma_data.txt";

/// Empirical polynomial degree needed at a working precision.
///
/// `terms = floor(wp^e + 2)` with `e = low_exponent` below `threshold` and
/// `high_exponent` from there on. The exponents were curve-fit against the
/// error of one specific coefficient table (checked to ~15000 bits); a table
/// generated differently needs its own fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeFit {
    /// Working precision at which the high exponent takes over (default: 1000)
    pub threshold: u32,
    /// Exponent below the threshold (default: 0.76)
    pub low_exponent: f64,
    /// Exponent at and above the threshold (default: 0.787)
    pub high_exponent: f64,
}

impl Default for DegreeFit {
    fn default() -> Self {
        Self {
            threshold: 1000,
            low_exponent: 0.76,
            high_exponent: 0.787,
        }
    }
}

impl DegreeFit {
    /// Highest coefficient index used at `wp` bits.
    pub fn terms(&self, wp: u32) -> usize {
        let exponent = if wp < self.threshold {
            self.low_exponent
        } else {
            self.high_exponent
        };
        (f64::from(wp).powf(exponent) + 2.0) as usize
    }
}

/// Read-only coefficient table for the gamma engine.
#[derive(Debug, Clone)]
pub struct GammaCoefficients {
    precision: u32,
    coefficients: Vec<BigInt>,
    fit: DegreeFit,
}

impl GammaCoefficients {
    /// Build a table from coefficients at `precision` fractional bits.
    pub fn new(precision: u32, coefficients: Vec<BigInt>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "coefficients",
                reason: "table must hold at least one coefficient".to_string(),
            });
        }
        Ok(Self {
            precision,
            coefficients,
            fit: DegreeFit::default(),
        })
    }

    /// Replace the degree fit.
    pub fn with_fit(mut self, fit: DegreeFit) -> Self {
        self.fit = fit;
        self
    }

    /// Parse the text format described in the module docs.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)));

        let (line, first) = tokens
            .next()
            .ok_or_else(|| Error::format(1, "missing precision header"))?;
        let precision: u32 = first
            .parse()
            .map_err(|_| Error::format(line, format!("invalid precision '{}'", first)))?;

        let mut coefficients = Vec::new();
        for (line, token) in tokens.take(MAX_GAMMA_COEFFICIENTS) {
            let value = BigInt::from_str_radix(token, 16)
                .map_err(|_| Error::format(line, format!("invalid hex coefficient '{}'", token)))?;
            coefficients.push(value);
        }
        if coefficients.is_empty() {
            return Err(Error::format(line, "no coefficients after precision header"));
        }

        log::debug!(
            "gamma: parsed {} coefficients at {} bits",
            coefficients.len(),
            precision
        );
        Self::new(precision, coefficients)
    }

    /// Read and parse a coefficient file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Load from `$FIXR_GAMMA_DATA`, or `gamma_data.txt` if unset.
    pub fn load_default() -> Result<Self> {
        let path = std::env::var_os(GAMMA_DATA_ENV)
            .unwrap_or_else(|| DEFAULT_GAMMA_DATA_FILE.into());
        Self::load(path)
    }

    /// Make `table` the process-wide table and return it.
    ///
    /// Only the first installation takes effect; later calls return the
    /// table already in place.
    pub fn install(table: GammaCoefficients) -> &'static GammaCoefficients {
        let installed = INSTALLED.get_or_init(|| table);
        log::debug!(
            "gamma: process table holds {} coefficients at {} bits",
            installed.len(),
            installed.precision()
        );
        installed
    }

    /// The process-wide table, if one has been installed.
    pub fn installed() -> Option<&'static GammaCoefficients> {
        INSTALLED.get()
    }

    /// Fractional bits of the stored coefficients.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false; a table holds at least one coefficient.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Coefficients in ascending powers of `u`.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Degree fit used with this table.
    pub fn fit(&self) -> &DegreeFit {
        &self.fit
    }
}

static INSTALLED: OnceLock<GammaCoefficients> = OnceLock::new();
