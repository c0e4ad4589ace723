//! Error types for fixr

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using fixr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating or loading data
#[derive(Error, Debug)]
pub enum Error {
    /// Input lies outside the mathematical domain of the operation
    #[error("Domain error in '{op}': {reason}")]
    Domain {
        /// The operation name
        op: &'static str,
        /// Why the input was rejected
        reason: String,
    },

    /// Evaluation needs more than the configured tables provide
    #[error("Resource error in '{op}': {reason}")]
    Resource {
        /// The operation name
        op: &'static str,
        /// Which bound was exceeded
        reason: String,
    },

    /// Coefficient file could not be opened or read
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Coefficient data is malformed
    #[error("Malformed coefficient data at line {line}: {reason}")]
    CoefficientFormat {
        /// 1-based line number of the offending token
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a domain error
    pub fn domain(op: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            op,
            reason: reason.into(),
        }
    }

    /// Create a resource error
    pub fn resource(op: &'static str, reason: impl Into<String>) -> Self {
        Self::Resource {
            op,
            reason: reason.into(),
        }
    }

    /// Create a coefficient format error
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::CoefficientFormat {
            line,
            reason: reason.into(),
        }
    }

    /// Whether this is a domain error
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// Whether this is a resource error
    pub fn is_resource(&self) -> bool {
        matches!(self, Self::Resource { .. })
    }
}
