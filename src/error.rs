//! Error types for address parsing and subnet arithmetic.

use serde::Serialize;
use std::fmt;

/// Stable error kind, independent of the human readable message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    InvalidAddress,
    InvalidNetmask,
    InvalidRange,
}

impl ErrorKind {
    /// The kind string callers should match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidAddress => "InvalidAddress",
            ErrorKind::InvalidNetmask => "InvalidNetmask",
            ErrorKind::InvalidRange => "InvalidRange",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by every calculator operation.
///
/// A failed operation never returns a partially populated result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Malformed octets/hextets, wrong segment count, repeated `::`.
    #[error("Invalid address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },
    /// Netmask that is not a contiguous run of ones followed by zeros.
    #[error("Invalid netmask '{input}': {reason}")]
    InvalidNetmask { input: String, reason: String },
    /// Prefix outside of the family bounds, or not larger than the current one.
    #[error("Invalid range: {reason}")]
    InvalidRange { reason: String },
}

impl CalcError {
    pub fn invalid_address(input: &str, reason: impl Into<String>) -> Self {
        CalcError::InvalidAddress {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_netmask(input: &str, reason: impl Into<String>) -> Self {
        CalcError::InvalidNetmask {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_range(reason: impl Into<String>) -> Self {
        CalcError::InvalidRange {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            CalcError::InvalidNetmask { .. } => ErrorKind::InvalidNetmask,
            CalcError::InvalidRange { .. } => ErrorKind::InvalidRange,
        }
    }
}
