//! Errors raised while parsing a CIDR string.

use thiserror::Error;

/// Reasons a raw `A.B.C.D/P` string is rejected.
///
/// Both kinds are detected before any subnet value is derived.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// Four valid octets were given without a `/prefix`.
    #[error("Missing prefix for {0}")]
    MissingPrefix(String),
    /// Anything else that is not a valid IPv4 CIDR.
    #[error("Error: {0}")]
    Malformed(String),
}

impl CidrError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        CidrError::Malformed(reason.into())
    }
}
