//! Top-level error type shared across crates.

use thiserror::Error;

/// Convenience alias used throughout the SDK.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Common error type for the Hedera SDK core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text did not match the expected grammar (entity id, transaction id).
    #[error("invalid format: {0}")]
    Format(String),

    /// The operation needs a capability that is not implemented yet,
    /// e.g. anything that has to interpret alias key material.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A transaction could not be turned into its keyed encoding.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl Error {
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}
