//! Error types for nodekey.
//!
//! Every failure is terminal for a single derivation. Private key
//! material is never included in error messages.

/// Errors raised while parsing a key or deriving a node key.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("Input must start with '{expected}'")]
    MissingPrefix { expected: &'static str },

    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("{kind} must be 32 bytes, got {actual}")]
    WrongLength { kind: &'static str, actual: usize },

    #[error("Scalar multiplication unavailable: {0}")]
    PrimitiveUnavailable(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, KeyError>;
