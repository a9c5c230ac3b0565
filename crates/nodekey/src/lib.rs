//! nodekey: derive Curve25519 node keys from private keys.
//!
//! Parses `privkey:<hex>` input, clamps the scalar, multiplies the
//! Curve25519 base point through `x25519-dalek` and renders the result
//! as `nodekey:<hex>`.

pub mod crypto;
pub mod encoding;
pub mod error;

// Re-export primary types
pub use crypto::derivation::{derive_public_key, derive_public_key_bytes};
pub use crypto::keys::{clamp, PrivateKey, PublicKey, KEY_LENGTH};
pub use encoding::{parse_private_key, parse_public_key, PRIVATE_KEY_PREFIX, PUBLIC_KEY_PREFIX};
pub use error::{KeyError, Result};

/// Parse a `privkey:` line and derive its node key in one step.
pub fn node_key_from_str(input: &str) -> Result<PublicKey> {
    let private = parse_private_key(input)?;
    derive_public_key(&private)
}
