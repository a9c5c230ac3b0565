//! Base-point scalar multiplication.
//!
//! The multiplication itself is delegated to `x25519-dalek`. The scalar
//! handed to it is already clamped by [`PrivateKey`], and the library's
//! own clamp leaves a clamped scalar unchanged.

use x25519_dalek::StaticSecret;

use crate::crypto::keys::{PrivateKey, PublicKey, KEY_LENGTH};
use crate::error::{KeyError, Result};

/// Compute `scalar * G` for a private key.
pub fn derive_public_key(private: &PrivateKey) -> Result<PublicKey> {
    let secret = StaticSecret::from(*private.as_bytes());
    let public = PublicKey::from(x25519_dalek::PublicKey::from(&secret));

    // Guards against a faulty primitive only. Clamped scalars are multiples
    // of 8 below 2^255 < 8 * l, so a correct one never returns the identity.
    if public.as_bytes().iter().all(|&b| b == 0) {
        return Err(KeyError::PrimitiveUnavailable(
            "base-point multiplication returned the identity point".into(),
        ));
    }

    log::debug!("derived public key {}", public.to_hex());
    Ok(public)
}

/// Derive public key bytes from exactly 32 raw private key bytes.
///
/// The bytes are clamped before multiplication. Fails with
/// [`KeyError::WrongLength`] for any other input length.
pub fn derive_public_key_bytes(private: &[u8]) -> Result<[u8; KEY_LENGTH]> {
    let key = PrivateKey::try_from_slice(private)?;
    Ok(derive_public_key(&key)?.to_bytes())
}
