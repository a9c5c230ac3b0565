//! Prefixed hex text form of keys.
//!
//! Private keys read as `privkey:<hex>`, public keys as `nodekey:<hex>`.
//! Hex digits may be either case on input; output is always lowercase.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use zeroize::Zeroize;

use crate::crypto::keys::{PrivateKey, PublicKey, KEY_LENGTH};
use crate::error::{KeyError, Result};

/// Prefix carried by private keys.
pub const PRIVATE_KEY_PREFIX: &str = "privkey:";

/// Prefix carried by public node keys.
pub const PUBLIC_KEY_PREFIX: &str = "nodekey:";

/// Strip surrounding whitespace and a required prefix, then hex-decode.
fn decode_prefixed(input: &str, prefix: &'static str) -> Result<Vec<u8>> {
    let payload = input
        .trim()
        .strip_prefix(prefix)
        .ok_or(KeyError::MissingPrefix { expected: prefix })?;
    Ok(hex::decode(payload)?)
}

/// Parse a `privkey:<64 hex>` string into a clamped private key.
pub fn parse_private_key(input: &str) -> Result<PrivateKey> {
    let mut bytes = decode_prefixed(input, PRIVATE_KEY_PREFIX)?;
    log::debug!("decoded {} private key bytes", bytes.len());
    let key = PrivateKey::try_from_slice(&bytes);
    bytes.zeroize();
    key
}

/// Parse a `nodekey:<64 hex>` string into a public key.
pub fn parse_public_key(input: &str) -> Result<PublicKey> {
    let bytes = decode_prefixed(input, PUBLIC_KEY_PREFIX)?;
    let point: [u8; KEY_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| KeyError::WrongLength {
            kind: "Public key",
            actual: bytes.len(),
        })?;
    Ok(PublicKey::from_bytes(point))
}

impl FromStr for PrivateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        parse_private_key(s)
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        parse_public_key(s)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PUBLIC_KEY_PREFIX}{}", self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
