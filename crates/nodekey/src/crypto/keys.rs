//! X25519 private and public key types.
//!
//! A [`PrivateKey`] always holds a clamped scalar. A [`PublicKey`] is the
//! little-endian Montgomery u-coordinate of `scalar * G`.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{KeyError, Result};

/// Length in bytes of both scalars and encoded points.
pub const KEY_LENGTH: usize = 32;

/// Apply the Curve25519 bit fix-ups to a raw scalar.
///
/// Clears the low three bits of byte 0, clears the high bit of byte 31
/// and sets bit 6 of byte 31. Applying it twice is the same as once.
pub fn clamp(mut scalar: [u8; KEY_LENGTH]) -> [u8; KEY_LENGTH] {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
    scalar
}

/// A clamped X25519 private scalar.
///
/// Zeroized on drop. `Debug` never prints the scalar.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    scalar: [u8; KEY_LENGTH],
}

impl PrivateKey {
    /// Build a private key from raw bytes, clamping them.
    pub fn from_bytes(mut bytes: [u8; KEY_LENGTH]) -> Self {
        let key = Self {
            scalar: clamp(bytes),
        };
        bytes.zeroize();
        key
    }

    /// Build a private key from a slice that must be exactly 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; KEY_LENGTH] = bytes
            .try_into()
            .map_err(|_| KeyError::WrongLength {
                kind: "Private key",
                actual: bytes.len(),
            })?;
        Ok(Self::from_bytes(raw))
    }

    /// Return the clamped scalar bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.scalar
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// An X25519 public key, rendered as a node key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    point: [u8; KEY_LENGTH],
}

impl PublicKey {
    /// Wrap an already encoded point.
    pub fn from_bytes(point: [u8; KEY_LENGTH]) -> Self {
        Self { point }
    }

    /// Return the encoded point.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.point
    }

    /// Return the encoded point by value.
    pub fn to_bytes(&self) -> [u8; KEY_LENGTH] {
        self.point
    }

    /// Lowercase hex of the point, without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.point)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl From<x25519_dalek::PublicKey> for PublicKey {
    fn from(key: x25519_dalek::PublicKey) -> Self {
        Self::from_bytes(key.to_bytes())
    }
}
