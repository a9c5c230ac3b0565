//! Cryptographic core of nodekey.
//!
//! This module provides:
//! - Clamped X25519 private keys and encoded public keys
//! - Base-point scalar multiplication backed by `x25519-dalek`

pub mod derivation;
pub mod keys;
