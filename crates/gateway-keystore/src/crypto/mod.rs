//! Cryptographic primitives for gateway identities.
//!
//! This module provides:
//! - secp256k1 private key generation and hex/byte codecs
//! - Derivation of the network ID and ThingsIX ID from a key

pub mod derivation;
pub mod keys;
