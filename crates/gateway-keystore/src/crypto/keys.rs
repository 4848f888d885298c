//! secp256k1 gateway key material.
//!
//! A gateway key is a raw 32-byte secp256k1 scalar. It is persisted as 64
//! hex characters and zeroized when dropped.

use std::fmt;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use zeroize::Zeroize;

use crate::error::{KeystoreError, Result};

/// SEC1 prefix of a compressed point with an even y-coordinate.
pub const EVEN_PREFIX: u8 = 0x02;

/// A gateway's secp256k1 private key.
///
/// `SecretKey` zeroizes its scalar on drop. `Debug` never prints key bytes.
#[derive(Clone)]
pub struct GatewayKey {
    secret: SecretKey,
}

impl GatewayKey {
    /// Generate a new random key whose public key has an even y-coordinate.
    ///
    /// Roughly half of all keys qualify, so this loops a couple of times on
    /// average.
    pub fn generate() -> Self {
        loop {
            let secret = SecretKey::random(&mut rand::thread_rng());
            let key = Self { secret };
            if key.compressed_public_key()[0] == EVEN_PREFIX {
                return key;
            }
        }
    }

    /// Reconstruct a key from its raw 32-byte scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(KeystoreError::InvalidKey(format!(
                "private key must be 32 bytes, got {}",
                bytes.len()
            )));
        }
        let secret = SecretKey::from_slice(bytes)
            .map_err(|_| KeystoreError::InvalidKey("invalid secp256k1 scalar".to_string()))?;
        Ok(Self { secret })
    }

    /// Reconstruct a key from 64 hex characters.
    pub fn from_hex(text: &str) -> Result<Self> {
        let mut bytes = hex::decode(text)
            .map_err(|e| KeystoreError::InvalidKey(format!("invalid hex: {e}")))?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Return the raw scalar bytes. Caller must zeroize after use.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.secret.to_bytes());
        out
    }

    /// Return the scalar as lowercase hex, the persisted form.
    pub fn to_hex(&self) -> String {
        let mut bytes = self.to_bytes();
        let encoded = hex::encode(bytes);
        bytes.zeroize();
        encoded
    }

    /// Return the 33-byte SEC1 compressed public key.
    pub fn compressed_public_key(&self) -> [u8; 33] {
        let point = self.secret.public_key().to_encoded_point(true);
        let mut out = [0u8; 33];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Return a reference to the underlying secret key.
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }
}

impl PartialEq for GatewayKey {
    fn eq(&self, other: &Self) -> bool {
        // SecretKey compares in constant time.
        self.secret == other.secret
    }
}

impl Eq for GatewayKey {}

impl fmt::Debug for GatewayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayKey")
            .field("public_key", &hex::encode(self.compressed_public_key()))
            .finish_non_exhaustive()
    }
}
