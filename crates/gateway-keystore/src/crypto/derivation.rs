//! Gateway identity derivation.
//!
//! Both public identifiers of a gateway are functions of its compressed
//! public key:
//!
//! - ThingsIX ID: the 32 bytes following the SEC1 parity prefix.
//! - Network ID: the first 8 bytes of SHA-256 over the full 33-byte key.
//!
//! Only keys with the even prefix are accepted. The ThingsIX ID drops the
//! prefix, so an odd key could not be recovered from its ID.

use sha2::{Digest, Sha256};

use crate::crypto::keys::{GatewayKey, EVEN_PREFIX};
use crate::error::{KeystoreError, Result};
use crate::eui::{Eui64, ThingsIxId};

/// Derive the ThingsIX ID from a 33-byte compressed public key.
pub fn thingsix_id(compressed: &[u8; 33]) -> Result<ThingsIxId> {
    if compressed[0] != EVEN_PREFIX {
        return Err(KeystoreError::DerivationFailed(format!(
            "public key has prefix {:#04x}, expected {:#04x}",
            compressed[0], EVEN_PREFIX
        )));
    }
    let mut id = [0u8; 32];
    id.copy_from_slice(&compressed[1..]);
    Ok(ThingsIxId(id))
}

/// Derive the network gateway ID from a 33-byte compressed public key.
pub fn network_id(compressed: &[u8; 33]) -> Eui64 {
    let hash = Sha256::digest(compressed);
    let mut id = [0u8; 8];
    id.copy_from_slice(&hash[..8]);
    Eui64(id)
}

/// Derive `(network ID, ThingsIX ID)` for a gateway key.
pub fn derive_identity(key: &GatewayKey) -> Result<(Eui64, ThingsIxId)> {
    let compressed = key.compressed_public_key();
    let id = thingsix_id(&compressed)?;
    Ok((network_id(&compressed), id))
}
