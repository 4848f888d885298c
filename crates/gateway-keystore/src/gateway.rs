//! A gateway credential record.

use crate::crypto::derivation;
use crate::crypto::keys::GatewayKey;
use crate::error::Result;
use crate::eui::{Eui64, ThingsIxId};

/// A gateway identity: local ID, private key and the IDs derived from it.
///
/// Records are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    local_id: Eui64,
    network_id: Eui64,
    thingsix_id: ThingsIxId,
    key: GatewayKey,
}

impl Gateway {
    /// Build a gateway record, deriving its network and ThingsIX IDs.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::DerivationFailed` if the key's public point
    /// has an odd y-coordinate.
    pub fn new(local_id: Eui64, key: GatewayKey) -> Result<Self> {
        let (network_id, thingsix_id) = derivation::derive_identity(&key)?;
        Ok(Self {
            local_id,
            network_id,
            thingsix_id,
            key,
        })
    }

    /// The ID the gateway uses for itself on its local network.
    pub fn local_id(&self) -> Eui64 {
        self.local_id
    }

    /// The ID the gateway is known by on the network-facing protocol.
    pub fn network_id(&self) -> Eui64 {
        self.network_id
    }

    pub fn thingsix_id(&self) -> ThingsIxId {
        self.thingsix_id
    }

    pub fn private_key(&self) -> &GatewayKey {
        &self.key
    }

    pub fn compressed_public_key(&self) -> [u8; 33] {
        self.key.compressed_public_key()
    }
}
