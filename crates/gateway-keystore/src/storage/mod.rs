//! Storage layer for gateway credentials.
//!
//! The [`GatewayStore`] trait is the lookup surface the rest of a gateway
//! client depends on. Lookups are linear scans over the loaded records and
//! return the first match; a store holds a handful of gateways at most.
//!
//! # Modules
//!
//! - [`yaml_store`] — flat YAML file backend with append-only writes.

pub mod yaml_store;

pub use yaml_store::YamlFileStore;

use crate::crypto::keys::GatewayKey;
use crate::error::{KeystoreError, Result};
use crate::eui::{Eui64, ThingsIxId};
use crate::gateway::Gateway;

/// Read access to a set of gateway identities plus insertion of new ones.
pub trait GatewayStore {
    /// All loaded gateways, in file order.
    fn gateways(&self) -> &[Gateway];

    /// Append a new gateway.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::AlreadyExists` if `local_id` is already
    /// present. Backend-specific errors otherwise.
    fn add_gateway(&mut self, local_id: Eui64, key: GatewayKey) -> Result<()>;

    /// Find a gateway by its 32-byte ThingsIX ID.
    fn gateway_by_thingsix_id(&self, id: &ThingsIxId) -> Result<&Gateway> {
        self.gateways()
            .iter()
            .find(|gw| gw.thingsix_id() == *id)
            .ok_or(KeystoreError::NotFound)
    }

    /// Find a gateway by its local ID.
    fn gateway_by_local_id(&self, id: Eui64) -> Result<&Gateway> {
        self.gateways()
            .iter()
            .find(|gw| gw.local_id() == id)
            .ok_or(KeystoreError::NotFound)
    }

    /// Find a gateway by a local ID given as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::InvalidGatewayId` unless `id` is exactly 8
    /// bytes long.
    fn gateway_by_local_id_bytes(&self, id: &[u8]) -> Result<&Gateway> {
        let id = Eui64::try_from(id)?;
        self.gateway_by_local_id(id)
    }

    /// Find a gateway by its network ID.
    fn gateway_by_network_id(&self, id: Eui64) -> Result<&Gateway> {
        self.gateways()
            .iter()
            .find(|gw| gw.network_id() == id)
            .ok_or(KeystoreError::NotFound)
    }

    /// Find a gateway by a network ID given as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::InvalidGatewayId` unless `id` is exactly 8
    /// bytes long.
    fn gateway_by_network_id_bytes(&self, id: &[u8]) -> Result<&Gateway> {
        let id = Eui64::try_from(id)?;
        self.gateway_by_network_id(id)
    }
}
