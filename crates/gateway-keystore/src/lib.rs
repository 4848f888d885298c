//! Gateway keystore — persisted identities for ThingsIX LoRaWAN gateways.
//!
//! Each gateway is a local EUI-64 paired with a secp256k1 private key. The
//! public key derives the two identifiers used on the network side: the
//! 8-byte network gateway ID and the 32-byte ThingsIX ID. The store keeps
//! the records in a flat YAML file and resolves a gateway by whichever of
//! the three identifiers a protocol path happens to carry.

pub mod config;
pub mod crypto;
pub mod error;
pub mod eui;
pub mod gateway;
pub mod storage;

// Re-export primary types
pub use config::StoreConfig;
pub use crypto::keys::GatewayKey;
pub use error::{KeystoreError, Result};
pub use eui::{Eui64, ThingsIxId};
pub use gateway::Gateway;
pub use storage::{GatewayStore, YamlFileStore};
