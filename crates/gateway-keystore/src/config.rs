//! Store configuration.
//!
//! `StoreConfig` is meant to be embedded in the host application's own
//! configuration file, e.g. under a `gateway_store` key:
//!
//! ```yaml
//! gateway_store:
//!   path: /etc/thingsix-forwarder/gateways.yaml
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{KeystoreError, Result};
use crate::storage::YamlFileStore;

/// Default file name, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "gateways.yaml";

/// Where the gateway store lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the YAML gateway file.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl StoreConfig {
    /// Parse a standalone YAML configuration document.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
            .map_err(|e| KeystoreError::Decode(format!("invalid store config: {e}")))
    }

    /// Open the configured store.
    pub fn open(&self) -> Result<YamlFileStore> {
        YamlFileStore::open(&self.path)
    }
}
