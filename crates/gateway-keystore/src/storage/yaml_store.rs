//! YAML file gateway store.
//!
//! All gateways live in a single file holding one YAML list:
//!
//! ```text
//! - local_id: 0102030405060708
//!   private_key: 289c2857d4598e37fb9647507e47a309d6133539bf21a8b9cb6df88fd5232032
//! - local_id: ...
//!   private_key: ...
//! ```
//!
//! New gateways are appended as a one-element list, which concatenates into
//! a single valid list. Existing entries are never rewritten. After every
//! append the whole file is decoded again so memory always mirrors disk.
//!
//! There is no locking. Two writers racing on the same file can both pass
//! the duplicate check and append the same local ID; the first entry wins on
//! lookup. Callers that need exclusivity must serialize writers themselves.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::keys::GatewayKey;
use crate::error::{KeystoreError, Result};
use crate::eui::Eui64;
use crate::gateway::Gateway;
use crate::storage::GatewayStore;

// ── On-disk structure ─────────────────────────────────────────────────────────

/// One list entry as written to disk.
#[derive(Serialize, Deserialize)]
struct GatewayYaml {
    local_id: Eui64,
    /// Hex-encoded 32-byte secp256k1 scalar.
    private_key: String,
}

impl Drop for GatewayYaml {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

// ── YamlFileStore ─────────────────────────────────────────────────────────────

/// Gateway store backed by a single YAML file.
///
/// A missing file is an empty store; the file is created on the first
/// [`add_gateway`](GatewayStore::add_gateway).
#[derive(Debug)]
pub struct YamlFileStore {
    path: PathBuf,
    gateways: Vec<Gateway>,
}

impl YamlFileStore {
    /// Open the store at `path` and load every gateway in it.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::StoreUnavailable` if the file exists but
    /// cannot be read, `KeystoreError::Decode` if it is not a gateway list,
    /// `KeystoreError::KeyDecode` for a malformed private key and
    /// `KeystoreError::Derivation` for a key that yields no valid identity.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            path: path.into(),
            gateways: Vec::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the backing file again and replace the in-memory list.
    ///
    /// On error the previously loaded list is left untouched.
    pub fn reload(&mut self) -> Result<()> {
        let loaded = load(&self.path)?;
        log::debug!(
            "loaded {} gateway(s) from {}",
            loaded.len(),
            self.path.display()
        );
        self.gateways = loaded;
        Ok(())
    }

    /// Generate a fresh key for `local_id`, persist it and return the record.
    ///
    /// # Errors
    ///
    /// Same as [`add_gateway`](GatewayStore::add_gateway).
    pub fn generate_gateway(&mut self, local_id: Eui64) -> Result<&Gateway> {
        self.add_gateway(local_id, GatewayKey::generate())?;
        self.gateway_by_local_id(local_id)
    }

    /// Number of loaded gateways.
    pub fn len(&self) -> usize {
        self.gateways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }
}

impl GatewayStore for YamlFileStore {
    fn gateways(&self) -> &[Gateway] {
        &self.gateways
    }

    /// Append a gateway to the file and reload the store.
    ///
    /// The key is checked before anything is written: a key that yields no
    /// gateway identity fails with `KeystoreError::DerivationFailed` and the
    /// file is left untouched.
    ///
    /// If the append succeeds but the reload fails, the error is returned
    /// and the file already contains the new entry while memory still holds
    /// the old list. Reopen the store to recover.
    fn add_gateway(&mut self, local_id: Eui64, key: GatewayKey) -> Result<()> {
        match self.gateway_by_local_id(local_id) {
            Ok(_) => return Err(KeystoreError::AlreadyExists(local_id)),
            Err(KeystoreError::NotFound) => {}
            Err(e) => return Err(e),
        }

        let gateway = Gateway::new(local_id, key)?;
        let record = GatewayYaml {
            local_id,
            private_key: gateway.private_key().to_hex(),
        };
        let encoded = Zeroizing::new(
            serde_yaml::to_string(std::slice::from_ref(&record))
                .map_err(|e| KeystoreError::Encode(e.to_string()))?,
        );

        {
            let mut file = open_append(&self.path)?;
            // Keep a hand-written last entry without a trailing newline intact.
            if missing_final_newline(&mut file)? {
                file.write_all(b"\n")?;
            }
            file.write_all(encoded.as_bytes())?;
        }
        log::info!("added gateway {local_id} to {}", self.path.display());

        self.reload()
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read and decode the store file. A missing file yields no gateways.
fn load(path: &Path) -> Result<Vec<Gateway>> {
    let raw = match std::fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(KeystoreError::StoreUnavailable(e)),
    };
    decode(&raw)
}

/// Decode raw file contents into gateway records.
fn decode(raw: &[u8]) -> Result<Vec<Gateway>> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    // A null document (`~`, `null`) is an empty list.
    let records: Vec<GatewayYaml> = serde_yaml::from_slice::<Option<Vec<GatewayYaml>>>(raw)
        .map_err(|e| KeystoreError::Decode(e.to_string()))?
        .unwrap_or_default();

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let key = GatewayKey::from_hex(&record.private_key).map_err(|e| {
                KeystoreError::KeyDecode {
                    index,
                    reason: e.to_string(),
                }
            })?;
            Gateway::new(record.local_id, key).map_err(|e| KeystoreError::Derivation {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Return `true` if the file is non-empty and its last byte is not `\n`.
fn missing_final_newline(file: &mut File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Open `path` for appending, creating it owner-only if absent.
///
/// The handle is also readable so the tail of the file can be inspected.
fn open_append(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    Ok(options.open(path)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
