//! Error types for the gateway keystore.
//!
//! Every failure is returned to the caller as a `KeystoreError` variant so
//! callers can match on the kind. Private key material is never included in
//! error messages.

use crate::eui::Eui64;

/// Keystore error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum KeystoreError {
    /// No gateway matches the requested identifier.
    #[error("gateway not found")]
    NotFound,

    /// An identifier buffer had the wrong length.
    #[error("invalid gateway id: expected {expected} bytes, got {actual}")]
    InvalidGatewayId { expected: usize, actual: usize },

    /// A gateway with the same local ID is already in the store.
    #[error("gateway already exists: {0}")]
    AlreadyExists(Eui64),

    /// The store file exists but could not be read.
    #[error("gateway store unavailable: {0}")]
    StoreUnavailable(#[source] std::io::Error),

    /// The store file is not a well-formed gateway list.
    #[error("unable to load gateway store: {0}")]
    Decode(String),

    /// A record's private key is not valid hex or not a valid secp256k1 scalar.
    #[error("could not decode private key of gateway #{index} from store: {reason}")]
    KeyDecode { index: usize, reason: String },

    /// A record's key could not be turned into a gateway identity.
    #[error("unable to load gateway #{index} from store: {reason}")]
    Derivation { index: usize, reason: String },

    /// A new record could not be serialized.
    #[error("unable to encode gateway store: {0}")]
    Encode(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Identity derivation failed: {0}")]
    DerivationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeystoreError {
    /// Build an `InvalidGatewayId` error for a buffer of `actual` bytes.
    pub fn invalid_id(expected: usize, actual: usize) -> Self {
        Self::InvalidGatewayId { expected, actual }
    }

    /// Return `true` for the "no such gateway" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, KeystoreError>;
