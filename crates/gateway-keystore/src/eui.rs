//! Fixed-width gateway identifiers.
//!
//! `Eui64` is the LoRaWAN 64-bit extended unique identifier used both for a
//! gateway's local ID and for its derived network ID. `ThingsIxId` is the
//! 32-byte network-wide identity derived from the compressed public key.
//! Both render as lowercase hex and serialize as that text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{KeystoreError, Result};

macro_rules! hex_id {
    ($name:ident, $len:expr, $label:literal) => {
        impl $name {
            /// Width of the identifier in bytes.
            pub const LEN: usize = $len;

            /// Return the raw identifier bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Return the identifier as lowercase hex.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = KeystoreError;

            fn try_from(bytes: &[u8]) -> Result<Self> {
                let arr: [u8; $len] = bytes
                    .try_into()
                    .map_err(|_| KeystoreError::invalid_id($len, bytes.len()))?;
                Ok(Self(arr))
            }
        }

        impl FromStr for $name {
            type Err = KeystoreError;

            /// Parse hex text, with or without a `0x` prefix.
            fn from_str(s: &str) -> Result<Self> {
                let digits = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .unwrap_or(s);
                let bytes = hex::decode(digits).map_err(|e| {
                    KeystoreError::Decode(format!("invalid {} {s:?}: {e}", $label))
                })?;
                Self::try_from(bytes.as_slice())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), hex::encode(self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A LoRaWAN EUI-64 identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Eui64(pub [u8; 8]);

/// The 32-byte ThingsIX gateway identity.
///
/// This is the compressed secp256k1 public key with its parity prefix
/// stripped, i.e. the x-coordinate of the public point.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ThingsIxId(pub [u8; 32]);

hex_id!(Eui64, 8, "EUI64");
hex_id!(ThingsIxId, 32, "ThingsIX ID");
