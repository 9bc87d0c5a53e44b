//! AccountId - opaque principal identity
//!
//! Owners, transfer destinations, and executors are all identified by a
//! 32-byte account id. The gate never interprets the bytes; they are
//! typically an Ed25519 public key, rendered as hex at the edges.

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// Opaque 32-byte principal identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// The null identifier; never a valid owner
    pub const ZERO: AccountId = AccountId([0u8; 32]);

    /// Wrap raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive an account id from an Ed25519 public key
    pub fn from_public_key(key: &VerifyingKey) -> Self {
        Self(key.to_bytes())
    }

    /// Generate a fresh account id with its signing key
    ///
    /// # Returns
    /// Tuple of (AccountId, SigningKey) - keep the signing key secure!
    pub fn generate() -> (Self, SigningKey) {
        let signing_key = SigningKey::generate(&mut OsRng);
        let id = Self::from_public_key(&signing_key.verifying_key());
        (id, signing_key)
    }

    /// Raw bytes of the identifier
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether this is the null identifier
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for AccountId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim()).map_err(|_| ConfigError::InvalidOwnerId {
            value: s.to_string(),
        })?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| ConfigError::InvalidOwnerId {
            value: s.to_string(),
        })?;
        Ok(Self(bytes))
    }
}
