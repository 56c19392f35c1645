//! Private and public key derivation
//!
//! A private key is 64 hex characters produced by the deterministic
//! pipeline over 32 bytes of OS entropy. The public key is a three-layer
//! hash chain (SHA3-512 -> BLAKE2b-512 -> SHA-512) over the private key
//! *string* bytes - the hex text, not the decoded bytes, which is what the
//! network has always hashed.

use blake2::Blake2b512;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use sha3::Sha3_512;
use thiserror::Error;

use crate::constants::{PRIVATE_KEY_LEN, PUBLIC_KEY_IV, PUBLIC_KEY_LEN};
use crate::crypto::deterministic_hash;

/// Key errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid private key format: {0}")]
    InvalidPrivateKeyFormat(String),
    #[error("Invalid public key format: {0}")]
    InvalidPublicKeyFormat(String),
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),
}

/// A 64-hex-character private key
///
/// The sole secret a wallet holder must keep; everything else re-derives
/// from it. Case is preserved as supplied because derivation hashes the
/// string bytes directly.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrivateKey(String);

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

impl PrivateKey {
    /// Generate a new private key from the OS secure random source
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Self::from_seed(&seed)
    }

    /// Derive a private key from a fixed 32-byte seed
    ///
    /// This is the deterministic tail of [`PrivateKey::generate`], exposed
    /// so the full derivation chain can be pinned against known seeds.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let hash = deterministic_hash(seed);
        // The pipeline already yields 64 characters; truncate defensively
        // to hold the format invariant if the pipeline ever widens.
        PrivateKey(hash[..PRIVATE_KEY_LEN].to_string())
    }

    /// Parse and validate a private key from user or file input
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        if s.is_empty() {
            return Err(KeyError::InvalidPrivateKeyFormat("empty".to_string()));
        }
        if s.len() != PRIVATE_KEY_LEN {
            return Err(KeyError::InvalidPrivateKeyFormat(format!(
                "must be exactly {PRIVATE_KEY_LEN} characters, got {}",
                s.len()
            )));
        }
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(KeyError::InvalidPrivateKeyFormat(
                "must be hexadecimal".to_string(),
            ));
        }
        Ok(PrivateKey(s.to_string()))
    }

    /// The key as a hex string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PrivateKey {
    type Error = KeyError;

    fn try_from(s: String) -> Result<Self, KeyError> {
        PrivateKey::parse(&s)
    }
}

impl From<PrivateKey> for String {
    fn from(key: PrivateKey) -> String {
        key.0
    }
}

/// A 128-hex-character public key derived from a private key
///
/// Not secret; used to check that a private key and address belong
/// together when a wallet record is loaded.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(String);

impl PublicKey {
    /// Parse and validate a public key from stored or network input
    pub fn parse(s: &str) -> Result<Self, KeyError> {
        if s.len() != PUBLIC_KEY_LEN {
            return Err(KeyError::InvalidPublicKeyFormat(format!(
                "must be exactly {PUBLIC_KEY_LEN} characters, got {}",
                s.len()
            )));
        }
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(KeyError::InvalidPublicKeyFormat(
                "must be hexadecimal".to_string(),
            ));
        }
        Ok(PublicKey(s.to_string()))
    }

    /// The key as a hex string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", self.0)
    }
}

impl std::fmt::Display for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive the public key for a private key
///
/// Pure and total: the same private key always yields the same 128
/// lowercase hex characters.
pub fn derive_public_key(private_key: &PrivateKey) -> PublicKey {
    let mut input = Vec::with_capacity(PUBLIC_KEY_IV.len() + private_key.as_str().len());
    input.extend_from_slice(PUBLIC_KEY_IV);
    input.extend_from_slice(private_key.as_str().as_bytes());

    let h1 = Sha3_512::digest(&input);
    let h2 = Blake2b512::digest(h1);
    let h3 = Sha512::digest(h2);

    let hex = hex::encode(h3);
    PublicKey(hex[..PUBLIC_KEY_LEN].to_string())
}
