//! Wallet records
//!
//! A wallet record is the private key plus everything re-derivable from it
//! (public key, address) and an optional recovery phrase. Records loaded
//! from disk are never trusted: the stored public key and address must
//! match what re-deriving from the stored private key produces, otherwise
//! the record has been tampered with and the load is refused.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::{
    classify_address, derive_address, require_special_address_ownership, validate_address,
    AddressError, AddressKind,
};
use crate::keys::{
    derive_public_key, generate_mnemonic, mnemonic_to_private_key, KeyError, PrivateKey,
};

/// Wallet errors
#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error("Wallet integrity violation: {0}")]
    IntegrityViolation(&'static str),
    #[error("Generated address failed validation: {0}")]
    InvalidDerivedAddress(String),
    #[error("Wallet file not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A wallet record as persisted to `.dat` files
///
/// Field names follow the original camelCase wire format; the snake_case
/// aliases accept records written by older releases.
#[derive(Clone, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mnemonic: Option<String>,
    #[serde(rename = "privateKey", alias = "private_key")]
    private_key: PrivateKey,
    #[serde(rename = "publicKey", alias = "public_key")]
    public_key: String,
    address: String,
    #[serde(default)]
    created: String,
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "[REDACTED]"))
            .field("private_key", &self.private_key)
            .field("public_key", &self.public_key)
            .field("address", &self.address)
            .field("created", &self.created)
            .finish()
    }
}

impl Wallet {
    /// Create a new wallet with a fresh recovery phrase
    pub fn create() -> Result<Wallet, WalletError> {
        let mnemonic = generate_mnemonic()?;
        let private_key = mnemonic_to_private_key(&mnemonic)?;
        Self::assemble(Some(mnemonic), private_key)
    }

    /// Import a wallet from an existing private key
    pub fn from_private_key(private_key: PrivateKey) -> Result<Wallet, WalletError> {
        Self::assemble(None, private_key)
    }

    /// Restore a wallet from a 24-word recovery phrase
    pub fn from_mnemonic(phrase: &str) -> Result<Wallet, WalletError> {
        let private_key = mnemonic_to_private_key(phrase)?;
        Self::assemble(Some(phrase.to_string()), private_key)
    }

    fn assemble(mnemonic: Option<String>, private_key: PrivateKey) -> Result<Wallet, WalletError> {
        let public_key = derive_public_key(&private_key);
        let address = derive_address(&public_key);

        if !validate_address(&address) {
            return Err(WalletError::InvalidDerivedAddress(address));
        }

        Ok(Wallet {
            mnemonic,
            private_key,
            public_key: public_key.as_str().to_string(),
            address,
            created: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// The wallet's network address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The wallet's public key (hex)
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The wallet's private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The recovery phrase, if this wallet was created with one
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_deref()
    }

    /// Creation timestamp (ISO 8601), empty for legacy records
    pub fn created(&self) -> &str {
        &self.created
    }

    /// Uppercase the stored address in place
    ///
    /// Load-time repair for records written before uppercase enforcement.
    pub(crate) fn normalize_address(&mut self) {
        self.address = self.address.to_uppercase();
    }

    /// Verify that this record's fields are mutually consistent
    ///
    /// Re-derives the public key and address from the stored private key
    /// and compares exactly. A claimed special address must additionally
    /// match the registry's expected public key. Every failure here is
    /// fatal to the caller: a mismatched record must not be used.
    pub fn verify_integrity(&self) -> Result<(), WalletError> {
        let derived_public = derive_public_key(&self.private_key);

        if self.public_key != derived_public.as_str() {
            return Err(WalletError::IntegrityViolation(
                "stored public key does not match the private key",
            ));
        }

        match classify_address(&self.address)? {
            AddressKind::Special(special) => {
                require_special_address_ownership(special, &derived_public)?;
            }
            AddressKind::Regular(_) => {
                let derived_address = derive_address(&derived_public);
                if self.address != derived_address {
                    return Err(WalletError::IntegrityViolation(
                        "stored address does not match the derived address",
                    ));
                }
            }
        }

        Ok(())
    }
}
