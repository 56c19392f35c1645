//! Recovery phrase support
//!
//! 24-word BIP39 mnemonics as a human-transcribable equivalent of the
//! private key. The phrase maps to a private key through the same
//! deterministic pipeline used for seed strengthening, so restoring from a
//! phrase reproduces the identical key, public key, and address.

use bip39::Mnemonic;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::PRIVATE_KEY_LEN;
use crate::crypto::deterministic_hash;
use crate::keys::{KeyError, PrivateKey};

/// Number of words in a recovery phrase (256 bits of entropy)
pub const MNEMONIC_WORDS: usize = 24;

/// Generate a new 24-word recovery phrase from OS entropy
pub fn generate_mnemonic() -> Result<String, KeyError> {
    let mut entropy = [0u8; 32];
    OsRng.fill_bytes(&mut entropy);

    let mnemonic = Mnemonic::from_entropy(&entropy)
        .map_err(|e| KeyError::InvalidMnemonic(e.to_string()))?;

    Ok(mnemonic.to_string())
}

/// Check whether a phrase is a well-formed 24-word mnemonic
pub fn validate_mnemonic(phrase: &str) -> bool {
    match Mnemonic::parse_normalized(phrase) {
        Ok(m) => m.word_count() == MNEMONIC_WORDS,
        Err(_) => false,
    }
}

/// Derive the private key encoded by a recovery phrase
///
/// Validates the phrase (word count, wordlist membership, checksum) and
/// feeds its UTF-8 bytes through the deterministic pipeline.
pub fn mnemonic_to_private_key(phrase: &str) -> Result<PrivateKey, KeyError> {
    let mnemonic = Mnemonic::parse_normalized(phrase)
        .map_err(|e| KeyError::InvalidMnemonic(e.to_string()))?;

    if mnemonic.word_count() != MNEMONIC_WORDS {
        return Err(KeyError::InvalidMnemonic(format!(
            "must be exactly {MNEMONIC_WORDS} words, got {}",
            mnemonic.word_count()
        )));
    }

    let hash = deterministic_hash(mnemonic.to_string().as_bytes());
    PrivateKey::parse(&hash[..PRIVATE_KEY_LEN])
}
