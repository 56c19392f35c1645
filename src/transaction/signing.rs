//! Transaction building and signing
//!
//! Ordinary addresses sign with a truncated SHA-256 over the transaction
//! fields plus the private key. Reserved addresses instead carry their
//! fixed signature tag and a challenge/response proof, and may only be
//! used after the registry ownership check passes. Verification is the
//! node's job: it recomputes the same hashes and compares.

use chrono::Local;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::address::{classify_address, require_special_address_ownership, AddressKind};
use crate::constants::SIGNATURE_LEN;
use crate::keys::{derive_public_key, PrivateKey};
use crate::transaction::{format_amount, CryptoProof, Transaction, TransactionError, TxType};
use crate::wallet::Wallet;

type HmacSha256 = Hmac<Sha256>;

/// Current local time in the wire timestamp format
pub fn current_timestamp() -> String {
    Local::now().format("%m/%d/%Y, %I:%M:%S %p").to_string()
}

/// Build and sign a transaction from `wallet` at the current time
pub fn build_transaction(
    wallet: &Wallet,
    recipient: &str,
    amount: f64,
    tx_type: TxType,
) -> Result<Transaction, TransactionError> {
    build_transaction_at(wallet, recipient, amount, tx_type, current_timestamp())
}

/// Build and sign a transaction with an explicit timestamp
///
/// The timestamp is hashed into the signature, so it is a parameter here
/// rather than a hidden clock read; [`build_transaction`] supplies the
/// current time for normal use.
pub fn build_transaction_at(
    wallet: &Wallet,
    recipient: &str,
    amount: f64,
    tx_type: TxType,
    timestamp: String,
) -> Result<Transaction, TransactionError> {
    // Rejects NaN too: the comparison is false for it
    if !(amount > 0.0) {
        return Err(TransactionError::InvalidAmount(amount));
    }

    let sender = classify_address(wallet.address())
        .map_err(|_| TransactionError::InvalidSender(wallet.address().to_string()))?;

    classify_address(recipient)
        .map_err(|_| TransactionError::InvalidRecipient(recipient.to_string()))?;

    let mut tx = Transaction {
        sender: wallet.address().to_string(),
        recipient: recipient.to_string(),
        amount,
        tx_type,
        timestamp,
        signature: String::new(),
        crypto_proof: None,
    };

    match sender {
        AddressKind::Special(special) => {
            // A reserved sender must hold the registered key; anything
            // else is a forgery attempt and aborts the build.
            let public_key = derive_public_key(wallet.private_key());
            require_special_address_ownership(special, &public_key)?;

            tx.signature = special.signature_tag().to_string();
            tx.crypto_proof = Some(special_proof(&tx, wallet.private_key()));
        }
        AddressKind::Regular(_) => {
            tx.signature = ordinary_signature(&tx, wallet.private_key());
        }
    }

    Ok(tx)
}

/// Detached HMAC-SHA256 signature over the transaction fields
///
/// Keyed with the private key string over the SHA-256 of
/// `SENDER:RECIPIENT:AMOUNT:TYPE:TIMESTAMP`.
pub fn sign_transaction(
    wallet: &Wallet,
    tx: &Transaction,
) -> Result<String, TransactionError> {
    let tx_data = format!(
        "{}:{}:{}:{}:{}",
        tx.sender,
        tx.recipient,
        tx.amount_string(),
        tx.tx_type,
        tx.timestamp
    );
    let hash = Sha256::digest(tx_data.as_bytes());

    let mut mac = HmacSha256::new_from_slice(wallet.private_key().as_str().as_bytes())
        .map_err(|e| TransactionError::SigningFailed(e.to_string()))?;
    mac.update(&hash);

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Truncated SHA-256 signature for ordinary senders
fn ordinary_signature(tx: &Transaction, private_key: &PrivateKey) -> String {
    let message = format!(
        "{}{}{}{}{}",
        tx.sender,
        tx.recipient,
        tx.amount_string(),
        tx.timestamp,
        tx.tx_type
    );
    let combined = format!("{message}{}", private_key.as_str());
    let hash = hex::encode(Sha256::digest(combined.as_bytes()));
    hash[..SIGNATURE_LEN].to_string()
}

/// Challenge/response proof for reserved senders
fn special_proof(tx: &Transaction, private_key: &PrivateKey) -> CryptoProof {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let nonce: f64 = rand::thread_rng().gen();

    let challenge = format!(
        "{}_{}_{}_{}_{millis}_{nonce}",
        tx.sender,
        tx.recipient,
        format_amount(tx.amount),
        tx.timestamp
    );

    CryptoProof {
        signature: special_proof_signature(&challenge, private_key),
        challenge,
    }
}

pub(crate) fn special_proof_signature(challenge: &str, private_key: &PrivateKey) -> String {
    let combined = format!("special_tx_{challenge}{}", private_key.as_str());
    hex::encode(Sha256::digest(combined.as_bytes()))
}
