//! Transaction records
//!
//! Wire format uses upper-case field names; nodes parse these JSON objects
//! verbatim, so the serde renames are part of the protocol.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::AddressError;
use crate::keys::KeyError;

/// Transaction errors
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Invalid sender address: {0}")]
    InvalidSender(String),
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

/// Valid transaction type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxType {
    Genesis,
    Transfer,
    Mined,
    Purchased,
    Staked,
    Unstaked,
    Frozen,
    Unfrozen,
    Stimulus,
    Charity,
    Reward,
}

impl TxType {
    /// The wire tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Genesis => "GENESIS",
            TxType::Transfer => "TRANSFER",
            TxType::Mined => "MINED",
            TxType::Purchased => "PURCHASED",
            TxType::Staked => "STAKED",
            TxType::Unstaked => "UNSTAKED",
            TxType::Frozen => "FROZEN",
            TxType::Unfrozen => "UNFROZEN",
            TxType::Stimulus => "STIMULUS",
            TxType::Charity => "CHARITY",
            TxType::Reward => "REWARD",
        }
    }
}

impl std::fmt::Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supplementary proof attached to special-address transactions
///
/// The fixed signature tag alone names the role; this proof shows the
/// sender actually holds the role's private key. Verifying nodes recompute
/// the hash over the challenge and compare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoProof {
    pub challenge: String,
    pub signature: String,
}

/// A network transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "SENDER")]
    pub sender: String,
    #[serde(rename = "RECIPIENT")]
    pub recipient: String,
    #[serde(rename = "AMOUNT")]
    pub amount: f64,
    #[serde(rename = "TYPE")]
    pub tx_type: TxType,
    #[serde(rename = "TIMESTAMP")]
    pub timestamp: String,
    #[serde(rename = "SIGNATURE")]
    pub signature: String,
    #[serde(rename = "CRYPTO_PROOF", default, skip_serializing_if = "Option::is_none")]
    pub crypto_proof: Option<CryptoProof>,
}

impl Transaction {
    /// The amount rendered the way the wire format expects
    ///
    /// Whole amounts print without a decimal point ("5", not "5.0") and
    /// magnitudes outside [1e-6, 1e21) render in exponential notation
    /// ("1e-8", "1e+21"). Signature messages embed this string, so every
    /// node must render amounts identically.
    pub fn amount_string(&self) -> String {
        format_amount(self.amount)
    }
}

pub(crate) fn format_amount(amount: f64) -> String {
    if amount != 0.0 && amount.is_finite() {
        let magnitude = amount.abs();
        if !(1e-6..1e21).contains(&magnitude) {
            let rendered = format!("{amount:e}");
            // Positive exponents carry an explicit sign on the wire
            if let Some(pos) = rendered.find('e') {
                if !rendered[pos + 1..].starts_with('-') {
                    return format!("{}e+{}", &rendered[..pos], &rendered[pos + 1..]);
                }
            }
            return rendered;
        }
    }
    format!("{amount}")
}
