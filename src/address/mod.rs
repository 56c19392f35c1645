//! Address module - derivation, validation, and the reserved-address registry

mod derive;
mod special;
mod validate;

pub use derive::*;
pub use special::*;
pub use validate::*;

use thiserror::Error;

/// Address errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid address format: {0}")]
    InvalidFormat(String),
    #[error("Public key does not match the registered key for special address {0}")]
    OwnershipViolation(String),
}
