//! Key module - private key generation and public key derivation

mod derive;
mod mnemonic;

pub use derive::*;
pub use mnemonic::*;
