//! Address derivation
//!
//! Two-layer hash chain over the public key string bytes: SHA3-256 then
//! BLAKE2b-256, hex-encoded, first 33 characters uppercased behind a "1"
//! prefix.

use blake2::digest::consts::U32;
use blake2::Blake2b;
use sha3::{Digest, Sha3_256};

use crate::constants::ADDRESS_IV;
use crate::keys::PublicKey;

type Blake2b256 = Blake2b<U32>;

/// Derive the network address for a public key
///
/// Pure and total; the chain seed -> private key -> public key -> address
/// is one-directional and this is its last link.
pub fn derive_address(public_key: &PublicKey) -> String {
    let mut input = Vec::with_capacity(ADDRESS_IV.len() + public_key.as_str().len());
    input.extend_from_slice(ADDRESS_IV);
    input.extend_from_slice(public_key.as_str().as_bytes());

    let h1 = Sha3_256::digest(&input);
    let h2 = Blake2b256::digest(h1);

    let hex = hex::encode(h2);
    format!("1{}", hex[..33].to_uppercase())
}
