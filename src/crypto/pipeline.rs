//! Salted deterministic hash pipeline
//!
//! Wraps the cascade with a salted SHA3-512 pre-stage and a salted
//! SHA3-256 post-stage. This is the seed-strengthening step behind private
//! key generation and is exposed for other subsystems that need the same
//! salted/cascaded hashing.
//!
//! The salt literals mention Argon2id for historical reasons; the
//! memory-hard step was disabled permanently so that creating and reloading
//! a wallet always produce identical results. Substituting a real KDF here
//! would silently orphan every existing address.

use sha3::{Digest, Sha3_256, Sha3_512};

use crate::constants::{PRIMARY_SALT, SECONDARY_SALT};
use crate::crypto::cascade_hash;

/// Hash `input` through the full salted pipeline, returning 64 lowercase
/// hex characters.
pub fn deterministic_hash(input: &[u8]) -> String {
    // Stage 1: salted SHA3-512
    let mut salted = Vec::with_capacity(input.len() + PRIMARY_SALT.len());
    salted.extend_from_slice(input);
    salted.extend_from_slice(PRIMARY_SALT);
    let stage1 = Sha3_512::digest(&salted);

    // Stage 2: the 10,000-round cascade
    let stage2 = cascade_hash(&stage1);

    // Stage 3: salted SHA3-256, hex-encoded
    let mut salted2 = Vec::with_capacity(stage2.len() + SECONDARY_SALT.len());
    salted2.extend_from_slice(&stage2);
    salted2.extend_from_slice(SECONDARY_SALT);
    let stage3 = Sha3_256::digest(&salted2);

    hex::encode(stage3)
}
