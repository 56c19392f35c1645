//! Iterated multi-algorithm cascade hash
//!
//! 10,000 rounds alternating five hash operations over a SHA-512 seed
//! digest. The round count is fixed by protocol: it exists to make
//! brute-force seed search expensive, and every deployed wallet must run
//! exactly the same rounds to derive the same keys.

use blake2::Blake2b512;
use sha2::{Digest, Sha512};
use sha3::Sha3_512;

use crate::constants::{CASCADE_IV, CASCADE_ROUNDS};

fn sha512(data: &[u8]) -> Vec<u8> {
    Sha512::digest(data).to_vec()
}

fn sha3_512(data: &[u8]) -> Vec<u8> {
    Sha3_512::digest(data).to_vec()
}

fn blake2b_512(data: &[u8]) -> Vec<u8> {
    Blake2b512::digest(data).to_vec()
}

/// Run the full cascade over `input` and return the first 32 bytes.
///
/// Pure function: same input, same output, on every platform. This is the
/// latency-significant step of the derivation chain; callers in an event
/// loop should move it onto a worker thread.
pub fn cascade_hash(input: &[u8]) -> [u8; 32] {
    let mut seeded = Vec::with_capacity(CASCADE_IV.len() + input.len());
    seeded.extend_from_slice(CASCADE_IV);
    seeded.extend_from_slice(input);

    let mut hash = sha512(&seeded);

    for i in 0..CASCADE_ROUNDS {
        hash = match i % 5 {
            0 => sha3_512(&hash),
            1 => blake2b_512(&hash),
            2 => sha3_512(&sha3_512(&hash)),
            3 => blake2b_512(&blake2b_512(&hash)),
            _ => sha512(&sha512(&sha512(&hash))),
        };
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(&hash[..32]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_deterministic() {
        let a = cascade_hash(b"same input");
        let b = cascade_hash(b"same input");
        assert_eq!(a, b);
    }

    #[test]
    fn test_cascade_different_inputs() {
        assert_ne!(cascade_hash(b"input one"), cascade_hash(b"input two"));
    }

    #[test]
    fn test_cascade_output_length() {
        assert_eq!(cascade_hash(b"").len(), 32);
    }

    /// Golden vector pinning the round count and per-round dispatch.
    /// Any change to the iteration scheme shows up here bit-for-bit.
    #[test]
    fn test_cascade_golden_empty() {
        assert_eq!(
            hex::encode(cascade_hash(b"")),
            "e6805774bd0bfd04ae4607800f203f4be11df325b884747859642cd10f4ea6dd"
        );
    }

    #[test]
    fn test_cascade_golden_abc() {
        assert_eq!(
            hex::encode(cascade_hash(b"abc")),
            "072bcffba95783c722e36209d40ae94796d84523bffbc10a039795b950cf4bcb"
        );
    }
}
