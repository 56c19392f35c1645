//! Property-based and adversarial tests for the TheeCoin wallet core
//!
//! These tests verify the derivation-chain invariants hold under random
//! inputs and forgery scenarios.

use proptest::prelude::*;
use theecoin_wallet::address::{
    derive_address, validate_address, verify_special_address_ownership, SpecialAddress,
    GENESIS_ADDRESS,
};
use theecoin_wallet::keys::{derive_public_key, PrivateKey, PublicKey};
use theecoin_wallet::transaction::{build_transaction_at, TxType};
use theecoin_wallet::wallet::{load_wallet, save_wallet, Wallet, WalletError};

fn key_from_bytes(bytes: &[u8; 32]) -> PrivateKey {
    PrivateKey::parse(&hex::encode(bytes)).expect("32 bytes always hex-encode to a valid key")
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

proptest! {
    /// Determinism: the same private key always derives the same public key
    #[test]
    fn prop_public_key_deterministic(bytes in any::<[u8; 32]>()) {
        let key = key_from_bytes(&bytes);
        prop_assert_eq!(derive_public_key(&key), derive_public_key(&key));
    }

    /// Chain consistency: derived addresses always validate
    #[test]
    fn prop_chain_consistency(bytes in any::<[u8; 32]>()) {
        let key = key_from_bytes(&bytes);
        let address = derive_address(&derive_public_key(&key));
        prop_assert!(validate_address(&address));
    }

    /// Format invariant: public keys are exactly 128 lowercase hex chars
    #[test]
    fn prop_public_key_format(bytes in any::<[u8; 32]>()) {
        let public = derive_public_key(&key_from_bytes(&bytes));
        prop_assert_eq!(public.as_str().len(), 128);
        prop_assert!(public.as_str().chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// Format invariant: addresses match "1" + 33 chars of [A-Z0-9]
    #[test]
    fn prop_address_format(bytes in any::<[u8; 32]>()) {
        let address = derive_address(&derive_public_key(&key_from_bytes(&bytes)));
        prop_assert_eq!(address.len(), 34);
        prop_assert!(address.starts_with('1'));
        prop_assert!(address[1..].chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    /// Avalanche: one flipped input bit rewrites roughly half the public key
    #[test]
    fn prop_single_bit_avalanche(bytes in any::<[u8; 32]>(), bit in 0usize..256) {
        let mut flipped = bytes;
        flipped[bit / 8] ^= 1 << (bit % 8);

        let pub_a = derive_public_key(&key_from_bytes(&bytes));
        let pub_b = derive_public_key(&key_from_bytes(&flipped));

        let a = hex::decode(pub_a.as_str()).unwrap();
        let b = hex::decode(pub_b.as_str()).unwrap();
        let distance: u32 = a.iter().zip(&b).map(|(x, y)| (x ^ y).count_ones()).sum();

        // 512 output bits; the mean is 256 and anything near the tails
        // would take an astronomically unlikely sample.
        prop_assert!(distance >= 160 && distance <= 352, "distance was {}", distance);
    }

    /// Ordinary signatures are always 49 hex characters
    #[test]
    fn prop_signature_length(bytes in any::<[u8; 32]>(), amount in 1e-8f64..1e9) {
        let wallet = Wallet::from_private_key(key_from_bytes(&bytes)).unwrap();
        let recipient = derive_address(&derive_public_key(&key_from_bytes(&[7u8; 32])));
        let tx = build_transaction_at(
            &wallet,
            &recipient,
            amount,
            TxType::Transfer,
            "01/02/2026, 03:04:05 PM".to_string(),
        ).unwrap();
        prop_assert_eq!(tx.signature.len(), 49);
        prop_assert!(tx.signature.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

// ============================================================================
// ADVERSARIAL TESTS
// ============================================================================

/// Test: Special address closure
///
/// All eight reserved addresses validate despite not matching the regular
/// derived-address pattern rules that gate everything else.
#[test]
fn test_special_address_closure() {
    for special in SpecialAddress::ALL {
        assert!(
            validate_address(special.address()),
            "special address {:?} failed validation",
            special
        );
    }
}

/// Test: Address rejection boundaries
///
/// Strings of length 25 or 36 and lowercase tails must never validate.
#[test]
fn test_address_rejection() {
    assert!(!validate_address(&format!("1{}", "A".repeat(24))));
    assert!(!validate_address(&format!("1{}", "A".repeat(35))));
    assert!(!validate_address(&format!("1{}", "a".repeat(33))));
    assert!(!validate_address(""));
}

/// Test: Registry ownership gate
///
/// Only the registered public key owns a special address; any other key,
/// and any unknown address, fails closed.
#[test]
fn test_special_address_ownership_gate() {
    let genesis_key =
        PublicKey::parse(SpecialAddress::Genesis.expected_public_key()).unwrap();
    assert!(verify_special_address_ownership(GENESIS_ADDRESS, &genesis_key));

    let intruder = derive_public_key(&PrivateKey::generate());
    assert!(!verify_special_address_ownership(GENESIS_ADDRESS, &intruder));
    assert!(!verify_special_address_ownership("1NOTREGISTERED", &genesis_key));
}

/// Test: Zero-seed regression vector
///
/// Pins the entire derivation chain: seed -> private key -> public key ->
/// address. If any stage changes, this breaks first.
#[test]
fn test_zero_seed_chain_regression() {
    let key = PrivateKey::from_seed(&[0u8; 32]);
    assert_eq!(
        key.as_str(),
        "dd50f09d74b8e01b7cc351d59a4e728b57b45d1d1f7c5f69b9c619048cf25293"
    );

    let public = derive_public_key(&key);
    assert_eq!(
        public.as_str(),
        "a29dc0e7440abed79a8b1ed8a0c6bbd47ff2f9a07de29119cc42e9136faa886e\
         f90d9071e5f27f69a61dd587674579c472b30fd120469385c5a633412678aff9"
    );

    assert_eq!(derive_address(&public), "1F11869AD46FE1CAE80638CD90553B28B0");
}

/// Test: Wallet file tampering
///
/// An attacker editing a .dat file to claim another identity must be
/// stopped at load time, not after funds move.
#[test]
fn test_tampered_wallet_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let victim = Wallet::create().unwrap();
    let attacker = Wallet::create().unwrap();

    let path = save_wallet(&victim, dir.path(), Some("victim")).unwrap();
    let tampered = std::fs::read_to_string(&path)
        .unwrap()
        .replace(victim.public_key(), attacker.public_key());
    std::fs::write(&path, tampered).unwrap();

    assert!(matches!(
        load_wallet(&path),
        Err(WalletError::IntegrityViolation(_))
    ));
}

/// Test: Reload equivalence
///
/// Saving and reloading a wallet reproduces the identical identity, which
/// is the invariant the whole deterministic pipeline exists to protect.
#[test]
fn test_save_load_identity_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = Wallet::create().unwrap();

    let path = save_wallet(&wallet, dir.path(), None).unwrap();
    let loaded = load_wallet(&path).unwrap();

    assert_eq!(loaded.address(), wallet.address());
    assert_eq!(loaded.public_key(), wallet.public_key());
    assert_eq!(
        loaded.private_key().as_str(),
        wallet.private_key().as_str()
    );
}
