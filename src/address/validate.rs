//! Structural address validation
//!
//! Boolean-only check: callers that merely test validity get `false`, and
//! callers about to spend from an address escalate `false` to a hard error
//! at the transaction layer.

use crate::address::SpecialAddress;

/// Validate an address string
///
/// Rules in order: length within [26, 35]; any reserved address passes
/// unconditionally (their formats predate the "1" scheme); otherwise the
/// address must be "1" followed by exactly 33 characters from [A-Z0-9].
pub fn validate_address(address: &str) -> bool {
    if address.is_empty() || address.len() < 26 || address.len() > 35 {
        return false;
    }

    if SpecialAddress::from_address(address).is_some() {
        return true;
    }

    let mut chars = address.chars();
    if chars.next() != Some('1') {
        return false;
    }

    let tail: Vec<char> = chars.collect();
    tail.len() == 33
        && tail
            .iter()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{derive_address, SpecialAddress};
    use crate::keys::{derive_public_key, PrivateKey};

    #[test]
    fn test_accepts_derived_addresses() {
        let public = derive_public_key(&PrivateKey::generate());
        assert!(validate_address(&derive_address(&public)));
    }

    #[test]
    fn test_accepts_all_special_addresses() {
        for special in SpecialAddress::ALL {
            assert!(validate_address(special.address()));
        }
    }

    #[test]
    fn test_rejects_empty_and_bad_lengths() {
        assert!(!validate_address(""));
        assert!(!validate_address(&format!("1{}", "A".repeat(24)))); // 25 chars
        assert!(!validate_address(&format!("1{}", "A".repeat(35)))); // 36 chars
    }

    #[test]
    fn test_rejects_lowercase_tail() {
        assert!(!validate_address(&format!("1{}", "a".repeat(33))));
    }

    #[test]
    fn test_rejects_wrong_prefix() {
        assert!(!validate_address(&format!("2{}", "A".repeat(33))));
    }

    #[test]
    fn test_rejects_non_alphanumeric_tail() {
        assert!(!validate_address(&format!("1{}!", "A".repeat(32))));
    }
}
