//! Reserved-address registry
//!
//! Eight fixed addresses carry privileged roles on the network (coin
//! creation, mining payouts, staking pool, and so on). Each is bound to one
//! expected public key; a wallet claiming a reserved address must hold the
//! private key that derives exactly that public key, otherwise it is a
//! forgery and must be rejected outright.
//!
//! The address and key literals must match the node software byte-for-byte.

use crate::address::{validate_address, AddressError};
use crate::keys::PublicKey;

pub const GENESIS_ADDRESS: &str = "1646231636238323739633734326139393";
pub const MINING_ADDRESS: &str = "1636332663263353930336133373035663";
pub const STAKING_ADDRESS: &str = "1643035653535373031366130373366346";
pub const SELLING_ADDRESS: &str = "1656436623737326263306237393736613";
pub const STIMULUS_ADDRESS: &str = "1613965396635653738633930613931313";
pub const CHARITY_ADDRESS: &str = "1393331663831623439346366303435303";
pub const REWARDS_ADDRESS: &str = "1626264356636336238646330396166333";
pub const PRIVATE_ADDRESS: &str = "1613637346134616563646232356538656";

/// One of the eight reserved network roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialAddress {
    Genesis,
    Mining,
    Staking,
    Selling,
    Stimulus,
    Charity,
    Rewards,
    Private,
}

impl SpecialAddress {
    /// All reserved roles, in registry order
    pub const ALL: [SpecialAddress; 8] = [
        SpecialAddress::Genesis,
        SpecialAddress::Mining,
        SpecialAddress::Staking,
        SpecialAddress::Selling,
        SpecialAddress::Stimulus,
        SpecialAddress::Charity,
        SpecialAddress::Rewards,
        SpecialAddress::Private,
    ];

    /// The fixed address string for this role
    pub fn address(&self) -> &'static str {
        match self {
            SpecialAddress::Genesis => GENESIS_ADDRESS,
            SpecialAddress::Mining => MINING_ADDRESS,
            SpecialAddress::Staking => STAKING_ADDRESS,
            SpecialAddress::Selling => SELLING_ADDRESS,
            SpecialAddress::Stimulus => STIMULUS_ADDRESS,
            SpecialAddress::Charity => CHARITY_ADDRESS,
            SpecialAddress::Rewards => REWARDS_ADDRESS,
            SpecialAddress::Private => PRIVATE_ADDRESS,
        }
    }

    /// The public key the registry expects for this role
    pub fn expected_public_key(&self) -> &'static str {
        match self {
            SpecialAddress::Genesis => {
                "eb758b17ef7ee84b499eaf8e187f6a8d29e74badb26b9f1ba280325eae938a37\
                 aa9c9cf44b1c5cbfa5e32d664f38ee975689c3d00b213e82e7af4d428438bbef"
            }
            SpecialAddress::Mining => {
                "0214559c606e0fb96af3335bdbca1e9906f9be9d7d63c50607795327d8da55a8\
                 2c3f058c90db2efd5138782215178db34dfe96570d0e2d2a8284f373ab1bbaf7"
            }
            SpecialAddress::Staking => {
                "59c9f8ec14c6ba3ab010b4ef6fefa7a2adef97f6649b3080e27cc7f9ae038606\
                 c2cae3816bd3b5039d2c5ca1868763f0277db11c40d0ea2081d930b28cbc323e"
            }
            SpecialAddress::Selling => {
                "b7f7ecdbb6889713dcbeced9ff4c7bac69148fd5c0f93f998d196e9963175b23\
                 74a08213fb806bf6b049a8e2346ad4b403200fae122ad7290cddb1c072028148"
            }
            SpecialAddress::Stimulus => {
                "de447ccb1332a7e4684df26412a4ed444a6d8bd89879435ca47f0483bc0ba8c1\
                 a741f7f28e07173f44e03d91ee63a89e22ec8532f0eac2396980c7824ea1ed4d"
            }
            SpecialAddress::Charity => {
                "fa26c9d9f9199596ef5fe0372d86068c419d263f8b2ff622a7b650ab8d2ce224\
                 7d97980a7fe812aff29ccf0be2ece3823f1d7ad09dc310b6cf607fb434b7cc3a"
            }
            SpecialAddress::Rewards => {
                "b08ba33316ea7223370d9a94c92cefa4889cae213399e45869fe24dc2b146b7b\
                 1ee094dc7ccdb782afd381edc81e2ad56602958e32d5ce563db9a9f559fd536e"
            }
            SpecialAddress::Private => {
                "9da680787a774389ab4e47bf6ec0777e1ac0c5ee51d3cdc1eee97c519fc375c7\
                 07c352ac43573c9aa6d9cae28474d9d6d220bd583cc243df2804d7016ef41fa7"
            }
        }
    }

    /// The fixed signature tag transactions from this role carry
    pub fn signature_tag(&self) -> &'static str {
        match self {
            SpecialAddress::Genesis => "GENESIS_ADDRESS",
            SpecialAddress::Mining => "MINING_ADDRESS",
            SpecialAddress::Staking => "STAKING_ADDRESS",
            SpecialAddress::Selling => "SELLING_ADDRESS",
            SpecialAddress::Stimulus => "STIMULUS_ADDRESS",
            SpecialAddress::Charity => "CHARITY_ADDRESS",
            SpecialAddress::Rewards => "REWARDS_ADDRESS",
            SpecialAddress::Private => "PRIVATE_ADDRESS",
        }
    }

    /// Look up the role for an address string, if it is reserved
    pub fn from_address(address: &str) -> Option<SpecialAddress> {
        SpecialAddress::ALL
            .into_iter()
            .find(|special| special.address() == address)
    }
}

/// Classified address identity
///
/// Produced once per address string; everything downstream pattern-matches
/// on this instead of comparing literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressKind {
    Special(SpecialAddress),
    Regular(String),
}

impl AddressKind {
    /// The underlying address string
    pub fn as_str(&self) -> &str {
        match self {
            AddressKind::Special(special) => special.address(),
            AddressKind::Regular(address) => address,
        }
    }
}

/// Classify an address string into its kind
///
/// Reserved addresses classify unconditionally; anything else must pass
/// the structural check or the address is rejected as malformed.
pub fn classify_address(address: &str) -> Result<AddressKind, AddressError> {
    if let Some(special) = SpecialAddress::from_address(address) {
        return Ok(AddressKind::Special(special));
    }
    if validate_address(address) {
        return Ok(AddressKind::Regular(address.to_string()));
    }
    Err(AddressError::InvalidFormat(address.to_string()))
}

/// Check a claimed special address against the registry
///
/// Fails closed: an address not in the registry is never owned. Callers
/// constructing transactions escalate `false` to a hard ownership error.
pub fn verify_special_address_ownership(address: &str, candidate: &PublicKey) -> bool {
    match SpecialAddress::from_address(address) {
        Some(special) => special.expected_public_key() == candidate.as_str(),
        None => false,
    }
}

/// Register-backed ownership check that surfaces the failure reason
pub fn require_special_address_ownership(
    special: SpecialAddress,
    candidate: &PublicKey,
) -> Result<(), AddressError> {
    if special.expected_public_key() == candidate.as_str() {
        Ok(())
    } else {
        Err(AddressError::OwnershipViolation(
            special.address().to_string(),
        ))
    }
}
