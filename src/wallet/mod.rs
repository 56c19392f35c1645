//! Wallet module - wallet records, integrity checks, and file persistence

mod store;
mod wallet;

pub use store::*;
pub use wallet::*;
