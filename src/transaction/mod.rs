//! Transaction module - building and signing network transactions

mod signing;
mod transaction;

pub use signing::*;
pub use transaction::*;
