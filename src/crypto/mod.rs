//! Cryptography module - cascade hashing and the deterministic pipeline

mod cascade;
mod pipeline;

pub use cascade::*;
pub use pipeline::*;
