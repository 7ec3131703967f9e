//! Cryptography module - Quark header hashing, SHA-256d and Merkle roots

mod bmw;
mod hash;
mod merkle;
mod quark;

pub use hash::*;
pub use merkle::*;
pub use quark::quark_hash;
