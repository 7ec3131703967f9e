//! Node bootstrap data - genesis block derivation

mod genesis;

pub use genesis::*;
