//! Mining module - proof-of-work search used to derive genesis blocks

mod miner;

pub use miner::*;
