//! P2P bootstrap data - fixed seed conversion

mod seeds;

pub use seeds::*;
