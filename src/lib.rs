//! UVC chain parameters
//!
//! Per-network consensus parameters for the UVC proof-of-work chain: the
//! main, test, regression test and unit test networks, their genesis blocks,
//! checkpoints, seed lists and address prefixes.
//!
//! ```
//! use uvc_core::chainparams::{NetworkProfile, Registry};
//!
//! let registry = Registry::new();
//! registry.select(NetworkProfile::Regtest);
//! assert_eq!(registry.active().default_port(), 10806);
//! ```

pub mod chainparams;
pub mod consensus;
pub mod crypto;
pub mod mining;
pub mod node;
pub mod p2p;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: i64 = 100_000_000;

    /// Number of decimal places
    pub const DECIMAL_PLACES: u8 = 8;

    /// Seconds in a day
    pub const ONE_DAY: i64 = 24 * 60 * 60;

    /// Seconds in a week
    pub const ONE_WEEK: i64 = 7 * ONE_DAY;

    /// Ticker
    pub const CHAIN_NAME: &str = "UVC";
}
