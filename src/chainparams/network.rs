//! Network profiles and their identifiers

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable consulted by [`NetworkProfile::from_env`]
pub const NETWORK_ENV_VAR: &str = "UVC_NETWORK";

/// Identifier that names no known network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown network identifier '{0}'")]
pub struct UnknownNetwork(pub String);

/// Network selection errors from command line style flags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkFlagError {
    #[error("invalid combination of -regtest and -testnet")]
    Conflicting,
}

/// The four mutually exclusive networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkProfile {
    Main,
    Testnet,
    Regtest,
    UnitTest,
}

impl NetworkProfile {
    pub const ALL: [NetworkProfile; 4] = [
        NetworkProfile::Main,
        NetworkProfile::Testnet,
        NetworkProfile::Regtest,
        NetworkProfile::UnitTest,
    ];

    /// Canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkProfile::Main => "main",
            NetworkProfile::Testnet => "test",
            NetworkProfile::Regtest => "regtest",
            NetworkProfile::UnitTest => "unittest",
        }
    }

    /// Network chosen by `-testnet` / `-regtest` style flags.
    ///
    /// Neither flag means main; both is an error.
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Self, NetworkFlagError> {
        match (testnet, regtest) {
            (true, true) => Err(NetworkFlagError::Conflicting),
            (true, false) => Ok(NetworkProfile::Testnet),
            (false, true) => Ok(NetworkProfile::Regtest),
            (false, false) => Ok(NetworkProfile::Main),
        }
    }

    /// Network named by `UVC_NETWORK`, `None` when unset or empty
    pub fn from_env() -> Result<Option<Self>, UnknownNetwork> {
        match std::env::var(NETWORK_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => raw.parse().map(Some),
            _ => Ok(None),
        }
    }
}

impl FromStr for NetworkProfile {
    type Err = UnknownNetwork;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkProfile::Main),
            "test" | "testnet" => Ok(NetworkProfile::Testnet),
            "regtest" => Ok(NetworkProfile::Regtest),
            "unittest" => Ok(NetworkProfile::UnitTest),
            _ => Err(UnknownNetwork(raw.to_string())),
        }
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
