//! Parameter registry and network selection
//!
//! All four parameter sets are built eagerly. Selection is write-once:
//! choosing the same network twice is harmless, choosing a different one
//! afterwards is a programming error. Tooling that genuinely needs to switch
//! networks goes through [`Registry::reselect`].

use super::mainnet::main_params;
use super::network::{NetworkProfile, UnknownNetwork};
use super::params::ChainParameters;
use super::regtest::regtest_overlay;
use super::testnet::testnet_overlay;
use super::unittest::{unittest_overlay, UnitTestParams};
use log::{error, info, warn};
use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    #[error("no network has been selected")]
    NoActiveNetwork,
    #[error("cannot select {requested} network, {active} is already active")]
    AlreadySelected { active: NetworkProfile, requested: NetworkProfile },
    #[error("parameters can only be modified on the unittest network, active network is {0}")]
    NotUnitTest(NetworkProfile),
    #[error(transparent)]
    UnknownNetwork(#[from] UnknownNetwork),
}

/// Build one network's parameter set from scratch
pub fn build(profile: NetworkProfile) -> ChainParameters {
    match profile {
        NetworkProfile::Main => main_params(),
        NetworkProfile::Testnet => testnet_overlay(main_params()),
        NetworkProfile::Regtest => regtest_overlay(testnet_overlay(main_params())),
        NetworkProfile::UnitTest => unittest_overlay(main_params()),
    }
}

/// Holder of every network's parameters and the active selection
#[derive(Debug)]
pub struct Registry {
    main: Arc<ChainParameters>,
    testnet: Arc<ChainParameters>,
    regtest: Arc<ChainParameters>,
    unit_test: RwLock<Arc<ChainParameters>>,
    active: RwLock<Option<NetworkProfile>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Build all four networks. Nothing is selected yet.
    pub fn new() -> Self {
        let main = main_params();
        let testnet = testnet_overlay(main.clone());
        let regtest = regtest_overlay(testnet.clone());
        let unit_test = unittest_overlay(main.clone());

        Self {
            main: Arc::new(main),
            testnet: Arc::new(testnet),
            regtest: Arc::new(regtest),
            unit_test: RwLock::new(Arc::new(unit_test)),
            active: RwLock::new(None),
        }
    }

    /// Make `profile` the active network.
    ///
    /// # Panics
    ///
    /// Panics if a different network is already active.
    pub fn select(&self, profile: NetworkProfile) {
        if let Err(e) = self.try_select(profile) {
            error!("{}", e);
            panic!("{}", e);
        }
    }

    /// Like [`Registry::select`], reporting a conflict instead of panicking
    pub fn try_select(&self, profile: NetworkProfile) -> Result<(), ParamsError> {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        match *active {
            None => {
                *active = Some(profile);
                info!("selected {} network parameters", profile);
                Ok(())
            }
            Some(current) if current == profile => Ok(()),
            Some(current) => Err(ParamsError::AlreadySelected {
                active: current,
                requested: profile,
            }),
        }
    }

    /// Switch the active network unconditionally
    pub fn reselect(&self, profile: NetworkProfile) {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = *active {
            if previous != profile {
                warn!("switching active network from {} to {}", previous, profile);
            }
        }
        *active = Some(profile);
    }

    /// Parse a network identifier and select it.
    ///
    /// An unknown name or a conflict with the active network is returned as
    /// an error and leaves the current selection untouched.
    pub fn select_from_identifier(&self, raw: &str) -> Result<NetworkProfile, ParamsError> {
        let profile: NetworkProfile = raw.parse()?;
        self.try_select(profile)?;
        Ok(profile)
    }

    pub fn active_profile(&self) -> Option<NetworkProfile> {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parameters of the active network, `None` before selection
    pub fn try_active(&self) -> Option<Arc<ChainParameters>> {
        self.active_profile().map(|profile| self.by_id(profile))
    }

    /// Parameters of the active network.
    ///
    /// # Panics
    ///
    /// Panics if no network has been selected.
    pub fn active(&self) -> Arc<ChainParameters> {
        match self.try_active() {
            Some(params) => params,
            None => {
                error!("network parameters read before a network was selected");
                panic!("network parameters read before a network was selected");
            }
        }
    }

    /// Parameters of `profile`, whichever network is active
    pub fn by_id(&self, profile: NetworkProfile) -> Arc<ChainParameters> {
        match profile {
            NetworkProfile::Main => Arc::clone(&self.main),
            NetworkProfile::Testnet => Arc::clone(&self.testnet),
            NetworkProfile::Regtest => Arc::clone(&self.regtest),
            NetworkProfile::UnitTest => {
                Arc::clone(&*self.unit_test.read().unwrap_or_else(PoisonError::into_inner))
            }
        }
    }

    /// Apply `f` to the unit test parameters and publish the result.
    ///
    /// Readers holding an earlier `Arc` keep the snapshot they had.
    pub fn modify_unit_test<F>(&self, f: F) -> Result<Arc<ChainParameters>, ParamsError>
    where
        F: FnOnce(&mut UnitTestParams),
    {
        match self.active_profile() {
            None => return Err(ParamsError::NoActiveNetwork),
            Some(NetworkProfile::UnitTest) => {}
            Some(other) => return Err(ParamsError::NotUnitTest(other)),
        }

        let mut slot = self.unit_test.write().unwrap_or_else(PoisonError::into_inner);
        let mut draft = UnitTestParams::new(ChainParameters::clone(&**slot));
        f(&mut draft);

        let updated = Arc::new(draft.into_inner());
        *slot = Arc::clone(&updated);
        Ok(updated)
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Process-wide registry, built on first use
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Active network parameters from the process-wide registry
pub fn params() -> Arc<ChainParameters> {
    registry().active()
}

pub fn params_for(profile: NetworkProfile) -> Arc<ChainParameters> {
    registry().by_id(profile)
}

pub fn select_params(profile: NetworkProfile) {
    registry().select(profile)
}

pub fn select_params_from_identifier(raw: &str) -> Result<NetworkProfile, ParamsError> {
    registry().select_from_identifier(raw)
}

pub fn modify_unit_test_params<F>(f: F) -> Result<Arc<ChainParameters>, ParamsError>
where
    F: FnOnce(&mut UnitTestParams),
{
    registry().modify_unit_test(f)
}
