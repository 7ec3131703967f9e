//! Unit test overlay and the mutation capability
//!
//! The unit test network starts from main and is the only network whose
//! parameters can change after construction. The setters live on
//! [`ModifiableParams`], which only [`UnitTestParams`] implements, so
//! production parameter sets cannot be mutated even by accident.

use super::network::NetworkProfile;
use super::params::ChainParameters;
use std::ops::Deref;

/// Setters available to unit tests.
///
/// Plain parameter sets do not implement this trait:
///
/// ```compile_fail
/// use uvc_core::chainparams::{ModifiableParams, NetworkProfile, Registry};
///
/// let registry = Registry::new();
/// let mut params = (*registry.by_id(NetworkProfile::Main)).clone();
/// params.set_subsidy_halving_interval(1);
/// ```
pub trait ModifiableParams {
    fn set_subsidy_halving_interval(&mut self, interval: u32);
    fn set_enforce_block_upgrade_majority(&mut self, majority: u32);
    fn set_reject_block_outdated_majority(&mut self, majority: u32);
    fn set_to_check_block_upgrade_majority(&mut self, window: u32);
    fn set_default_consistency_checks(&mut self, enabled: bool);
    fn set_allow_min_difficulty_blocks(&mut self, allowed: bool);
    fn set_skip_proof_of_work_check(&mut self, skip: bool);
}

/// Mutable draft of the unit test parameter set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTestParams(ChainParameters);

impl UnitTestParams {
    pub(crate) fn new(params: ChainParameters) -> Self {
        debug_assert_eq!(params.profile, NetworkProfile::UnitTest);
        Self(params)
    }

    pub(crate) fn into_inner(self) -> ChainParameters {
        self.0
    }
}

impl Deref for UnitTestParams {
    type Target = ChainParameters;

    fn deref(&self) -> &ChainParameters {
        &self.0
    }
}

impl ModifiableParams for UnitTestParams {
    fn set_subsidy_halving_interval(&mut self, interval: u32) {
        self.0.subsidy_halving_interval = interval;
    }

    fn set_enforce_block_upgrade_majority(&mut self, majority: u32) {
        self.0.enforce_block_upgrade_majority = majority;
    }

    fn set_reject_block_outdated_majority(&mut self, majority: u32) {
        self.0.reject_block_outdated_majority = majority;
    }

    fn set_to_check_block_upgrade_majority(&mut self, window: u32) {
        self.0.to_check_block_upgrade_majority = window;
    }

    fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.0.default_consistency_checks = enabled;
    }

    fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) {
        self.0.allow_min_difficulty_blocks = allowed;
    }

    fn set_skip_proof_of_work_check(&mut self, skip: bool) {
        self.0.skip_proof_of_work_check = skip;
    }
}

pub(crate) fn unittest_overlay(mut params: ChainParameters) -> ChainParameters {
    params.profile = NetworkProfile::UnitTest;
    params.network_id = "unittest";
    // Distinct from main so unit test traffic can never be mistaken for it
    params.message_start = [0x9f, 0xeb, 0x4b, 0x9d];
    params.default_port = 10801;

    params.dns_seeds.clear();
    params.fixed_seed_specs.clear();

    params.mining_requires_peers = false;
    params.default_consistency_checks = true;
    params.allow_min_difficulty_blocks = false;
    params.mine_blocks_on_demand = true;

    // Checkpoints are shared with main
    params
}
