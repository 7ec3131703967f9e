//! Regression test overlay, applied on top of testnet

use super::checkpoints::{CheckpointMetadata, CheckpointTable};
use super::mainnet::table;
use super::network::NetworkProfile;
use super::params::ChainParameters;
use crate::consensus::Target;
use crate::crypto::Hash;
use crate::node::GenesisSpec;

pub const REGTEST_GENESIS_HASH: Hash = Hash::from_display_hex_const(
    "5cbc0c0aed64f47b24cd100eec94939e0afddb503756bf52d04276b2a569134b",
);

pub(crate) fn regtest_checkpoints() -> CheckpointTable {
    table(
        &[(0, REGTEST_GENESIS_HASH)],
        CheckpointMetadata {
            last_checkpoint_time: 1559347202,
            transactions_to_last_checkpoint: 0,
            transactions_per_day: 100,
        },
    )
}

pub(crate) fn regtest_overlay(mut params: ChainParameters) -> ChainParameters {
    params.profile = NetworkProfile::Regtest;
    params.network_id = "regtest";
    params.message_start = [0xee, 0xbc, 0xda, 0xfe];
    params.subsidy_halving_interval = 150;
    params.enforce_block_upgrade_majority = 750;
    params.reject_block_outdated_majority = 950;
    params.to_check_block_upgrade_majority = 1000;
    params.miner_threads = 1;
    params.target_timespan = 24 * 60 * 60;
    params.target_spacing = 2 * 60;
    params.pow_limit = Target::MAX >> 1;

    let genesis = GenesisSpec {
        time: 1559347202,
        bits: 0x207fffff,
        nonce: 1,
        expected_hash: REGTEST_GENESIS_HASH,
        ..params.genesis_spec.clone()
    };
    let mut params = params.with_genesis(genesis);
    params.default_port = 10806;

    // No fixed or DNS seeds
    params.dns_seeds.clear();
    params.fixed_seed_specs.clear();

    params.mining_requires_peers = false;
    params.allow_min_difficulty_blocks = true;
    params.default_consistency_checks = true;
    params.require_standard = false;
    params.mine_blocks_on_demand = true;
    params.testnet_to_be_deprecated_field_rpc = false;

    params.with_checkpoints(regtest_checkpoints())
}
