//! Public test network overlay, applied on top of main

use super::checkpoints::{CheckpointMetadata, CheckpointTable};
use super::mainnet::table;
use super::network::NetworkProfile;
use super::params::{parse_key, ChainParameters};
use super::prefixes::Base58Prefixes;
use crate::constants::ONE_DAY;
use crate::crypto::Hash;
use crate::node::GenesisSpec;

pub const TESTNET_GENESIS_HASH: Hash = Hash::from_display_hex_const(
    "0000025912c413e8ef69c569e3cee25491144f2541677d26e95db17f388be71d",
);

const ALERT_PUBKEY: &str = "04582aeb0ec4b18afeb557b919cdc3eadd650eb9053079d787cd79d7b87388a7c8de3d59273d45a8a430d406f87132519c13e9c48b60c2c5dc0f3eb9e993bd5ccc";

const SPORK_KEY: &str = "04cb8b8eb95ab511a9fb6cfa89bf25bf3f6833f37746a16b9dc38d064c089a713eb6b479dc891bba522187bba49c687ab2f78c35430fee120d4cba4013b3a74e7b";

/// Script addresses start with '5'; extended keys use tpub / tprv
pub const TESTNET_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[68],
    script_address: &[10],
    secret_key: &[240],
    ext_public_key: &[0x04, 0x35, 0x87, 0xCF],
    ext_secret_key: &[0x04, 0x35, 0x83, 0x94],
    ext_coin_type: &[0x80, 0x00, 0x00, 0x01],
};

pub(crate) fn testnet_checkpoints() -> CheckpointTable {
    table(
        &[(0, TESTNET_GENESIS_HASH)],
        CheckpointMetadata {
            last_checkpoint_time: 1559347201,
            transactions_to_last_checkpoint: 0,
            transactions_per_day: 250,
        },
    )
}

pub(crate) fn testnet_overlay(mut params: ChainParameters) -> ChainParameters {
    params.profile = NetworkProfile::Testnet;
    params.network_id = "test";
    params.message_start = [0x90, 0x0d, 0xf0, 0x0d];
    params.alert_pubkey = parse_key(ALERT_PUBKEY);
    params.default_port = 10808;

    params.enforce_block_upgrade_majority = 51;
    params.reject_block_outdated_majority = 75;
    params.to_check_block_upgrade_majority = 100;
    params.miner_threads = 0;
    params.target_timespan = 60;
    params.target_spacing = 2 * 60;
    params.last_pow_block = 200;
    params.coinbase_maturity = 15;
    params.masternode_count_drift = 4;
    params.modifier_update_block = 1;

    let genesis = GenesisSpec {
        time: 1559347201,
        nonce: 1479234,
        expected_hash: TESTNET_GENESIS_HASH,
        ..params.genesis_spec.clone()
    };
    let mut params = params.with_genesis(genesis);

    params.dns_seeds.clear();
    params.fixed_seed_specs.clear();
    params.base58_prefixes = TESTNET_PREFIXES;

    params.mining_requires_peers = true;
    params.allow_min_difficulty_blocks = false;
    params.default_consistency_checks = false;
    params.require_standard = false;
    params.mine_blocks_on_demand = false;
    params.testnet_to_be_deprecated_field_rpc = true;

    params.pool_max_transactions = 2;
    params.spork_key = SPORK_KEY;
    params.masternode_pool_dummy_address = "UY9Y1dioYhRTyq49F6YbQa8ik83TR4DWQ5";
    params.start_masternode_payments = params.genesis_spec.time as i64 + ONE_DAY;
    // Short because testnet only has an 8 block finalization window
    params.budget_fee_confirmations = 3;

    params.with_checkpoints(testnet_checkpoints())
}
