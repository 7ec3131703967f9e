//! Main network parameters
//!
//! Main defines every field; the other networks are overlays on top of it.

use super::checkpoints::{CheckpointMetadata, CheckpointTable};
use super::network::NetworkProfile;
use super::params::{parse_key, pinned_genesis, ChainParameters, DnsSeed};
use super::prefixes::Base58Prefixes;
use crate::constants::{COIN, ONE_DAY};
use crate::consensus::Target;
use crate::crypto::Hash;
use crate::node::GenesisSpec;
use crate::p2p::SeedSpec;

pub const MAIN_GENESIS_HASH: Hash = Hash::from_display_hex_const(
    "0000098b88051213b080c6def5299fb325e177e890d807978fe35519cd891c67",
);

/// Genesis coinbase message, stored reversed
pub const GENESIS_MESSAGE: &str =
    "sknab rof tuoliab dnoces fo knirb no rollecnahC 9002/naJ/30 semiT ehT";

/// Public key paid by the genesis coinbase
pub const GENESIS_OUTPUT_PUBKEY: &str = "04b10b7f39b2ef882a960b1083e5d2240a6c86a0480c71187e584bfa0f548f7fb5906dbc49e1739d0a4b41bb4302fa7bb9eb161df422ce5b3c9cbf2b20be094712";

pub const MAIN_GENESIS: GenesisSpec = GenesisSpec {
    timestamp_message: GENESIS_MESSAGE,
    output_pubkey: GENESIS_OUTPUT_PUBKEY,
    output_value: 0,
    time: 1559347200,
    bits: 0x1e0ffff0,
    nonce: 148233,
    expected_hash: MAIN_GENESIS_HASH,
};

const ALERT_PUBKEY: &str = "04ef7310f2e5f9624f382f9ceb3d7ddbb7928b325d13fb8cb5555757b036cc6d9bd5f7d59885a66c26cd4d232fd55a5b6e7fbd782ce9c588c82213cf533cea1619";

const SPORK_KEY: &str = "04dbe3e92c1376330c501895f8507195bc98e5c428c04d5e1573c905bcae503e6dda5bb9a5e723ec0dff67a066841043609755a86a557cdde9160e6995e1f29864";

const DNS_SEEDS: &[DnsSeed] = &[
    DnsSeed { name: "uvccoin.com", host: "dnsseed1.uvccoin.com" },
    DnsSeed { name: "uvccoin.com", host: "dnsseed2.uvccoin.com" },
    DnsSeed { name: "88.99.213.241", host: "88.99.213.241" },
    DnsSeed { name: "5.9.25.40", host: "5.9.25.40" },
];

// Rebuilt from the IPv4 DNS seed entries; no generated seed table was published
const FIXED_SEEDS: &[SeedSpec] = &[
    SeedSpec::ipv4(88, 99, 213, 241, 10809),
    SeedSpec::ipv4(5, 9, 25, 40, 10809),
];

/// Addresses start with 'U', script addresses with '9'
pub const MAIN_PREFIXES: Base58Prefixes = Base58Prefixes {
    pubkey_address: &[68],
    script_address: &[20],
    secret_key: &[22],
    // xpub / xprv
    ext_public_key: &[0x04, 0x88, 0xB2, 0x1E],
    ext_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
    // BIP44 coin type 981
    ext_coin_type: &[0x80, 0x00, 0x03, 0xd5],
};

pub(crate) fn main_checkpoints() -> CheckpointTable {
    table(
        &[(0, MAIN_GENESIS_HASH)],
        CheckpointMetadata {
            last_checkpoint_time: 1559712018,
            transactions_to_last_checkpoint: 601,
            transactions_per_day: 2000,
        },
    )
}

/// Compiled-in checkpoint tables are constants; a malformed one is fatal
pub(crate) fn table(entries: &[(u32, Hash)], metadata: CheckpointMetadata) -> CheckpointTable {
    match CheckpointTable::new(entries, metadata) {
        Ok(table) => table,
        Err(e) => {
            log::error!("compiled-in checkpoint table is malformed: {}", e);
            panic!("compiled-in checkpoint table is malformed: {}", e);
        }
    }
}

pub(crate) fn main_params() -> ChainParameters {
    let (genesis, genesis_hash) = pinned_genesis("main", &MAIN_GENESIS);

    let params = ChainParameters {
        profile: NetworkProfile::Main,
        network_id: "main",
        message_start: [0x10, 0x91, 0x1a, 0x1e],
        alert_pubkey: parse_key(ALERT_PUBKEY),
        default_port: 10809,

        pow_limit: Target::MAX >> 1,
        subsidy_halving_interval: 1_050_000,
        max_reorganization_depth: 100,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 0,
        target_timespan: 60,
        target_spacing: 60,
        coinbase_maturity: 10,
        last_pow_block: 200,
        modifier_update_block: 1,
        max_money_out: 50_000_000 * COIN,

        masternode_count_drift: 20,
        pool_max_transactions: 3,
        budget_fee_confirmations: 6,
        spork_key: SPORK_KEY,
        masternode_pool_dummy_address: "UZ8d4DZiK89kcdQZZsfoTYjYrzewf4QdmJ",
        start_masternode_payments: MAIN_GENESIS.time as i64 + ONE_DAY,

        mining_requires_peers: true,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: false,
        testnet_to_be_deprecated_field_rpc: false,
        headers_first_syncing_active: false,

        genesis_spec: MAIN_GENESIS,
        genesis,
        genesis_hash,
        checkpoints: main_checkpoints(),

        dns_seeds: DNS_SEEDS.to_vec(),
        fixed_seed_specs: FIXED_SEEDS.to_vec(),
        base58_prefixes: MAIN_PREFIXES,
    };
    params.assert_genesis_checkpoint();
    params
}
