//! Chain parameters - per-network consensus constants, genesis blocks,
//! checkpoints, seeds and address prefixes

mod checkpoints;
mod mainnet;
mod network;
mod params;
mod prefixes;
mod registry;
mod regtest;
mod testnet;
mod unittest;

pub use checkpoints::*;
pub use mainnet::{GENESIS_MESSAGE, GENESIS_OUTPUT_PUBKEY, MAIN_GENESIS, MAIN_GENESIS_HASH, MAIN_PREFIXES};
pub use network::*;
pub use params::{ChainParameters, DnsSeed};
pub use prefixes::*;
pub use registry::*;
pub use regtest::REGTEST_GENESIS_HASH;
pub use testnet::{TESTNET_GENESIS_HASH, TESTNET_PREFIXES};
pub use unittest::{ModifiableParams, UnitTestParams};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COIN;
    use std::collections::HashSet;

    #[test]
    fn test_main_values() {
        let main = build(NetworkProfile::Main);
        assert_eq!(main.network_id(), "main");
        assert_eq!(main.message_start(), [0x10, 0x91, 0x1a, 0x1e]);
        assert_eq!(main.default_port(), 10809);
        assert_eq!(main.pow_limit().to_compact(), 0x207fffff);
        assert_eq!(main.max_money_out(), 50_000_000 * COIN);
        assert_eq!(main.start_masternode_payments(), 1559347200 + 86400);
        assert_eq!(main.retarget_interval(), 1);
        assert_eq!(main.dns_seeds().len(), 4);
        assert_eq!(main.fixed_seed_specs().len(), 2);
        assert!(main.mining_requires_peers());
        assert!(main.require_standard());
        assert_eq!(main.alert_pubkey().len(), 65);
        assert_eq!(main.checkpoints().lookup(0), Some(MAIN_GENESIS_HASH));
    }

    #[test]
    fn test_main_checkpoints_attached_once() {
        let main = build(NetworkProfile::Main);
        let table = main.checkpoints();
        assert_eq!(table, &mainnet::main_checkpoints());
        assert_eq!(table.len(), 1);
        assert_eq!(table.last_checkpoint_time(), 1559712018);
        assert_eq!(table.transactions_to_last_checkpoint(), 601);
        assert_eq!(table.transactions_per_day(), 2000);
    }

    #[test]
    #[should_panic(expected = "does not match genesis")]
    fn test_foreign_checkpoint_table_is_fatal() {
        build(NetworkProfile::Main).with_checkpoints(testnet::testnet_checkpoints());
    }

    #[test]
    fn test_testnet_values() {
        let test = build(NetworkProfile::Testnet);
        assert_eq!(test.network_id(), "test");
        assert_eq!(test.default_port(), 10808);
        assert_eq!(test.coinbase_maturity(), 15);
        assert_eq!(test.enforce_block_upgrade_majority(), 51);
        assert_eq!(test.genesis_block().header.nonce, 1479234);
        assert_eq!(test.genesis_hash(), TESTNET_GENESIS_HASH);
        assert_eq!(test.checkpoints().lookup(0), Some(TESTNET_GENESIS_HASH));
        assert_eq!(test.checkpoints().lookup(1), None);
        assert_eq!(test.start_masternode_payments(), 1559347201 + 86400);
        assert_eq!(test.base58_prefix(Base58Type::ScriptAddress), &[10]);
        assert!(test.testnet_to_be_deprecated_field_rpc());
        assert!(!test.require_standard());
        assert!(test.dns_seeds().is_empty());
        // Integer division of 60 / 120 is clamped
        assert_eq!(test.retarget_interval(), 1);
    }

    #[test]
    fn test_regtest_inherits_testnet() {
        let test = build(NetworkProfile::Testnet);
        let reg = build(NetworkProfile::Regtest);
        assert_eq!(reg.default_port(), 10806);
        assert_eq!(reg.subsidy_halving_interval(), 150);
        assert_eq!(reg.genesis_block().header.bits, 0x207fffff);
        assert_eq!(reg.genesis_hash(), REGTEST_GENESIS_HASH);
        assert!(reg.mine_blocks_on_demand());
        assert!(reg.allow_min_difficulty_blocks());
        // Fields regtest leaves alone come from testnet
        assert_eq!(reg.spork_key(), test.spork_key());
        assert_eq!(reg.base58_prefixes(), test.base58_prefixes());
        assert_eq!(reg.coinbase_maturity(), test.coinbase_maturity());
        assert_eq!(reg.start_masternode_payments(), test.start_masternode_payments());
        assert_eq!(reg.retarget_interval(), 720);
    }

    #[test]
    fn test_identities_are_distinct() {
        let all: Vec<_> = NetworkProfile::ALL.iter().map(|p| build(*p)).collect();
        let magics: HashSet<_> = all.iter().map(|p| p.message_start()).collect();
        let ports: HashSet<_> = all.iter().map(|p| p.default_port()).collect();
        let names: HashSet<_> = all.iter().map(|p| p.network_id()).collect();
        assert_eq!(magics.len(), 4);
        assert_eq!(ports.len(), 4);
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_every_genesis_meets_pow_and_checkpoint() {
        for profile in NetworkProfile::ALL {
            let params = build(profile);
            let genesis = params.genesis_block();
            assert_eq!(genesis.hash(), params.genesis_hash());
            assert_eq!(params.genesis_hash(), params.genesis_spec().expected_hash);
            assert!(genesis.header.meets_target().unwrap());
            assert_eq!(params.checkpoints().lookup(0), Some(params.genesis_hash()));
            assert!(!params.conflicts_with_checkpoint(0, &params.genesis_hash()));
            assert!(params.conflicts_with_checkpoint(0, &crate::crypto::Hash::zero()));
        }
    }

    #[test]
    fn test_dummy_addresses_use_pubkey_prefix() {
        for profile in [NetworkProfile::Main, NetworkProfile::Testnet] {
            let params = build(profile);
            let payload = params
                .decode_address(Base58Type::PubkeyAddress, params.masternode_pool_dummy_address())
                .unwrap();
            assert_eq!(payload.len(), 20);
            assert_eq!(
                params.encode_address(Base58Type::PubkeyAddress, &payload),
                params.masternode_pool_dummy_address()
            );
        }
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(build(NetworkProfile::Main)).unwrap();
        assert_eq!(json["network_id"], "main");
        assert_eq!(json["message_start"], "10911a1e");
        assert_eq!(json["profile"], "main");
        assert_eq!(
            json["genesis_hash"],
            "0000098b88051213b080c6def5299fb325e177e890d807978fe35519cd891c67"
        );
        assert_eq!(json["base58_prefixes"]["ext_coin_type"], "800003d5");
    }
}
