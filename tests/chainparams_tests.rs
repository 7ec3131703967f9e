//! Network parameter integration tests
//!
//! Every test builds its own `Registry` except the one that exercises the
//! process-wide default, which is the only test in this file touching it.

use uvc_core::chainparams::{
    modify_unit_test_params, params, registry, select_params, Base58Type, ModifiableParams,
    NetworkProfile, ParamsError, Registry, MAIN_GENESIS, MAIN_GENESIS_HASH,
    REGTEST_GENESIS_HASH, TESTNET_GENESIS_HASH,
};
use uvc_core::consensus::BlockHeader;
use uvc_core::crypto::Hash;
use uvc_core::mining::{Miner, MiningResult};
use uvc_core::node::{resolve_genesis, GenesisSpec, SearchPolicy};

#[test]
fn test_regtest_port() {
    let registry = Registry::new();
    registry.select(NetworkProfile::Regtest);
    assert_eq!(registry.active().default_port(), 10806);
}

#[test]
fn test_by_id_ignores_selection() {
    let registry = Registry::new();
    registry.select(NetworkProfile::Main);
    let test = registry.by_id(NetworkProfile::Testnet);
    assert_eq!(test.checkpoints().lookup(0), Some(TESTNET_GENESIS_HASH));
    assert_eq!(test.checkpoints().lookup(42), None);
    assert_eq!(registry.active().profile(), NetworkProfile::Main);
}

#[test]
fn test_select_from_identifier() {
    let registry = Registry::new();
    assert_eq!(registry.select_from_identifier("unittest"), Ok(NetworkProfile::UnitTest));
    assert_eq!(registry.active().network_id(), "unittest");
    assert!(registry.select_from_identifier("nope").is_err());
    assert_eq!(registry.active_profile(), Some(NetworkProfile::UnitTest));
}

#[test]
fn test_select_from_identifier_conflict_is_an_error() {
    let registry = Registry::new();
    registry.select(NetworkProfile::Main);

    assert_eq!(
        registry.select_from_identifier("regtest"),
        Err(ParamsError::AlreadySelected {
            active: NetworkProfile::Main,
            requested: NetworkProfile::Regtest,
        })
    );
    assert_eq!(registry.active_profile(), Some(NetworkProfile::Main));
    assert_eq!(registry.select_from_identifier("mainnet"), Ok(NetworkProfile::Main));
}

#[test]
fn test_unit_test_mutation_snapshot() {
    let registry = Registry::new();
    registry.select(NetworkProfile::UnitTest);
    let before = registry.active();

    registry
        .modify_unit_test(|p| {
            p.set_enforce_block_upgrade_majority(51);
            p.set_reject_block_outdated_majority(75);
            p.set_to_check_block_upgrade_majority(100);
        })
        .unwrap();

    let after = registry.active();
    assert_eq!(before.enforce_block_upgrade_majority(), 750);
    assert_eq!(after.enforce_block_upgrade_majority(), 51);
    assert_eq!(after.reject_block_outdated_majority(), 75);
    assert_eq!(after.to_check_block_upgrade_majority(), 100);
}

#[test]
fn test_main_genesis_pinned_without_search() {
    let resolved = resolve_genesis(&MAIN_GENESIS, SearchPolicy::Allow).unwrap();
    assert_eq!(resolved.hash, MAIN_GENESIS_HASH);
    assert_eq!(resolved.iterations, 0);
}

#[test]
fn test_main_genesis_historical_triple() {
    let start = GenesisSpec {
        time: 1559347200,
        bits: 0x1e0ffff0,
        nonce: 148233,
        ..MAIN_GENESIS
    };
    assert!(resolve_genesis(&start, SearchPolicy::Forbid).is_ok());

    let resolved = resolve_genesis(&start, SearchPolicy::Allow).unwrap();
    assert_eq!(resolved.iterations, 0);
    assert_eq!(resolved.block.header.nonce, 148233);
    assert_eq!(
        resolved.hash.to_hex(),
        "0000098b88051213b080c6def5299fb325e177e890d807978fe35519cd891c67"
    );
}

#[test]
fn test_testnet_and_regtest_genesis_pinned_without_search() {
    let registry = Registry::new();
    for (profile, nonce, hash) in [
        (NetworkProfile::Testnet, 1479234, TESTNET_GENESIS_HASH),
        (NetworkProfile::Regtest, 1, REGTEST_GENESIS_HASH),
    ] {
        let spec = registry.by_id(profile).genesis_spec().clone();
        assert_eq!(spec.nonce, nonce);
        let resolved = resolve_genesis(&spec, SearchPolicy::Allow).unwrap();
        assert_eq!(resolved.iterations, 0);
        assert_eq!(resolved.hash, hash);
    }
    assert_eq!(
        TESTNET_GENESIS_HASH.to_hex(),
        "0000025912c413e8ef69c569e3cee25491144f2541677d26e95db17f388be71d"
    );
    assert_eq!(
        REGTEST_GENESIS_HASH.to_hex(),
        "5cbc0c0aed64f47b24cd100eec94939e0afddb503756bf52d04276b2a569134b"
    );
}

#[test]
fn test_nonce_wrap_bumps_time() {
    let regtest = Registry::new().by_id(NetworkProfile::Regtest);
    let mut header = regtest.genesis_block().header;
    // The last nonce of this second misses the regtest target
    header.time = 1559347208;
    header.nonce = u32::MAX;

    match Miner::new().mine(header).unwrap() {
        MiningResult::Success { header: found, iterations } => {
            assert_eq!(found.time, 1559347209);
            assert_eq!(found.nonce, 0);
            assert_eq!(iterations, 1);
            assert_eq!(
                found.hash(),
                Hash::from_hex("2f27f7906f689b42aa3624726a419253eac588b0ad9d5b6327a0b8cd5e0b8a10")
                    .unwrap()
            );
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_main_genesis_header_bytes() {
    let main = Registry::new().by_id(NetworkProfile::Main);
    let header: BlockHeader = main.genesis_block().header;
    assert_eq!(
        hex::encode(header.to_bytes()),
        "010000000000000000000000000000000000000000000000000000000000000000000000eef782e65616e7e49ffc487d5e83ea9caca7f36524a32d944c23d7453a98482000c0f15cf0ff0f1e09430200"
    );
    assert_eq!(
        hex::encode(main.genesis_block().transactions[0].to_bytes()),
        "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff4d04ffff001d010445736b6e616220726f662074756f6c69616220646e6f63657320666f206b6e697262206e6f20726f6c6c65636e61684320393030322f6e614a2f33302073656d695420656854ffffffff010000000000000000434104b10b7f39b2ef882a960b1083e5d2240a6c86a0480c71187e584bfa0f548f7fb5906dbc49e1739d0a4b41bb4302fa7bb9eb161df422ce5b3c9cbf2b20be094712ac00000000"
    );
}

#[test]
fn test_dummy_address_prefix() {
    let registry = Registry::new();
    for profile in [NetworkProfile::Main, NetworkProfile::Testnet] {
        let params = registry.by_id(profile);
        let payload = params
            .decode_address(Base58Type::PubkeyAddress, params.masternode_pool_dummy_address())
            .unwrap();
        assert_eq!(payload.len(), 20);
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[68]);
    }
}

#[test]
fn test_fixed_seeds_converted_on_demand() {
    let registry = Registry::new();
    let main = registry.by_id(NetworkProfile::Main);
    let seeds = main.fixed_seeds();
    assert_eq!(seeds.len(), main.fixed_seed_specs().len());
    assert_eq!(seeds[0].addr.to_string(), "88.99.213.241:10809");
    assert!(registry.by_id(NetworkProfile::Regtest).fixed_seeds().is_empty());
}

#[test]
fn test_process_wide_registry() {
    assert!(registry().try_active().is_none());
    assert_eq!(
        modify_unit_test_params(|p| p.set_allow_min_difficulty_blocks(true)).unwrap_err(),
        ParamsError::NoActiveNetwork
    );

    select_params(NetworkProfile::UnitTest);
    assert_eq!(params().default_port(), 10801);

    let updated = modify_unit_test_params(|p| p.set_allow_min_difficulty_blocks(true)).unwrap();
    assert!(updated.allow_min_difficulty_blocks());
    assert!(params().allow_min_difficulty_blocks());
}
