//! Property-based tests for UVC chain parameters
//!
//! These tests verify invariants hold under random inputs.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uvc_core::chainparams::{
    decode_check, encode_check, AddressError, CheckpointMetadata, CheckpointTable, NetworkProfile,
};
use uvc_core::constants::ONE_WEEK;
use uvc_core::consensus::BlockHeader;
use uvc_core::crypto::{hash_bytes, Hash};
use uvc_core::mining::{Miner, MiningResult};
use uvc_core::p2p::{convert_seeds, SeedSpec};

const META: CheckpointMetadata = CheckpointMetadata {
    last_checkpoint_time: 0,
    transactions_to_last_checkpoint: 0,
    transactions_per_day: 0,
};

fn seed_spec() -> impl Strategy<Value = SeedSpec> {
    (any::<[u8; 16]>(), any::<u16>()).prop_map(|(addr, port)| SeedSpec { addr, port })
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

proptest! {
    /// Seed conversion: one record per entry, last seen one to two weeks ago
    #[test]
    fn prop_seed_jitter_window(
        specs in prop::collection::vec(seed_spec(), 0..32),
        now in 2 * ONE_WEEK..4_000_000_000i64,
        rng_seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(rng_seed);
        let records = convert_seeds(&specs, now, &mut rng);

        prop_assert_eq!(records.len(), specs.len());
        for (record, spec) in records.iter().zip(&specs) {
            prop_assert_eq!(record.addr.port(), spec.port);
            prop_assert!(record.last_seen <= now - ONE_WEEK);
            prop_assert!(record.last_seen > now - 2 * ONE_WEEK);
        }
    }

    /// Only the known identifiers select a network
    #[test]
    fn prop_unknown_identifiers_rejected(raw in "[a-z]{1,12}") {
        let known = ["main", "mainnet", "test", "testnet", "regtest", "unittest"];
        let parsed = raw.parse::<NetworkProfile>();
        prop_assert_eq!(parsed.is_ok(), known.contains(&raw.as_str()));
    }

    /// Strictly increasing heights always build, every entry is found
    #[test]
    fn prop_checkpoint_lookup(heights in prop::collection::btree_set(any::<u32>(), 1..20)) {
        let entries: Vec<(u32, Hash)> = heights
            .iter()
            .map(|h| (*h, hash_bytes(&h.to_le_bytes())))
            .collect();
        let table = CheckpointTable::new(&entries, META).unwrap();

        for (height, hash) in &entries {
            prop_assert_eq!(table.lookup(*height), Some(*hash));
        }
        prop_assert_eq!(table.latest(), *entries.last().unwrap());
    }

    /// A repeated or descending height anywhere is rejected
    #[test]
    fn prop_checkpoint_rejects_disorder(mut heights in prop::collection::vec(any::<u32>(), 2..20), at in any::<prop::sample::Index>()) {
        heights.sort_unstable();
        let i = at.index(heights.len() - 1) + 1;
        heights[i] = heights[i - 1];
        let entries: Vec<(u32, Hash)> = heights.iter().map(|h| (*h, Hash::zero())).collect();
        prop_assert!(CheckpointTable::new(&entries, META).is_err());
    }

    /// Flipping any byte of an encoded payload is caught by the checksum
    #[test]
    fn prop_base58_detects_corruption(
        payload in prop::collection::vec(any::<u8>(), 20),
        flip in any::<prop::sample::Index>(),
        mask in 1u8..=255
    ) {
        let encoded = encode_check(&[68], &payload);
        let mut raw = bs58::decode(&encoded).into_vec().unwrap();
        let i = flip.index(raw.len());
        raw[i] ^= mask;
        let corrupted = bs58::encode(raw).into_string();
        prop_assert!(matches!(decode_check(&corrupted), Err(AddressError::InvalidChecksum)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The search is deterministic and always lands on a header meeting its target
    #[test]
    fn prop_search_deterministic(start_nonce in any::<u32>(), time in 1_500_000_000u32..1_600_000_000) {
        let header = BlockHeader::new(1, Hash::zero(), hash_bytes(b"merkle"), time, 0x207fffff, start_nonce);
        let miner = Miner::new();

        let a = miner.mine(header).unwrap();
        let b = miner.mine(header).unwrap();
        prop_assert_eq!(&a, &b);

        match a {
            MiningResult::Success { header: found, iterations } => {
                prop_assert!(found.meets_target().unwrap());
                prop_assert_eq!(found.nonce, start_nonce.wrapping_add(iterations as u32));
            }
            MiningResult::Interrupted { .. } => prop_assert!(false, "search was not interrupted"),
        }
    }
}
