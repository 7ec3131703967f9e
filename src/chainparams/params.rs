//! Chain parameter set
//!
//! One immutable record per network. Fields are crate-private and exposed
//! through accessors; the only mutation path is the unit test wrapper.

use super::checkpoints::CheckpointTable;
use super::network::NetworkProfile;
use super::prefixes::{AddressError, Base58Prefixes, Base58Type};
use crate::consensus::{Block, Target};
use crate::crypto::Hash;
use crate::node::{build_genesis, GenesisSpec};
use crate::p2p::{convert_seeds_now, SeedAddress, SeedSpec};
use log::error;
use serde::Serialize;

/// DNS seed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// Per-network consensus and policy parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainParameters {
    pub(crate) profile: NetworkProfile,
    pub(crate) network_id: &'static str,
    #[serde(serialize_with = "hex_bytes")]
    pub(crate) message_start: [u8; 4],
    #[serde(serialize_with = "hex_bytes")]
    pub(crate) alert_pubkey: Vec<u8>,
    pub(crate) default_port: u16,

    pub(crate) pow_limit: Target,
    pub(crate) subsidy_halving_interval: u32,
    pub(crate) max_reorganization_depth: u32,
    pub(crate) enforce_block_upgrade_majority: u32,
    pub(crate) reject_block_outdated_majority: u32,
    pub(crate) to_check_block_upgrade_majority: u32,
    pub(crate) miner_threads: u32,
    pub(crate) target_timespan: i64,
    pub(crate) target_spacing: i64,
    pub(crate) coinbase_maturity: u32,
    pub(crate) last_pow_block: u32,
    pub(crate) modifier_update_block: u32,
    pub(crate) max_money_out: i64,

    pub(crate) masternode_count_drift: u32,
    pub(crate) pool_max_transactions: u32,
    pub(crate) budget_fee_confirmations: u32,
    pub(crate) spork_key: &'static str,
    pub(crate) masternode_pool_dummy_address: &'static str,
    pub(crate) start_masternode_payments: i64,

    pub(crate) mining_requires_peers: bool,
    pub(crate) allow_min_difficulty_blocks: bool,
    pub(crate) default_consistency_checks: bool,
    pub(crate) require_standard: bool,
    pub(crate) mine_blocks_on_demand: bool,
    pub(crate) skip_proof_of_work_check: bool,
    pub(crate) testnet_to_be_deprecated_field_rpc: bool,
    pub(crate) headers_first_syncing_active: bool,

    pub(crate) genesis_spec: GenesisSpec,
    #[serde(skip)]
    pub(crate) genesis: Block,
    pub(crate) genesis_hash: Hash,
    pub(crate) checkpoints: CheckpointTable,

    pub(crate) dns_seeds: Vec<DnsSeed>,
    pub(crate) fixed_seed_specs: Vec<SeedSpec>,
    pub(crate) base58_prefixes: Base58Prefixes,
}

fn hex_bytes<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: AsRef<[u8]>,
{
    serializer.serialize_str(&hex::encode(bytes))
}

/// Decode a compiled-in hex key; a malformed constant is fatal
pub(crate) fn parse_key(hex_key: &str) -> Vec<u8> {
    match hex::decode(hex_key) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("malformed compiled-in key {}: {}", hex_key, e);
            panic!("malformed compiled-in key {}: {}", hex_key, e);
        }
    }
}

/// Build and validate a pinned genesis block; a mismatch is fatal
pub(crate) fn pinned_genesis(network: &str, spec: &GenesisSpec) -> (Block, Hash) {
    match build_genesis(spec) {
        Ok(block) => {
            let hash = block.hash();
            (block, hash)
        }
        Err(e) => {
            error!("{} genesis is inconsistent with its pinned values: {}", network, e);
            panic!("{} genesis is inconsistent with its pinned values: {}", network, e);
        }
    }
}

impl ChainParameters {
    /// Replace the genesis block, re-validating it against its pinned hash
    pub(crate) fn with_genesis(mut self, spec: GenesisSpec) -> Self {
        let (block, hash) = pinned_genesis(self.network_id, &spec);
        self.genesis_spec = spec;
        self.genesis = block;
        self.genesis_hash = hash;
        self
    }

    /// Attach a checkpoint table whose height 0 entry must be the genesis
    pub(crate) fn with_checkpoints(mut self, checkpoints: CheckpointTable) -> Self {
        self.checkpoints = checkpoints;
        self.assert_genesis_checkpoint();
        self
    }

    /// Height 0 of the checkpoint table must be this network's genesis
    pub(crate) fn assert_genesis_checkpoint(&self) {
        if self.checkpoints.lookup(0) != Some(self.genesis_hash) {
            error!(
                "{} checkpoint at height 0 does not match genesis {}",
                self.network_id, self.genesis_hash
            );
            panic!(
                "{} checkpoint at height 0 does not match genesis {}",
                self.network_id, self.genesis_hash
            );
        }
    }

    pub fn profile(&self) -> NetworkProfile {
        self.profile
    }

    /// Network identifier string ("main", "test", ...)
    pub fn network_id(&self) -> &'static str {
        self.network_id
    }

    /// Message start bytes prefixed to every P2P message
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn pow_limit(&self) -> Target {
        self.pow_limit
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }

    /// Deepest reorganization a node will accept
    pub fn max_reorganization_depth(&self) -> u32 {
        self.max_reorganization_depth
    }

    /// Blocks in the window needed before new-version rules are enforced
    pub fn enforce_block_upgrade_majority(&self) -> u32 {
        self.enforce_block_upgrade_majority
    }

    /// Blocks in the window needed before old-version blocks are rejected
    pub fn reject_block_outdated_majority(&self) -> u32 {
        self.reject_block_outdated_majority
    }

    /// Size of the block-version window
    pub fn to_check_block_upgrade_majority(&self) -> u32 {
        self.to_check_block_upgrade_majority
    }

    /// Default miner thread count, 0 meaning one per core
    pub fn miner_threads(&self) -> u32 {
        self.miner_threads
    }

    pub fn target_timespan(&self) -> i64 {
        self.target_timespan
    }

    pub fn target_spacing(&self) -> i64 {
        self.target_spacing
    }

    /// Blocks per retarget window, never less than one
    pub fn retarget_interval(&self) -> i64 {
        (self.target_timespan / self.target_spacing.max(1)).max(1)
    }

    pub fn coinbase_maturity(&self) -> u32 {
        self.coinbase_maturity
    }

    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn modifier_update_block(&self) -> u32 {
        self.modifier_update_block
    }

    pub fn max_money_out(&self) -> i64 {
        self.max_money_out
    }

    pub fn masternode_count_drift(&self) -> u32 {
        self.masternode_count_drift
    }

    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }

    pub fn budget_fee_confirmations(&self) -> u32 {
        self.budget_fee_confirmations
    }

    pub fn spork_key(&self) -> &'static str {
        self.spork_key
    }

    pub fn masternode_pool_dummy_address(&self) -> &'static str {
        self.masternode_pool_dummy_address
    }

    pub fn start_masternode_payments(&self) -> i64 {
        self.start_masternode_payments
    }

    pub fn mining_requires_peers(&self) -> bool {
        self.mining_requires_peers
    }

    pub fn allow_min_difficulty_blocks(&self) -> bool {
        self.allow_min_difficulty_blocks
    }

    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }

    pub fn require_standard(&self) -> bool {
        self.require_standard
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.mine_blocks_on_demand
    }

    pub fn skip_proof_of_work_check(&self) -> bool {
        self.skip_proof_of_work_check
    }

    /// Whether RPC still reports the legacy `testnet` field
    pub fn testnet_to_be_deprecated_field_rpc(&self) -> bool {
        self.testnet_to_be_deprecated_field_rpc
    }

    pub fn headers_first_syncing_active(&self) -> bool {
        self.headers_first_syncing_active
    }

    pub fn genesis_spec(&self) -> &GenesisSpec {
        &self.genesis_spec
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seed_specs(&self) -> &[SeedSpec] {
        &self.fixed_seed_specs
    }

    /// Fixed seeds as peer records with fresh jittered timestamps
    pub fn fixed_seeds(&self) -> Vec<SeedAddress> {
        convert_seeds_now(&self.fixed_seed_specs)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes.get(kind)
    }

    /// Encode a payload as an address of this network
    pub fn encode_address(&self, kind: Base58Type, payload: &[u8]) -> String {
        self.base58_prefixes.encode(kind, payload)
    }

    /// Decode an address of this network back to its payload
    pub fn decode_address(&self, kind: Base58Type, encoded: &str) -> Result<Vec<u8>, AddressError> {
        self.base58_prefixes.decode(kind, encoded)
    }

    /// True when `height` has a checkpoint and `hash` differs from it
    pub fn conflicts_with_checkpoint(&self, height: u32, hash: &Hash) -> bool {
        matches!(self.checkpoints.lookup(height), Some(pinned) if pinned != *hash)
    }
}
