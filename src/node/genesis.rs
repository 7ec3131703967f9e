//! Genesis block derivation
//!
//! Every network's genesis is one coinbase transaction under a header with
//! a null parent. Production networks pin `(time, bits, nonce)` together with
//! the expected hash, so construction only has to recompute and compare.
//! Searching for a new nonce is a separate, explicitly requested step.

use crate::consensus::{
    Block, BlockHeader, Builder, CompactError, Transaction, OP_CHECKSIG,
};
use crate::crypto::Hash;
use crate::mining::{Miner, MiningResult};
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

/// Genesis block version
pub const GENESIS_VERSION: i32 = 1;

/// First integer pushed by the coinbase input script (0x1d00ffff)
pub const COINBASE_BITS_TAG: i64 = 486604799;

/// Second integer pushed by the coinbase input script
pub const COINBASE_ERA_TAG: i64 = 4;

/// Genesis derivation errors
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("invalid genesis output public key: {0}")]
    InvalidPubkey(#[from] hex::FromHexError),
    #[error("invalid genesis bits: {0}")]
    InvalidBits(#[from] CompactError),
    #[error("genesis hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch { expected: Hash, computed: Hash },
    #[error("genesis search interrupted after {iterations} iterations")]
    Interrupted { iterations: u64 },
}

/// Everything needed to rebuild one network's genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisSpec {
    /// Message embedded in the coinbase input script
    pub timestamp_message: &'static str,
    /// Hex public key paid by the coinbase output
    pub output_pubkey: &'static str,
    /// Coinbase output value in base units
    pub output_value: i64,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    /// Pinned hash the header must reproduce
    pub expected_hash: Hash,
}

/// Whether resolving a genesis may fall back to the nonce search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPolicy {
    /// Mismatch is an error. Used by every network profile.
    Forbid,
    /// Mismatch starts a search from the pinned nonce and time.
    Allow,
}

/// A genesis block together with how it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGenesis {
    pub block: Block,
    pub hash: Hash,
    /// Candidates rejected by the search; zero when the pinned values held
    pub iterations: u64,
}

impl ResolvedGenesis {
    /// True when the block reproduces the pinned hash of `genesis`
    pub fn matches(&self, genesis: &GenesisSpec) -> bool {
        self.hash == genesis.expected_hash
    }
}

/// Constructs the single coinbase transaction of a genesis block
pub fn genesis_coinbase(spec: &GenesisSpec) -> Result<Transaction, GenesisError> {
    let in_script = Builder::new()
        .push_scriptint(COINBASE_BITS_TAG)
        .push_scriptint(COINBASE_ERA_TAG)
        .push_slice(spec.timestamp_message.as_bytes())
        .into_script();

    let pubkey = hex::decode(spec.output_pubkey)?;
    let out_script = Builder::new()
        .push_slice(&pubkey)
        .push_opcode(OP_CHECKSIG)
        .into_script();

    Ok(Transaction::coinbase(in_script, spec.output_value, out_script))
}

/// Assemble the genesis block without checking its hash
pub fn assemble_genesis(spec: &GenesisSpec) -> Result<Block, GenesisError> {
    let coinbase = genesis_coinbase(spec)?;

    // A single transaction is its own merkle root
    let merkle_root = coinbase.txid();

    let header = BlockHeader::new(
        GENESIS_VERSION,
        Hash::zero(),
        merkle_root,
        spec.time,
        spec.bits,
        spec.nonce,
    );

    Ok(Block::new(header, vec![coinbase]))
}

/// Build the genesis block and verify it against the pinned hash
pub fn build_genesis(spec: &GenesisSpec) -> Result<Block, GenesisError> {
    let block = assemble_genesis(spec)?;
    let computed = block.hash();
    if computed != spec.expected_hash {
        return Err(GenesisError::HashMismatch {
            expected: spec.expected_hash,
            computed,
        });
    }
    Ok(block)
}

/// Resolve the genesis block, searching only when the policy allows it
pub fn resolve_genesis(
    spec: &GenesisSpec,
    policy: SearchPolicy,
) -> Result<ResolvedGenesis, GenesisError> {
    resolve_genesis_with_miner(spec, policy, &Miner::new())
}

/// Like [`resolve_genesis`], with a caller-owned miner so the search can be
/// interrupted through [`Miner::stop`].
pub fn resolve_genesis_with_miner(
    spec: &GenesisSpec,
    policy: SearchPolicy,
    miner: &Miner,
) -> Result<ResolvedGenesis, GenesisError> {
    let mut block = assemble_genesis(spec)?;
    let computed = block.hash();

    if computed == spec.expected_hash {
        debug!("genesis {} matches pinned values", computed);
        return Ok(ResolvedGenesis { block, hash: computed, iterations: 0 });
    }

    if policy == SearchPolicy::Forbid {
        return Err(GenesisError::HashMismatch {
            expected: spec.expected_hash,
            computed,
        });
    }

    info!(
        "genesis hash {} does not match pinned {}, searching from time {} nonce {}",
        computed, spec.expected_hash, spec.time, spec.nonce
    );

    match miner.mine(block.header)? {
        MiningResult::Success { header, iterations } => {
            block.header = header;
            let hash = header.hash();
            info!(
                "genesis found after {} iterations: time {} nonce {} bits 0x{:08x} hash {}",
                iterations, header.time, header.nonce, header.bits, hash
            );
            Ok(ResolvedGenesis { block, hash, iterations })
        }
        MiningResult::Interrupted { iterations, .. } => {
            Err(GenesisError::Interrupted { iterations })
        }
    }
}
