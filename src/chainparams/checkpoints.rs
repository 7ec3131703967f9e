//! Checkpoint table
//!
//! Known-good block hashes at fixed heights. Reorganizations below the
//! latest checkpoint are refused, and the metadata feeds the sync-progress
//! estimate.

use crate::crypto::Hash;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Checkpoint table construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error("checkpoint table is empty")]
    Empty,
    #[error("checkpoint height {height} does not follow {previous}")]
    NotIncreasing { previous: u32, height: u32 },
}

/// Sync-progress metadata attached to a checkpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckpointMetadata {
    /// Unix timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Transactions between genesis and the last checkpoint
    pub transactions_to_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: u64,
}

/// Ordered height to hash mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckpointTable {
    entries: BTreeMap<u32, Hash>,
    metadata: CheckpointMetadata,
}

impl CheckpointTable {
    /// Build a table from `(height, hash)` pairs given in strictly
    /// increasing height order.
    pub fn new(
        entries: &[(u32, Hash)],
        metadata: CheckpointMetadata,
    ) -> Result<Self, CheckpointError> {
        if entries.is_empty() {
            return Err(CheckpointError::Empty);
        }
        for pair in entries.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(CheckpointError::NotIncreasing {
                    previous: pair[0].0,
                    height: pair[1].0,
                });
            }
        }

        Ok(Self {
            entries: entries.iter().copied().collect(),
            metadata,
        })
    }

    /// Hash pinned at `height`, if any
    pub fn lookup(&self, height: u32) -> Option<Hash> {
        self.entries.get(&height).copied()
    }

    /// Highest checkpoint
    pub fn latest(&self) -> (u32, Hash) {
        // Construction rejects empty tables
        self.entries
            .iter()
            .next_back()
            .map(|(height, hash)| (*height, *hash))
            .unwrap_or((0, Hash::zero()))
    }

    /// Height the node can assume exists without downloading anything
    pub fn total_blocks_estimate(&self) -> u32 {
        self.latest().0
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Hash)> + '_ {
        self.entries.iter().map(|(height, hash)| (*height, *hash))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metadata(&self) -> &CheckpointMetadata {
        &self.metadata
    }

    pub fn last_checkpoint_time(&self) -> i64 {
        self.metadata.last_checkpoint_time
    }

    pub fn transactions_to_last_checkpoint(&self) -> u64 {
        self.metadata.transactions_to_last_checkpoint
    }

    pub fn transactions_per_day(&self) -> u64 {
        self.metadata.transactions_per_day
    }
}
