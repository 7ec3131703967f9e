//! Header nonce search
//!
//! Scans nonces in ascending order; when the 32-bit nonce wraps the
//! timestamp is bumped by one second and the nonce space is scanned again.
//! There is no iteration cap. The only way to end an unlucky search early
//! is the stop signal.

use crate::consensus::{BlockHeader, CompactError};
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Iterations between progress reports
pub const PROGRESS_INTERVAL: u64 = 1 << 20;

/// Mining result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiningResult {
    /// Header whose hash satisfies its target
    Success { header: BlockHeader, iterations: u64 },
    /// Stop signal observed; header holds the next candidate
    Interrupted { header: BlockHeader, iterations: u64 },
}

impl MiningResult {
    pub fn iterations(&self) -> u64 {
        match self {
            MiningResult::Success { iterations, .. } => *iterations,
            MiningResult::Interrupted { iterations, .. } => *iterations,
        }
    }
}

/// Proof-of-work searcher
#[derive(Clone, Debug, Default)]
pub struct Miner {
    /// Stop signal
    stop_signal: Arc<AtomicBool>,
}

impl Miner {
    /// Create a new miner
    pub fn new() -> Self {
        Self {
            stop_signal: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a stop signal handle
    pub fn stop_signal(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_signal)
    }

    /// Stop mining
    pub fn stop(&self) {
        self.stop_signal.store(true, Ordering::SeqCst);
    }

    /// Reset stop signal
    pub fn reset(&self) {
        self.stop_signal.store(false, Ordering::SeqCst);
    }

    /// Search from `header` until its hash meets the target encoded in
    /// `header.bits`.
    ///
    /// `iterations` counts rejected candidates, so a header that already
    /// satisfies its target returns with zero iterations.
    pub fn mine(&self, header: BlockHeader) -> Result<MiningResult, CompactError> {
        self.mine_with_progress(header, PROGRESS_INTERVAL, |iterations, candidate| {
            debug!(
                "genesis search: {} iterations, time {} nonce {}",
                iterations, candidate.time, candidate.nonce
            );
        })
    }

    /// Mine with progress callback
    pub fn mine_with_progress<F>(
        &self,
        mut header: BlockHeader,
        progress_interval: u64,
        mut callback: F,
    ) -> Result<MiningResult, CompactError>
    where
        F: FnMut(u64, &BlockHeader),
    {
        let target = header.target()?;
        let mut iterations = 0u64;

        loop {
            if self.stop_signal.load(Ordering::SeqCst) {
                return Ok(MiningResult::Interrupted { header, iterations });
            }

            if target.is_met_by(&header.hash()) {
                return Ok(MiningResult::Success { header, iterations });
            }

            header.nonce = header.nonce.wrapping_add(1);
            iterations += 1;

            if header.nonce == 0 {
                warn!("nonce wrapped, incrementing time to {}", header.time.wrapping_add(1));
                header.time = header.time.wrapping_add(1);
            }

            if progress_interval > 0 && iterations % progress_interval == 0 {
                callback(iterations, &header);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Hash;

    fn easy_header(nonce: u32) -> BlockHeader {
        BlockHeader::new(1, Hash::zero(), Hash::zero(), 1_600_000_000, 0x207fffff, nonce)
    }

    #[test]
    fn test_mined_header_meets_target() {
        let miner = Miner::new();
        match miner.mine(easy_header(0)).unwrap() {
            MiningResult::Success { header, .. } => {
                assert!(header.meets_target().unwrap());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let miner = Miner::new();
        let a = miner.mine(easy_header(0)).unwrap();
        let b = miner.mine(easy_header(0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_miner_stop_signal() {
        let miner = Miner::new();
        let signal = miner.stop_signal();

        assert!(!signal.load(Ordering::SeqCst));

        miner.stop();
        assert!(signal.load(Ordering::SeqCst));

        let result = miner.mine(easy_header(0)).unwrap();
        assert_eq!(
            result,
            MiningResult::Interrupted { header: easy_header(0), iterations: 0 }
        );

        miner.reset();
        assert!(!signal.load(Ordering::SeqCst));
    }

    #[test]
    fn test_progress_callback_fires() {
        let miner = Miner::new();
        // Impossible target: a zero mantissa never admits a non-zero hash
        let header = BlockHeader { bits: 0x03000000, ..easy_header(0) };
        let stop = miner.stop_signal();
        let mut reports = Vec::new();
        let result = miner
            .mine_with_progress(header, 10, |iterations, _| {
                reports.push(iterations);
                if reports.len() == 3 {
                    stop.store(true, Ordering::SeqCst);
                }
            })
            .unwrap();
        assert_eq!(reports, vec![10, 20, 30]);
        assert_eq!(result.iterations(), 30);
    }

    #[test]
    fn test_invalid_bits_rejected_before_search() {
        let miner = Miner::new();
        let header = BlockHeader { bits: 0x04923456, ..easy_header(0) };
        assert_eq!(miner.mine(header), Err(CompactError::Negative(0x04923456)));
    }
}
