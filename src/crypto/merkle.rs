//! Merkle tree implementation
//!
//! Used for computing transaction merkle roots in blocks.

use super::{Hash, hash_pair};

/// Compute the merkle root of a list of hashes
///
/// If the list is empty, returns zero hash.
/// A single element is its own root.
/// If odd number of elements, duplicates the last element.
pub fn compute_merkle_root(hashes: &[Hash]) -> Hash {
    let mut current_level: Vec<Hash> = match hashes {
        [] => return Hash::zero(),
        [only] => return *only,
        _ => hashes.to_vec(),
    };

    while current_level.len() > 1 {
        if current_level.len() % 2 == 1 {
            let last = current_level[current_level.len() - 1];
            current_level.push(last);
        }

        current_level = current_level
            .chunks(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }

    current_level[0]
}
