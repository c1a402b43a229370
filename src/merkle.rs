//! Merkle root over a block's transactions
//!
//! Leaves are transaction hashes. Each level pairs adjacent hashes and
//! double-hashes the 64-byte concatenation, duplicating the last hash when
//! the level has an odd count. A single leaf is its own root.

use crate::error::{GenesisError, Result};
use crate::hash::{double_sha256_pair, Hash};
use crate::transaction::transaction_hash;
use crate::types::Transaction;

/// Merkle root of `transactions` in block order
pub fn merkle_root(transactions: &[Transaction]) -> Result<Hash> {
    let hashes: Vec<Hash> = transactions.iter().map(transaction_hash).collect();
    merkle_root_from_hashes(&hashes)
}

/// Merkle root of precomputed leaf hashes
pub fn merkle_root_from_hashes(leaves: &[Hash]) -> Result<Hash> {
    if leaves.is_empty() {
        return Err(GenesisError::EmptyMerkleTree);
    }

    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                double_sha256_pair(left, right)
            })
            .collect();
    }

    Ok(level[0])
}
