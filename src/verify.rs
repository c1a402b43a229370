//! Genesis self-consistency checks
//!
//! Recomputes the merkle root and block hash of a genesis definition and
//! compares them with the values stored in its header and its pinned
//! constants. A failure means a hardcoded byte was transcribed wrongly; no
//! caller can recover from it, so node startup should abort.

use crate::block::{block_hash, has_null_parent};
use crate::error::{GenesisError, GenesisField, Result};
use crate::genesis::{all_genesis, NetworkGenesis};
use crate::hash::Hash;
use crate::merkle::merkle_root;
use crate::network::Network;
use crate::transaction::is_coinbase;
use tracing::{debug, error, info};

fn ensure_equal(network: Network, field: GenesisField, expected: Hash, actual: Hash) -> Result<()> {
    if expected != actual {
        error!(
            network = %network,
            field = %field,
            expected = %expected,
            actual = %actual,
            "genesis constant mismatch"
        );
        return Err(GenesisError::GenesisMismatch {
            network,
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_structure(genesis: &NetworkGenesis) -> Result<()> {
    let transactions = &genesis.block.transactions;
    let reason = if transactions.len() != 1 {
        format!("expected exactly one transaction, found {}", transactions.len())
    } else if !is_coinbase(&transactions[0]) {
        "first transaction is not a coinbase".to_string()
    } else {
        return Ok(());
    };
    error!(network = %genesis.network, %reason, "malformed genesis block");
    Err(GenesisError::InvalidGenesisBlock {
        network: genesis.network,
        reason,
    })
}

/// Verify one network's genesis definition.
///
/// Checks, in order: a single coinbase transaction, the all-zero parent,
/// the header merkle root against the recomputed root, the pinned merkle
/// root, and finally the pinned block hash against the header hash.
pub fn verify(genesis: &NetworkGenesis) -> Result<()> {
    let network = genesis.network;
    let header = &genesis.block.header;

    check_structure(genesis)?;

    if !has_null_parent(header) {
        ensure_equal(network, GenesisField::PrevBlockHash, Hash::ZERO, header.prev_block_hash)?;
    }

    let computed_root = merkle_root(&genesis.block.transactions)?;
    ensure_equal(network, GenesisField::MerkleRoot, header.merkle_root, computed_root)?;
    ensure_equal(
        network,
        GenesisField::PinnedMerkleRoot,
        genesis.expected_merkle_root,
        computed_root,
    )?;

    let computed_hash = block_hash(header);
    ensure_equal(network, GenesisField::BlockHash, genesis.expected_hash, computed_hash)?;

    debug!(network = %network, hash = %computed_hash, "genesis block verified");
    Ok(())
}

/// Verify every registered network, stopping at the first failure.
pub fn verify_all() -> Result<()> {
    let mut verified = 0usize;
    for genesis in all_genesis() {
        verify(genesis)?;
        verified += 1;
    }
    info!(networks = verified, "all genesis blocks verified");
    Ok(())
}
