//! Error types for genesis construction and verification

use crate::hash::Hash;
use crate::network::Network;
use std::fmt;
use thiserror::Error;

/// Header field or pinned constant compared by the genesis verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisField {
    /// Header merkle root vs. the root recomputed from the transactions
    MerkleRoot,
    /// Separately pinned merkle root constant vs. the recomputed root
    PinnedMerkleRoot,
    /// Header previous-block hash vs. the all-zero hash
    PrevBlockHash,
    /// Pinned genesis hash vs. the hash of the serialized header
    BlockHash,
}

impl fmt::Display for GenesisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GenesisField::MerkleRoot => "merkle root",
            GenesisField::PinnedMerkleRoot => "pinned merkle root",
            GenesisField::PrevBlockHash => "previous block hash",
            GenesisField::BlockHash => "block hash",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenesisError {
    #[error("Malformed hash: {0}")]
    MalformedHash(String),

    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("Malformed compact size: {0}")]
    MalformedVarInt(String),

    #[error("Trailing bytes after decoding: {0} unread")]
    TrailingBytes(usize),

    #[error("Cannot calculate merkle root for empty transaction list")]
    EmptyMerkleTree,

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Invalid genesis block for {network}: {reason}")]
    InvalidGenesisBlock { network: Network, reason: String },

    #[error("Genesis mismatch for {network} {field}: expected {expected}, computed {actual}")]
    GenesisMismatch {
        network: Network,
        field: GenesisField,
        expected: Hash,
        actual: Hash,
    },
}

pub type Result<T> = std::result::Result<T, GenesisError>;
