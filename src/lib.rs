//! # Genesis-Proof
//!
//! Construction and verification of the hardcoded genesis blocks of the main
//! network and its test networks.
//!
//! This crate provides pure, side-effect-free functions: the double SHA-256
//! block and transaction identifiers, the canonical binary encoding they are
//! computed over, the merkle root binding a block's transactions to its
//! header, and one immutable genesis block per network together with its
//! independently pinned hash.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: All functions are deterministic and side-effect-free
//! 2. **Single Byte Order**: Hashes are stored, hashed and compared in storage
//!    order; only [`Hash::to_display_hex`] and [`Hash::from_display_hex`]
//!    reverse them
//! 3. **Exact Version Pinning**: Consensus-critical dependencies are pinned
//! 4. **Self-Checking Constants**: Every pinned genesis hash is recomputed by
//!    [`verify::verify`] in the test suite
//!
//! ## Usage
//!
//! ```rust
//! use genesis_proof::{GenesisProof, Network};
//!
//! let genesis = GenesisProof::new();
//! let block = genesis.genesis_block(Network::MainNet);
//! assert_eq!(genesis.block_hash(&block.header), genesis.genesis_hash(Network::MainNet));
//! ```

pub mod constants;
pub mod hash;
pub mod types;
pub mod encoding;
pub mod transaction;
pub mod merkle;
pub mod block;
pub mod network;
pub mod genesis;
pub mod verify;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use hash::{double_sha256, Hash, HASH_SIZE};
pub use network::Network;
pub use genesis::NetworkGenesis;
pub use error::{GenesisError, GenesisField, Result};

/// Entry point grouping the genesis operations
///
/// # Examples
///
/// ```
/// use genesis_proof::{GenesisProof, Network};
///
/// let genesis = GenesisProof::new();
/// genesis.verify_all().unwrap();
///
/// let simnet = genesis.genesis_block_by_name("simnet").unwrap();
/// assert_eq!(
///     simnet.header.merkle_root,
///     genesis.genesis_merkle_root(Network::MainNet)
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GenesisProof;

impl GenesisProof {
    /// Create a new genesis proof instance
    pub fn new() -> Self {
        Self
    }

    /// Immutable genesis block of `network`
    pub fn genesis_block(&self, network: Network) -> &'static Block {
        genesis::get_genesis_block(network)
    }

    /// Genesis block of a network given by name, failing with
    /// [`GenesisError::UnknownNetwork`]
    pub fn genesis_block_by_name(&self, name: &str) -> Result<&'static Block> {
        Ok(&genesis::genesis_by_name(name)?.block)
    }

    /// Pinned genesis block hash of `network`
    pub fn genesis_hash(&self, network: Network) -> Hash {
        genesis::get_genesis_hash(network)
    }

    /// Pinned genesis merkle root of `network`
    pub fn genesis_merkle_root(&self, network: Network) -> Hash {
        genesis::get_genesis_merkle_root(network)
    }

    /// Double SHA-256 of the serialized header
    pub fn block_hash(&self, header: &BlockHeader) -> Hash {
        block::block_hash(header)
    }

    /// Double SHA-256 of the serialized transaction
    pub fn transaction_hash(&self, tx: &Transaction) -> Hash {
        transaction::transaction_hash(tx)
    }

    /// Merkle root over `transactions`
    ///
    /// # Examples
    ///
    /// ```
    /// use genesis_proof::{GenesisProof, Network};
    ///
    /// let genesis = GenesisProof::new();
    /// let block = genesis.genesis_block(Network::TestNet3);
    /// let root = genesis.merkle_root(&block.transactions).unwrap();
    /// assert_eq!(root, genesis.transaction_hash(&block.transactions[0]));
    /// ```
    pub fn merkle_root(&self, transactions: &[Transaction]) -> Result<Hash> {
        merkle::merkle_root(transactions)
    }

    pub fn encode_transaction(&self, tx: &Transaction) -> Vec<u8> {
        encoding::encode_transaction(tx)
    }

    pub fn encode_header(&self, header: &BlockHeader) -> Vec<u8> {
        encoding::encode_header(header)
    }

    pub fn decode_transaction(&self, bytes: &[u8]) -> Result<Transaction> {
        encoding::decode_transaction(bytes)
    }

    pub fn decode_header(&self, bytes: &[u8]) -> Result<BlockHeader> {
        encoding::decode_header(bytes)
    }

    /// Recompute and compare one network's genesis constants
    pub fn verify_network(&self, network: Network) -> Result<()> {
        verify::verify(genesis::network_genesis(network))
    }

    /// Recompute and compare every network's genesis constants
    pub fn verify_all(&self) -> Result<()> {
        verify::verify_all()
    }
}
