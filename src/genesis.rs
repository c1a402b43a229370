//! Hardcoded genesis blocks
//!
//! Every network's genesis block carries the same coinbase transaction and
//! therefore the same merkle root. Networks differ only in the header's
//! timestamp, bits and nonce. The expected block hash and merkle root of each
//! network are pinned separately, in storage byte order, so that
//! [`crate::verify`] can recompute them and catch a mistyped byte.

use crate::constants::*;
use crate::error::Result;
use crate::hash::Hash;
use crate::network::Network;
use crate::types::*;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Genesis block of one network together with its independently pinned hashes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkGenesis {
    pub network: Network,
    pub block: Block,
    pub expected_hash: Hash,
    pub expected_merkle_root: Hash,
}

/// Coinbase input data: "The Times 21/Apr/2018 'We No Longer Need' Nuclear
/// or Missile Tests, North Korean Leader Says"
const GENESIS_COINBASE_SCRIPT: [u8; 92] = [
    0x54, 0x68, 0x65, 0x20, 0x54, 0x69, 0x6d, 0x65, // |The Time|
    0x73, 0x20, 0x32, 0x31, 0x2f, 0x41, 0x70, 0x72, // |s 21/Apr|
    0x2f, 0x32, 0x30, 0x31, 0x38, 0x20, 0x27, 0x57, // |/2018 'W|
    0x65, 0x20, 0x4e, 0x6f, 0x20, 0x4c, 0x6f, 0x6e, // |e No Lon|
    0x67, 0x65, 0x72, 0x20, 0x4e, 0x65, 0x65, 0x64, // |ger Need|
    0x27, 0x20, 0x4e, 0x75, 0x63, 0x6c, 0x65, 0x61, // |' Nuclea|
    0x72, 0x20, 0x6f, 0x72, 0x20, 0x4d, 0x69, 0x73, // |r or Mis|
    0x73, 0x69, 0x6c, 0x65, 0x20, 0x54, 0x65, 0x73, // |sile Tes|
    0x74, 0x73, 0x2c, 0x20, 0x4e, 0x6f, 0x72, 0x74, // |ts, Nort|
    0x68, 0x20, 0x4b, 0x6f, 0x72, 0x65, 0x61, 0x6e, // |h Korean|
    0x20, 0x4c, 0x65, 0x61, 0x64, 0x65, 0x72, 0x20, // | Leader |
    0x53, 0x61, 0x79, 0x73, // |Says|
];

/// Pay-to-pubkey script of the genesis coinbase output
const GENESIS_OUTPUT_SCRIPT: [u8; 67] = [
    0x41, 0x04, 0x67, 0x8a, 0xfd, 0xb0, 0xfe, 0x55, //
    0x48, 0x27, 0x19, 0x67, 0xf1, 0xa6, 0x71, 0x30, //
    0xb7, 0x10, 0x5c, 0xd6, 0xa8, 0x28, 0xe0, 0x39, //
    0x09, 0xa6, 0x79, 0x62, 0xe0, 0xea, 0x1f, 0x61, //
    0xde, 0xb6, 0x49, 0xf6, 0xbc, 0x3f, 0x4c, 0xef, //
    0x38, 0xc4, 0xf3, 0x55, 0x04, 0xe5, 0x1e, 0xc1, //
    0x12, 0xde, 0x5c, 0x38, 0x4d, 0xf7, 0xba, 0x0b, //
    0x8d, 0x57, 0x8a, 0x4c, 0x70, 0x2b, 0x6b, 0xf1, //
    0x1d, 0x5f, 0xac, // OP_CHECKSIG
];

/// Merkle root shared by every genesis block, the hash of the coinbase
/// transaction.
/// 33b9e0045308176437f05b6c1cbeb8aee73039e6ab4dca19df55c6239a9b3923
pub const GENESIS_MERKLE_ROOT: Hash = Hash::from_bytes([
    0x23, 0x39, 0x9b, 0x9a, 0x23, 0xc6, 0x55, 0xdf,
    0x19, 0xca, 0x4d, 0xab, 0xe6, 0x39, 0x30, 0xe7,
    0xae, 0xb8, 0xbe, 0x1c, 0x6c, 0x5b, 0xf0, 0x37,
    0x64, 0x17, 0x08, 0x53, 0x04, 0xe0, 0xb9, 0x33,
]);

/// d091d84284420118b25d913c4fa1f5582af5757e1e58d9f4c89bb2f90f63e36b
pub const MAINNET_GENESIS_HASH: Hash = Hash::from_bytes([
    0x6b, 0xe3, 0x63, 0x0f, 0xf9, 0xb2, 0x9b, 0xc8,
    0xf4, 0xd9, 0x58, 0x1e, 0x7e, 0x75, 0xf5, 0x2a,
    0x58, 0xf5, 0xa1, 0x4f, 0x3c, 0x91, 0x5d, 0xb2,
    0x18, 0x01, 0x42, 0x84, 0x42, 0xd8, 0x91, 0xd0,
]);

/// Same header as the main network, so the same hash.
pub const REGTEST_GENESIS_HASH: Hash = Hash::from_bytes([
    0x6b, 0xe3, 0x63, 0x0f, 0xf9, 0xb2, 0x9b, 0xc8,
    0xf4, 0xd9, 0x58, 0x1e, 0x7e, 0x75, 0xf5, 0x2a,
    0x58, 0xf5, 0xa1, 0x4f, 0x3c, 0x91, 0x5d, 0xb2,
    0x18, 0x01, 0x42, 0x84, 0x42, 0xd8, 0x91, 0xd0,
]);

/// 2b92998b4ccef2bf154b7388a486a632035c9b1e09f25be9e6bff536f946a6bf
pub const TESTNET3_GENESIS_HASH: Hash = Hash::from_bytes([
    0xbf, 0xa6, 0x46, 0xf9, 0x36, 0xf5, 0xbf, 0xe6,
    0xe9, 0x5b, 0xf2, 0x09, 0x1e, 0x9b, 0x5c, 0x03,
    0x32, 0xa6, 0x86, 0xa4, 0x88, 0x73, 0x4b, 0x15,
    0xbf, 0xf2, 0xce, 0x4c, 0x8b, 0x99, 0x92, 0x2b,
]);

/// 0dc876d374b8ee826ded514b1a0ccb5efdc140ee35948320cffb293cff3e68af
pub const SIMNET_GENESIS_HASH: Hash = Hash::from_bytes([
    0xaf, 0x68, 0x3e, 0xff, 0x3c, 0x29, 0xfb, 0xcf,
    0x20, 0x83, 0x94, 0x35, 0xee, 0x40, 0xc1, 0xfd,
    0x5e, 0xcb, 0x0c, 0x1a, 0x4b, 0x51, 0xed, 0x6d,
    0x82, 0xee, 0xb8, 0x74, 0xd3, 0x76, 0xc8, 0x0d,
]);

/// The coinbase transaction shared by all genesis blocks
pub static GENESIS_COINBASE_TX: Lazy<Transaction> = Lazy::new(|| Transaction {
    version: 1,
    inputs: vec![TransactionInput {
        prevout: OutPoint::null(),
        script_sig: GENESIS_COINBASE_SCRIPT.to_vec(),
        sequence: SEQUENCE_FINAL,
    }],
    outputs: vec![TransactionOutput {
        value: GENESIS_SUBSIDY,
        script_pubkey: GENESIS_OUTPUT_SCRIPT.to_vec(),
    }],
    lock_time: 0,
});

fn genesis_block(timestamp: u32, bits: u32, nonce: u32) -> Block {
    Block {
        header: BlockHeader {
            version: 1,
            prev_block_hash: Hash::ZERO,
            merkle_root: GENESIS_MERKLE_ROOT,
            timestamp,
            bits,
            nonce,
        },
        transactions: vec![(*GENESIS_COINBASE_TX).clone()],
    }
}

static MAINNET_GENESIS: Lazy<NetworkGenesis> = Lazy::new(|| NetworkGenesis {
    network: Network::MainNet,
    // 2018-04-21 23:11:48 UTC
    block: genesis_block(1524352308, 0x1e0ffff0, 0x940988cf),
    expected_hash: MAINNET_GENESIS_HASH,
    expected_merkle_root: GENESIS_MERKLE_ROOT,
});

static REGTEST_GENESIS: Lazy<NetworkGenesis> = Lazy::new(|| NetworkGenesis {
    network: Network::RegTest,
    block: genesis_block(1524352308, 0x1e0ffff0, 0x940988cf),
    expected_hash: REGTEST_GENESIS_HASH,
    expected_merkle_root: GENESIS_MERKLE_ROOT,
});

static TESTNET3_GENESIS: Lazy<NetworkGenesis> = Lazy::new(|| NetworkGenesis {
    network: Network::TestNet3,
    // 2011-02-02 23:16:42 UTC
    block: genesis_block(1296688602, 0x1d00ffff, 0x18aea41a),
    expected_hash: TESTNET3_GENESIS_HASH,
    expected_merkle_root: GENESIS_MERKLE_ROOT,
});

static SIMNET_GENESIS: Lazy<NetworkGenesis> = Lazy::new(|| NetworkGenesis {
    network: Network::SimNet,
    // 2014-05-28 15:52:37 UTC
    block: genesis_block(1401292357, 0x207fffff, 2),
    expected_hash: SIMNET_GENESIS_HASH,
    expected_merkle_root: GENESIS_MERKLE_ROOT,
});

/// Genesis definition for `network`
pub fn network_genesis(network: Network) -> &'static NetworkGenesis {
    match network {
        Network::MainNet => &*MAINNET_GENESIS,
        Network::RegTest => &*REGTEST_GENESIS,
        Network::TestNet3 => &*TESTNET3_GENESIS,
        Network::SimNet => &*SIMNET_GENESIS,
    }
}

/// Genesis definition for a network given by name
///
/// ```
/// use genesis_proof::genesis::genesis_by_name;
///
/// assert!(genesis_by_name("simnet").is_ok());
/// assert!(genesis_by_name("nonexistent").is_err());
/// ```
pub fn genesis_by_name(name: &str) -> Result<&'static NetworkGenesis> {
    Ok(network_genesis(name.parse()?))
}

pub fn get_genesis_block(network: Network) -> &'static Block {
    &network_genesis(network).block
}

pub fn get_genesis_hash(network: Network) -> Hash {
    network_genesis(network).expected_hash
}

pub fn get_genesis_merkle_root(network: Network) -> Hash {
    network_genesis(network).expected_merkle_root
}

/// Every genesis definition, in [`Network::ALL`] order
pub fn all_genesis() -> impl Iterator<Item = &'static NetworkGenesis> {
    Network::ALL.into_iter().map(network_genesis)
}
