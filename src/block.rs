//! Block identity

use crate::encoding::encode_header;
use crate::hash::{double_sha256, Hash};
use crate::types::*;

/// Block hash: double SHA-256 of the 80-byte serialized header.
///
/// Transactions only contribute through the header's merkle root.
pub fn block_hash(header: &BlockHeader) -> Hash {
    double_sha256(&encode_header(header))
}

/// A genesis header has no predecessor.
pub fn has_null_parent(header: &BlockHeader) -> bool {
    header.prev_block_hash.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitcoin_genesis_header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_block_hash: Hash::ZERO,
            merkle_root: Hash::from_display_hex(
                "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
            )
            .unwrap(),
            timestamp: 1231006505,
            bits: 0x1d00ffff,
            nonce: 2083236893,
        }
    }

    #[test]
    fn test_block_hash_bitcoin_genesis() {
        assert_eq!(
            block_hash(&bitcoin_genesis_header()).to_display_hex(),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
    }

    #[test]
    fn test_block_hash_different_headers() {
        let header1 = bitcoin_genesis_header();
        let mut header2 = header1.clone();
        header2.nonce += 1;
        assert_ne!(block_hash(&header1), block_hash(&header2));
    }

    #[test]
    fn test_has_null_parent() {
        let mut header = bitcoin_genesis_header();
        assert!(has_null_parent(&header));
        header.prev_block_hash = Hash::from_bytes([1; 32]);
        assert!(!has_null_parent(&header));
    }
}
