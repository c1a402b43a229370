//! Double SHA-256 digest and the hash identifier type
//!
//! A [`Hash`] always holds bytes in storage order, the order the digest
//! produces them and the order they are written on the wire. The reversed
//! order used by block explorers and RPC output only exists inside
//! [`Hash::to_display_hex`] and [`Hash::from_display_hex`].

use crate::error::{GenesisError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Size of a hash in bytes
pub const HASH_SIZE: usize = 32;

/// 256-bit identifier in storage byte order
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, std::hash::Hash)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// The all-zero hash, used as the previous-block hash of a genesis block
    /// and as the outpoint hash of a coinbase input.
    pub const ZERO: Hash = Hash([0u8; HASH_SIZE]);

    /// Wrap bytes that are already in storage order.
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_SIZE]
    }

    /// Hex string in display order (bytes reversed).
    ///
    /// ```
    /// use genesis_proof::hash::Hash;
    ///
    /// let mut bytes = [0u8; 32];
    /// bytes[0] = 0x01;
    /// let hash = Hash::from_bytes(bytes);
    /// assert!(hash.to_display_hex().ends_with("01"));
    /// ```
    pub fn to_display_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Parse a display-order hex string back into storage order.
    ///
    /// Fails with [`GenesisError::MalformedHash`] unless the input is exactly
    /// 64 hex characters.
    pub fn from_display_hex(s: &str) -> Result<Self> {
        if s.len() != HASH_SIZE * 2 {
            return Err(GenesisError::MalformedHash(format!(
                "expected {} hex characters, got {}",
                HASH_SIZE * 2,
                s.len()
            )));
        }
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| GenesisError::MalformedHash(e.to_string()))?;
        bytes.reverse();
        Ok(Hash(bytes))
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_display_hex())
    }
}

impl FromStr for Hash {
    type Err = GenesisError;

    fn from_str(s: &str) -> Result<Self> {
        Hash::from_display_hex(s)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_display_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_display_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// SHA256(SHA256(data))
pub fn double_sha256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut hash = [0u8; HASH_SIZE];
    hash.copy_from_slice(&second);
    Hash(hash)
}

/// Double SHA-256 over the concatenation `left || right`, the interior node
/// rule of the merkle tree.
pub fn double_sha256_pair(left: &Hash, right: &Hash) -> Hash {
    let mut combined = [0u8; HASH_SIZE * 2];
    combined[..HASH_SIZE].copy_from_slice(&left.0);
    combined[HASH_SIZE..].copy_from_slice(&right.0);
    double_sha256(&combined)
}
