//! Wire-format and genesis constants

/// Serialized block header size: version, two hashes, timestamp, bits, nonce
pub const BLOCK_HEADER_SIZE: usize = 4 + 32 + 32 + 4 + 4 + 4;

/// Output index of the null outpoint spent by a coinbase input
pub const NULL_OUTPOINT_INDEX: u32 = 0xffffffff;

/// Sequence number for final transaction
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// Smallest currency units per coin
pub const UNITS_PER_COIN: i64 = 100_000_000;

/// Value of the genesis coinbase output: 50 coins
pub const GENESIS_SUBSIDY: i64 = 50 * UNITS_PER_COIN;

/// Compact size marker for a 2-byte value
pub const COMPACT_SIZE_U16: u8 = 0xfd;

/// Compact size marker for a 4-byte value
pub const COMPACT_SIZE_U32: u8 = 0xfe;

/// Compact size marker for an 8-byte value
pub const COMPACT_SIZE_U64: u8 = 0xff;
