//! Canonical binary encoding of transactions, headers and blocks
//!
//! Integers are fixed width little-endian. Scripts and element lists are
//! prefixed with a compact size count. Field order follows the type
//! definitions in [`crate::types`] and must not change: the encoded header
//! is the block hash input and the encoded transaction is the merkle leaf
//! input.

use crate::constants::*;
use crate::error::{GenesisError, Result};
use crate::hash::{Hash, HASH_SIZE};
use crate::types::*;

/// Smallest possible encoded input: outpoint, empty script, sequence
const MIN_INPUT_SIZE: usize = HASH_SIZE + 4 + 1 + 4;

/// Smallest possible encoded output: value, empty script
const MIN_OUTPUT_SIZE: usize = 8 + 1;

/// Smallest possible encoded transaction: version, two empty lists, lock time
const MIN_TRANSACTION_SIZE: usize = 4 + 1 + 1 + 4;

fn take<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8]> {
    if input.len() < n {
        return Err(GenesisError::TruncatedInput {
            needed: n,
            remaining: input.len(),
        });
    }
    let (head, tail) = input.split_at(n);
    *input = tail;
    Ok(head)
}

fn read_array<const N: usize>(input: &mut &[u8]) -> Result<[u8; N]> {
    let bytes = take(input, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

fn read_u8(input: &mut &[u8]) -> Result<u8> {
    Ok(take(input, 1)?[0])
}

fn read_u32_le(input: &mut &[u8]) -> Result<u32> {
    Ok(u32::from_le_bytes(read_array(input)?))
}

fn read_i32_le(input: &mut &[u8]) -> Result<i32> {
    Ok(i32::from_le_bytes(read_array(input)?))
}

fn read_i64_le(input: &mut &[u8]) -> Result<i64> {
    Ok(i64::from_le_bytes(read_array(input)?))
}

fn read_hash(input: &mut &[u8]) -> Result<Hash> {
    Ok(Hash::from_bytes(read_array(input)?))
}

/// Read a compact size count and check that the remaining input can hold
/// `count` elements of at least `min_element_size` bytes each.
fn read_count(input: &mut &[u8], min_element_size: usize) -> Result<usize> {
    let count = read_compact_size(input)?;
    let count = usize::try_from(count)
        .map_err(|_| GenesisError::MalformedVarInt(format!("count {} exceeds usize", count)))?;
    let needed = count.saturating_mul(min_element_size);
    if needed > input.len() {
        return Err(GenesisError::TruncatedInput {
            needed,
            remaining: input.len(),
        });
    }
    Ok(count)
}

fn read_bytes(input: &mut &[u8]) -> Result<ByteString> {
    let len = read_count(input, 1)?;
    Ok(take(input, len)?.to_vec())
}

fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

/// Append a compact size integer
pub fn write_compact_size(out: &mut Vec<u8>, value: u64) {
    if value < COMPACT_SIZE_U16 as u64 {
        out.push(value as u8);
    } else if value <= 0xffff {
        out.push(COMPACT_SIZE_U16);
        out.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= 0xffffffff {
        out.push(COMPACT_SIZE_U32);
        out.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        out.push(COMPACT_SIZE_U64);
        out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Encoded width of `value` as a compact size
pub fn compact_size_len(value: u64) -> usize {
    if value < COMPACT_SIZE_U16 as u64 {
        1
    } else if value <= 0xffff {
        3
    } else if value <= 0xffffffff {
        5
    } else {
        9
    }
}

/// Read a compact size integer, rejecting non-minimal encodings
pub fn read_compact_size(input: &mut &[u8]) -> Result<u64> {
    let marker = read_u8(input)?;
    let (value, min) = match marker {
        COMPACT_SIZE_U16 => (u16::from_le_bytes(read_array(input)?) as u64, 0xfd),
        COMPACT_SIZE_U32 => (u32::from_le_bytes(read_array(input)?) as u64, 0x1_0000),
        COMPACT_SIZE_U64 => (u64::from_le_bytes(read_array(input)?), 0x1_0000_0000),
        small => return Ok(small as u64),
    };
    if value < min {
        return Err(GenesisError::MalformedVarInt(format!(
            "non-canonical encoding: marker {:#04x} with value {}",
            marker, value
        )));
    }
    Ok(value)
}

fn write_input(out: &mut Vec<u8>, input: &TransactionInput) {
    out.extend_from_slice(input.prevout.hash.as_bytes());
    out.extend_from_slice(&input.prevout.index.to_le_bytes());
    write_bytes(out, &input.script_sig);
    out.extend_from_slice(&input.sequence.to_le_bytes());
}

fn write_output(out: &mut Vec<u8>, output: &TransactionOutput) {
    out.extend_from_slice(&output.value.to_le_bytes());
    write_bytes(out, &output.script_pubkey);
}

/// Append the canonical encoding of `tx`
pub fn write_transaction(out: &mut Vec<u8>, tx: &Transaction) {
    out.extend_from_slice(&tx.version.to_le_bytes());
    write_compact_size(out, tx.inputs.len() as u64);
    for input in &tx.inputs {
        write_input(out, input);
    }
    write_compact_size(out, tx.outputs.len() as u64);
    for output in &tx.outputs {
        write_output(out, output);
    }
    out.extend_from_slice(&tx.lock_time.to_le_bytes());
}

/// Canonical encoding of a transaction
pub fn encode_transaction(tx: &Transaction) -> Vec<u8> {
    let mut out = Vec::with_capacity(transaction_size(tx));
    write_transaction(&mut out, tx);
    out
}

/// Encoded size of a transaction in bytes
pub fn transaction_size(tx: &Transaction) -> usize {
    let inputs: usize = tx
        .inputs
        .iter()
        .map(|i| {
            HASH_SIZE + 4 + compact_size_len(i.script_sig.len() as u64) + i.script_sig.len() + 4
        })
        .sum();
    let outputs: usize = tx
        .outputs
        .iter()
        .map(|o| 8 + compact_size_len(o.script_pubkey.len() as u64) + o.script_pubkey.len())
        .sum();
    4 + compact_size_len(tx.inputs.len() as u64)
        + inputs
        + compact_size_len(tx.outputs.len() as u64)
        + outputs
        + 4
}

/// Canonical encoding of a block header, always [`BLOCK_HEADER_SIZE`] bytes
pub fn encode_header(header: &BlockHeader) -> Vec<u8> {
    let mut out = Vec::with_capacity(BLOCK_HEADER_SIZE);
    out.extend_from_slice(&header.version.to_le_bytes());
    out.extend_from_slice(header.prev_block_hash.as_bytes());
    out.extend_from_slice(header.merkle_root.as_bytes());
    out.extend_from_slice(&header.timestamp.to_le_bytes());
    out.extend_from_slice(&header.bits.to_le_bytes());
    out.extend_from_slice(&header.nonce.to_le_bytes());
    out
}

/// Header followed by the compact size transaction count and each transaction
pub fn encode_block(block: &Block) -> Vec<u8> {
    let mut out = encode_header(&block.header);
    write_compact_size(&mut out, block.transactions.len() as u64);
    for tx in &block.transactions {
        write_transaction(&mut out, tx);
    }
    out
}

fn read_input(input: &mut &[u8]) -> Result<TransactionInput> {
    let hash = read_hash(input)?;
    let index = read_u32_le(input)?;
    let script_sig = read_bytes(input)?;
    let sequence = read_u32_le(input)?;
    Ok(TransactionInput {
        prevout: OutPoint { hash, index },
        script_sig,
        sequence,
    })
}

fn read_output(input: &mut &[u8]) -> Result<TransactionOutput> {
    let value = read_i64_le(input)?;
    let script_pubkey = read_bytes(input)?;
    Ok(TransactionOutput {
        value,
        script_pubkey,
    })
}

/// Read one transaction from the front of `input`, advancing it
pub fn read_transaction(input: &mut &[u8]) -> Result<Transaction> {
    let version = read_i32_le(input)?;

    let input_count = read_count(input, MIN_INPUT_SIZE)?;
    let mut inputs = Vec::with_capacity(input_count);
    for _ in 0..input_count {
        inputs.push(read_input(input)?);
    }

    let output_count = read_count(input, MIN_OUTPUT_SIZE)?;
    let mut outputs = Vec::with_capacity(output_count);
    for _ in 0..output_count {
        outputs.push(read_output(input)?);
    }

    let lock_time = read_u32_le(input)?;
    Ok(Transaction {
        version,
        inputs,
        outputs,
        lock_time,
    })
}

/// Read one block header from the front of `input`, advancing it
pub fn read_header(input: &mut &[u8]) -> Result<BlockHeader> {
    Ok(BlockHeader {
        version: read_i32_le(input)?,
        prev_block_hash: read_hash(input)?,
        merkle_root: read_hash(input)?,
        timestamp: read_u32_le(input)?,
        bits: read_u32_le(input)?,
        nonce: read_u32_le(input)?,
    })
}

fn ensure_consumed(input: &[u8]) -> Result<()> {
    if !input.is_empty() {
        return Err(GenesisError::TrailingBytes(input.len()));
    }
    Ok(())
}

/// Decode exactly one transaction
pub fn decode_transaction(bytes: &[u8]) -> Result<Transaction> {
    let mut input = bytes;
    let tx = read_transaction(&mut input)?;
    ensure_consumed(input)?;
    Ok(tx)
}

/// Decode exactly one block header
pub fn decode_header(bytes: &[u8]) -> Result<BlockHeader> {
    let mut input = bytes;
    let header = read_header(&mut input)?;
    ensure_consumed(input)?;
    Ok(header)
}

/// Decode exactly one block
pub fn decode_block(bytes: &[u8]) -> Result<Block> {
    let mut input = bytes;
    let header = read_header(&mut input)?;
    let tx_count = read_count(&mut input, MIN_TRANSACTION_SIZE)?;
    let mut transactions = Vec::with_capacity(tx_count);
    for _ in 0..tx_count {
        transactions.push(read_transaction(&mut input)?);
    }
    ensure_consumed(input)?;
    Ok(Block {
        header,
        transactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_varint(value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        write_compact_size(&mut out, value);
        out
    }

    fn create_valid_transaction() -> Transaction {
        Transaction {
            version: 1,
            inputs: vec![TransactionInput {
                prevout: OutPoint {
                    hash: Hash::from_bytes([1; 32]),
                    index: 0,
                },
                script_sig: vec![0x51],
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![TransactionOutput {
                value: 1000,
                script_pubkey: vec![0x51],
            }],
            lock_time: 0,
        }
    }

    fn create_valid_block_header() -> BlockHeader {
        BlockHeader {
            version: 1,
            prev_block_hash: Hash::ZERO,
            merkle_root: Hash::from_bytes([0x22; 32]),
            timestamp: 1231006505,
            bits: 0x1d00ffff,
            nonce: 2083236893,
        }
    }

    #[test]
    fn test_encode_varint_small() {
        assert_eq!(encode_varint(0), vec![0x00]);
        assert_eq!(encode_varint(0xfc), vec![0xfc]);
    }

    #[test]
    fn test_encode_varint_medium() {
        assert_eq!(encode_varint(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(encode_varint(0xffff), vec![0xfd, 0xff, 0xff]);
    }

    #[test]
    fn test_encode_varint_large() {
        assert_eq!(encode_varint(0x10000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(encode_varint(0xffffffff), vec![0xfe, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_encode_varint_huge() {
        let encoded = encode_varint(0x1_0000_0000);
        assert_eq!(encoded.len(), 9);
        assert_eq!(encoded[0], 0xff);
    }

    #[test]
    fn test_compact_size_len_matches_encoding() {
        for value in [0u64, 0xfc, 0xfd, 0xffff, 0x10000, 0xffffffff, 0x1_0000_0000, u64::MAX] {
            assert_eq!(compact_size_len(value), encode_varint(value).len());
        }
    }

    #[test]
    fn test_read_compact_size_round_trip() {
        for value in [0u64, 1, 0xfc, 0xfd, 0xffff, 0x10000, 0xffffffff, 0x1_0000_0000, u64::MAX] {
            let encoded = encode_varint(value);
            let mut input = encoded.as_slice();
            assert_eq!(read_compact_size(&mut input).unwrap(), value);
            assert!(input.is_empty());
        }
    }

    #[test]
    fn test_read_compact_size_non_canonical() {
        let mut input: &[u8] = &[0xfd, 0x10, 0x00];
        assert!(matches!(
            read_compact_size(&mut input),
            Err(GenesisError::MalformedVarInt(_))
        ));

        let mut input: &[u8] = &[0xfe, 0xff, 0xff, 0x00, 0x00];
        assert!(matches!(
            read_compact_size(&mut input),
            Err(GenesisError::MalformedVarInt(_))
        ));

        let mut input: &[u8] = &[0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00];
        assert!(matches!(
            read_compact_size(&mut input),
            Err(GenesisError::MalformedVarInt(_))
        ));
    }

    #[test]
    fn test_read_compact_size_truncated() {
        let mut input: &[u8] = &[0xfe, 0x01];
        assert_eq!(
            read_compact_size(&mut input),
            Err(GenesisError::TruncatedInput {
                needed: 4,
                remaining: 1
            })
        );
    }

    #[test]
    fn test_encode_header_layout() {
        let header = create_valid_block_header();
        let encoded = encode_header(&header);
        assert_eq!(encoded.len(), BLOCK_HEADER_SIZE);
        assert_eq!(&encoded[0..4], &[1, 0, 0, 0]);
        assert_eq!(&encoded[4..36], &[0u8; 32]);
        assert_eq!(&encoded[36..68], &[0x22u8; 32]);
        assert_eq!(&encoded[68..72], &1231006505u32.to_le_bytes());
        assert_eq!(&encoded[72..76], &[0xff, 0xff, 0x00, 0x1d]);
        assert_eq!(&encoded[76..80], &2083236893u32.to_le_bytes());
    }

    #[test]
    fn test_encode_transaction_layout() {
        let tx = create_valid_transaction();
        let encoded = encode_transaction(&tx);
        let expected = hex::decode(
            "01000000010101010101010101010101010101010101010101010101010101010101010101\
             000000000151ffffffff01e803000000000000015100000000",
        )
        .unwrap();
        assert_eq!(encoded, expected);
        assert_eq!(transaction_size(&tx), encoded.len());
    }

    #[test]
    fn test_decode_transaction_round_trip() {
        let tx = create_valid_transaction();
        let decoded = decode_transaction(&encode_transaction(&tx)).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn test_decode_header_round_trip() {
        let header = create_valid_block_header();
        assert_eq!(decode_header(&encode_header(&header)).unwrap(), header);
    }

    #[test]
    fn test_decode_block_round_trip() {
        let block = Block {
            header: create_valid_block_header(),
            transactions: vec![create_valid_transaction(), create_valid_transaction()],
        };
        let encoded = encode_block(&block);
        assert_eq!(
            encoded.len(),
            BLOCK_HEADER_SIZE + 1 + 2 * transaction_size(&block.transactions[0])
        );
        assert_eq!(decode_block(&encoded).unwrap(), block);
    }

    #[test]
    fn test_decode_header_truncated() {
        let encoded = encode_header(&create_valid_block_header());
        let result = decode_header(&encoded[..79]);
        assert_eq!(
            result,
            Err(GenesisError::TruncatedInput {
                needed: 4,
                remaining: 3
            })
        );
    }

    #[test]
    fn test_decode_transaction_trailing_bytes() {
        let mut encoded = encode_transaction(&create_valid_transaction());
        encoded.push(0x00);
        assert_eq!(
            decode_transaction(&encoded),
            Err(GenesisError::TrailingBytes(1))
        );
    }

    #[test]
    fn test_decode_transaction_oversized_input_count() {
        // version, then a count claiming 0xffff inputs with nothing behind it
        let bytes = [0x01, 0x00, 0x00, 0x00, 0xfd, 0xff, 0xff];
        assert!(matches!(
            decode_transaction(&bytes),
            Err(GenesisError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_decode_transaction_script_length_past_end() {
        let mut encoded = encode_transaction(&create_valid_transaction());
        // script_sig length byte sits after version, count, outpoint
        let script_len_offset = 4 + 1 + 32 + 4;
        encoded[script_len_offset] = 0x50;
        assert!(matches!(
            decode_transaction(&encoded),
            Err(GenesisError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(
            decode_transaction(&[]),
            Err(GenesisError::TruncatedInput {
                needed: 4,
                remaining: 0
            })
        );
    }
}
