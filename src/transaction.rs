//! Transaction identity and coinbase detection

use crate::encoding::encode_transaction;
use crate::hash::{double_sha256, Hash};
use crate::types::*;

/// Transaction hash: double SHA-256 of the canonical encoding.
///
/// This is also the merkle leaf for the transaction.
pub fn transaction_hash(tx: &Transaction) -> Hash {
    double_sha256(&encode_transaction(tx))
}

/// A coinbase transaction has exactly one input, spending the null outpoint.
pub fn is_coinbase(tx: &Transaction) -> bool {
    tx.inputs.len() == 1 && tx.inputs[0].prevout.is_null()
}
