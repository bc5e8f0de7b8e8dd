//! EIP-2718 encoding of deposit transactions.
//! Spec: <https://specs.optimism.io/protocol/deposits.html>

use alloy_primitives::{keccak256, B256};
use alloy_rlp::Encodable;

use super::DepositedTransaction;

/// EIP-2718 transaction type for deposits.
pub const DEPOSIT_TX_TYPE: u8 = 0x7E;

pub fn encode_deposit_tx(tx: &DepositedTransaction, out: &mut Vec<u8>) {
    out.reserve(1 + tx.length());
    out.push(DEPOSIT_TX_TYPE);
    Encodable::encode(tx, out);
}

#[inline]
pub fn tx_hash(tx: &DepositedTransaction) -> B256 {
    let mut buf = Vec::with_capacity(1 + tx.length());
    encode_deposit_tx(tx, &mut buf);
    keccak256(&buf)
}
