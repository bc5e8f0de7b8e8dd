//! The L2 view of a deposit.
//!
//! Every portal deposit becomes a type `0x7E` transaction on L2. These types let a caller predict
//! that transaction for a message it is about to send, or recover it from the
//! `TransactionDeposited` log once the L1 transaction is mined.

pub mod encode;
pub mod parse;

use alloy_primitives::{Address, Bytes, Log, TxKind, B256, U256};
use alloy_rlp::RlpEncodable;
use serde::Serialize;
use thiserror::Error;

use crate::config::L1_TO_L2_ALIAS_OFFSET;

pub use encode::DEPOSIT_TX_TYPE;
pub use parse::{compute_source_hash, deposits_from_receipt_logs};

#[derive(Debug, Error)]
pub enum DepositError {
    #[error("log is not a TransactionDeposited event")]
    NotADeposit,
    #[error("invalid opaque data length: expected at least 73 bytes, got {0}")]
    InvalidOpaqueDataLength(usize),
    #[error("unsupported deposit version: {0}")]
    UnsupportedVersion(U256),
    #[error("failed to decode log: {0}")]
    DecodeError(#[from] alloy_sol_types::Error),
}

/// An L1 → L2 deposit as executed on L2.
///
/// Field order matches the RLP payload of the `0x7E` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, RlpEncodable)]
#[serde(rename_all = "camelCase")]
pub struct DepositedTransaction {
    pub source_hash: B256,
    pub from: Address,
    pub to: TxKind,
    pub mint: U256,
    pub value: U256,
    pub gas_limit: u64,
    pub is_system_tx: bool,
    pub data: Bytes,
}

impl DepositedTransaction {
    /// Parse a `TransactionDeposited` log emitted at `log_index` of block `l1_block_hash`.
    #[inline]
    pub fn from_log(log: &Log, l1_block_hash: B256, log_index: u64) -> Result<Self, DepositError> {
        parse::from_log(log, l1_block_hash, log_index)
    }

    /// Encode as `0x7E || rlp([source_hash, from, to, mint, value, gas, is_system_tx, data])`.
    #[inline]
    pub fn encode_2718(&self, out: &mut Vec<u8>) {
        encode::encode_deposit_tx(self, out)
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = Vec::with_capacity(256);
        self.encode_2718(&mut buf);
        Bytes::from(buf)
    }

    /// The L2 transaction hash.
    #[inline]
    pub fn tx_hash(&self) -> B256 {
        encode::tx_hash(self)
    }
}

/// The address a contract's calls appear to come from on L2.
///
/// The portal applies this when the L1 sender is not the transaction origin, so deposits sent
/// by contract accounts (non-strict dispatch) execute with an aliased `from`.
pub fn apply_l1_to_l2_alias(address: Address) -> Address {
    let sum = U256::from_be_slice(address.as_slice())
        .wrapping_add(U256::from_be_slice(L1_TO_L2_ALIAS_OFFSET.as_slice()));
    let word = sum.to_be_bytes::<32>();
    Address::from_slice(&word[12..])
}
