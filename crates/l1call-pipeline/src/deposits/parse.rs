//! Recovering deposits from `TransactionDeposited` logs.

use alloy_primitives::{keccak256, Address, Bytes, Log, TxKind, B256, U256};
use alloy_sol_types::SolEvent;

use super::{DepositError, DepositedTransaction};
use crate::portal::{TransactionDeposited, TRANSACTION_DEPOSITED_TOPIC};

/// Byte length of the fixed part of version 0 opaque data.
pub const OPAQUE_DATA_HEADER_LEN: usize = 73;

/// Parse a `TransactionDeposited` log into the deposit it produces on L2.
///
/// `l1_block_hash` and `log_index` locate the log on L1 and determine the source hash.
pub fn from_log(
    log: &Log,
    l1_block_hash: B256,
    log_index: u64,
) -> Result<DepositedTransaction, DepositError> {
    if log.topics().first() != Some(&TRANSACTION_DEPOSITED_TOPIC) {
        return Err(DepositError::NotADeposit);
    }

    let event = TransactionDeposited::decode_raw_log(log.topics().iter().copied(), &log.data.data)?;

    if event.version != U256::ZERO {
        return Err(DepositError::UnsupportedVersion(event.version));
    }

    // version 0 opaqueData: mint[32] ‖ value[32] ‖ gasLimit[8] ‖ isCreation[1] ‖ data
    let opaque: &[u8] = event.opaqueData.as_ref();
    if opaque.len() < OPAQUE_DATA_HEADER_LEN {
        return Err(DepositError::InvalidOpaqueDataLength(opaque.len()));
    }

    let mut gas_limit = [0u8; 8];
    gas_limit.copy_from_slice(&opaque[64..72]);

    let to = if opaque[72] != 0 { TxKind::Create } else { TxKind::Call(event.to) };

    Ok(DepositedTransaction {
        source_hash: compute_source_hash(l1_block_hash, log_index),
        from: event.from,
        to,
        mint: U256::from_be_slice(&opaque[0..32]),
        value: U256::from_be_slice(&opaque[32..64]),
        gas_limit: u64::from_be_bytes(gas_limit),
        is_system_tx: false,
        data: Bytes::copy_from_slice(&opaque[OPAQUE_DATA_HEADER_LEN..]),
    })
}

/// Collect the deposits `portal` emitted in one L1 transaction receipt.
///
/// `logs` yields each receipt log with its block-level log index. Logs from other contracts and
/// other events are skipped.
pub fn deposits_from_receipt_logs<'a>(
    portal: Address,
    l1_block_hash: B256,
    logs: impl IntoIterator<Item = (u64, &'a Log)>,
) -> Result<Vec<DepositedTransaction>, DepositError> {
    logs.into_iter()
        .filter(|(_, log)| {
            log.address == portal && log.topics().first() == Some(&TRANSACTION_DEPOSITED_TOPIC)
        })
        .map(|(log_index, log)| from_log(log, l1_block_hash, log_index))
        .collect()
}

/// Source hash of a user deposit:
/// `keccak256(bytes32(0) ‖ keccak256(l1_block_hash ‖ bytes32(log_index)))`.
pub fn compute_source_hash(l1_block_hash: B256, log_index: u64) -> B256 {
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(l1_block_hash.as_slice());
    input[56..].copy_from_slice(&log_index.to_be_bytes());
    let deposit_id = keccak256(input);

    // domain 0 = user deposit
    let mut input = [0u8; 64];
    input[32..].copy_from_slice(deposit_id.as_slice());
    keccak256(input)
}
