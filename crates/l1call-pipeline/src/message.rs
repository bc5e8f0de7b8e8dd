//! The deposit message handed to the submitter.

use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use alloy_sol_types::SolCall;
use l1call_types::{Account, TransactionOverrides};
use serde::Serialize;

use crate::{
    chains::Route,
    deposits::{compute_source_hash, DepositedTransaction},
    portal::depositTransactionCall,
};

/// A fully resolved contract-call deposit.
///
/// `to`, `data`, `value` and `gas_limit` describe the L2 call. The L1 transaction carrying it is
/// sent by `account` to `route.portal`, with no L1 value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositMessage {
    pub route: Route,
    pub account: Account,
    /// L2 contract being called.
    pub to: Address,
    /// Calldata for the L2 call.
    pub data: Bytes,
    /// Value transferred to `to` on L2, in wei.
    pub value: U256,
    /// L2 gas limit.
    pub gas_limit: u64,
    pub overrides: TransactionOverrides,
}

impl DepositMessage {
    /// Calldata for `OptimismPortal.depositTransaction`.
    pub fn portal_calldata(&self) -> Bytes {
        depositTransactionCall {
            _to: self.to,
            _value: self.value,
            _gasLimit: self.gas_limit,
            _isCreation: false,
            _data: self.data.clone(),
        }
        .abi_encode()
        .into()
    }

    /// The `opaqueData` the portal will emit for this message.
    ///
    /// Layout: `mint[32] ‖ value[32] ‖ gasLimit[8] ‖ isCreation[1] ‖ data`. Mint is always zero
    /// since the L1 transaction carries no value.
    pub fn opaque_data(&self) -> Bytes {
        let mut out = Vec::with_capacity(73 + self.data.len());
        out.extend_from_slice(&U256::ZERO.to_be_bytes::<32>());
        out.extend_from_slice(&self.value.to_be_bytes::<32>());
        out.extend_from_slice(&self.gas_limit.to_be_bytes());
        out.push(0);
        out.extend_from_slice(&self.data);
        out.into()
    }

    /// The L2 transaction this message becomes once its portal log lands at `log_index` in
    /// block `l1_block_hash`.
    ///
    /// `from` is the L2 sender: the account address for EOAs, or its
    /// [alias](crate::apply_l1_to_l2_alias) for contract accounts.
    pub fn to_l2_transaction(
        &self,
        from: Address,
        l1_block_hash: B256,
        log_index: u64,
    ) -> DepositedTransaction {
        DepositedTransaction {
            source_hash: compute_source_hash(l1_block_hash, log_index),
            from,
            to: TxKind::Call(self.to),
            mint: U256::ZERO,
            value: self.value,
            gas_limit: self.gas_limit,
            is_system_tx: false,
            data: self.data.clone(),
        }
    }
}
