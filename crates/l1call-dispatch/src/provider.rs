//! Collaborators backed by an alloy [`Provider`].

use alloy_primitives::{Address, Bytes, TxHash, TxKind, U256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::{Log, TransactionInput, TransactionRequest};
use async_trait::async_trait;

use l1call_pipeline::{deposits_from_receipt_logs, DepositMessage, DepositedTransaction};

use super::{
    client::{CodeReader, DepositSubmitter},
    ClientError,
};

/// Reads code and submits deposits through an L1 provider.
///
/// Transactions go out via `eth_sendTransaction`, so the provider (or a wallet filler layered on
/// it) must be able to sign for the deposit's account.
#[derive(Debug, Clone)]
pub struct ProviderClient<P> {
    provider: P,
}

impl<P: Provider> ProviderClient<P> {
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Chain ID of the connected L1.
    pub async fn chain_id(&self) -> Result<u64, ClientError> {
        Ok(self.provider.get_chain_id().await?)
    }

    /// The L2 deposits emitted by `portal` in L1 transaction `tx_hash`.
    ///
    /// Returns `None` while the transaction has no receipt.
    pub async fn deposits_in_transaction(
        &self,
        tx_hash: TxHash,
        portal: Address,
    ) -> Result<Option<Vec<DepositedTransaction>>, ClientError> {
        let Some(receipt) = self.provider.get_transaction_receipt(tx_hash).await? else {
            return Ok(None);
        };
        let block_hash = receipt.block_hash.ok_or(ClientError::Pending(tx_hash))?;

        let logs = indexed_logs(tx_hash, receipt.inner.logs())?;

        Ok(Some(deposits_from_receipt_logs(portal, block_hash, logs)?))
    }
}

/// Pair each receipt log with its block-level index.
///
/// A mined receipt carries an index on every log; a missing one means the node returned the
/// receipt before it was sealed into a block.
pub(crate) fn indexed_logs(
    tx_hash: TxHash,
    logs: &[Log],
) -> Result<Vec<(u64, &alloy_primitives::Log)>, ClientError> {
    logs.iter()
        .map(|log| {
            let index = log.log_index.ok_or(ClientError::Pending(tx_hash))?;
            Ok((index, &log.inner))
        })
        .collect()
}

#[async_trait]
impl<P: Provider> CodeReader for ProviderClient<P> {
    async fn deployed_code(&self, address: Address) -> Result<Option<Bytes>, ClientError> {
        let code = self.provider.get_code_at(address).await?;
        Ok((!code.is_empty()).then_some(code))
    }
}

#[async_trait]
impl<P: Provider> DepositSubmitter for ProviderClient<P> {
    async fn submit_deposit_transaction(
        &self,
        message: DepositMessage,
    ) -> Result<TxHash, ClientError> {
        let request = portal_transaction_request(&message);
        let pending = self.provider.send_transaction(request).await?;
        Ok(*pending.tx_hash())
    }
}

/// The L1 transaction that sends `message` to its portal.
///
/// L1 value is always zero; caller overrides fill the remaining fields.
pub fn portal_transaction_request(message: &DepositMessage) -> TransactionRequest {
    let overrides = &message.overrides;
    TransactionRequest {
        from: Some(message.account.address),
        to: Some(TxKind::Call(message.route.portal)),
        value: Some(U256::ZERO),
        input: TransactionInput::new(message.portal_calldata()),
        chain_id: Some(message.route.l1_chain_id),
        nonce: overrides.nonce,
        gas: overrides.gas,
        gas_price: overrides.gas_price,
        max_fee_per_gas: overrides.max_fee_per_gas,
        max_priority_fee_per_gas: overrides.max_priority_fee_per_gas,
        ..Default::default()
    }
}
