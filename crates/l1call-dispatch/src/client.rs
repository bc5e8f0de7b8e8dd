//! Collaborators the dispatcher talks to.

use alloy_primitives::{Address, Bytes, TxHash};
use async_trait::async_trait;

use l1call_pipeline::DepositMessage;

use super::ClientError;

/// Looks up deployed bytecode on L1.
#[async_trait]
pub trait CodeReader: Send + Sync {
    /// Code at `address` in the latest state, `None` if the account has none.
    async fn deployed_code(&self, address: Address) -> Result<Option<Bytes>, ClientError>;
}

/// Sends the L1 transaction carrying a deposit to the portal.
///
/// Signing, fee estimation and nonce management belong to the implementation. The dispatcher
/// never retries a submission.
#[async_trait]
pub trait DepositSubmitter: Send + Sync {
    async fn submit_deposit_transaction(&self, message: DepositMessage)
        -> Result<TxHash, ClientError>;
}
