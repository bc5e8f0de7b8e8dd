//! Error types for deposit dispatch.

use alloy_primitives::{Address, TxHash};
use thiserror::Error;

use l1call_pipeline::{ChainError, DepositError, EncodingError};

/// Failures reported by the RPC collaborators (bytecode lookup, submission, receipts).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or JSON-RPC error from the provider.
    #[error("transport error: {0}")]
    Transport(#[from] alloy_transport::TransportError),

    /// Receipt exists but is not part of a block yet.
    #[error("transaction {0} is not in a block yet")]
    Pending(TxHash),

    /// Portal logs in a receipt could not be decoded.
    #[error("deposit log error: {0}")]
    Deposit(#[from] DepositError),

    /// Any other collaborator failure.
    #[error("{0}")]
    Other(String),
}

/// Errors that abort a dispatch. Nothing is submitted once one of these is returned.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Calldata could not be encoded from the call descriptor.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Neither the request nor the dispatcher names an account.
    #[error("No account found")]
    MissingAccount,

    /// No L2 counterpart registered for the L1 chain or requested destination.
    #[error("unsupported chain: {0}")]
    UnsupportedChain(#[from] ChainError),

    /// Strict mode refused to deposit from an account with deployed code.
    #[error(
        "account {address} has deployed code. Calling depositTransaction from a smart contract can \
         have unexpected results, since on L2 the call does not come from the L1 caller and can \
         trigger reentrancy-like control flow. Set `strict` to false to disable this check."
    )]
    ContractAccount { address: Address },

    /// Bytecode lookup or submission failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}
