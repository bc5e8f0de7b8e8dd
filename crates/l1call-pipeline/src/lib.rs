//! Building blocks for calling L2 contracts from L1 through an OP Stack portal.
//!
//! - Calldata encoding (ABI + function name + arguments)
//! - L1 → L2 chain pairing and portal resolution
//! - Deposit message assembly and portal calldata
//! - Recovery of the resulting L2 deposit transaction from portal logs

mod calldata;
mod chains;
mod message;

pub mod config;
pub mod deposits;
pub mod portal;

#[cfg(test)]
mod tests;

pub use calldata::{encode_call, CallDescriptor, EncodingError};
pub use chains::{ChainError, ChainRegistry, L2Chain, Route};
pub use deposits::{
    apply_l1_to_l2_alias, deposits_from_receipt_logs, DepositError, DepositedTransaction,
    DEPOSIT_TX_TYPE,
};
pub use message::DepositMessage;
pub use portal::TRANSACTION_DEPOSITED_TOPIC;

// Re-exported so callers can build arguments without depending on alloy directly.
pub use alloy_dyn_abi::DynSolValue;
pub use alloy_json_abi::JsonAbi;
