//! Sending L2 contract calls from L1 through an OP Stack portal.
//!
//! A [`DepositDispatcher`] takes a [`DepositRequest`] through these steps:
//! - Encode the L2 calldata
//! - Resolve the sending account (request first, then the dispatcher's default)
//! - Resolve the destination L2 and portal address
//! - In strict mode, refuse accounts with deployed code
//! - Assemble the [`DepositMessage`](l1call_pipeline::DepositMessage) and submit it
//!
//! Every failure aborts before submission, and nothing is retried.
//!
//! # Quick Start
//!
//! ```ignore
//! use alloy_provider::ProviderBuilder;
//! use l1call_dispatch::{DepositDispatcher, DepositRequest, DispatcherConfig, ProviderClient};
//! use l1call_pipeline::CallDescriptor;
//!
//! let client = ProviderClient::new(ProviderBuilder::new().connect("http://localhost:8545").await?);
//! let config = DispatcherConfig::builder().l1_chain_id(client.chain_id().await?).build();
//! let dispatcher = DepositDispatcher::new(client, config);
//!
//! let request = DepositRequest::builder()
//!     .account(sender)
//!     .target(l2_contract)
//!     .call(CallDescriptor::parse("foo(uint256)", &["42"])?)
//!     .l2_gas_limit(100_000)
//!     .build();
//!
//! let tx_hash = dispatcher.dispatch(request).await?;
//! ```

mod client;
mod dispatcher;
mod error;
mod provider;

#[cfg(test)]
mod tests;

pub use client::{CodeReader, DepositSubmitter};
pub use dispatcher::{DepositDispatcher, DepositRequest, DispatcherConfig};
pub use error::{ClientError, DispatchError};
pub use provider::{portal_transaction_request, ProviderClient};
