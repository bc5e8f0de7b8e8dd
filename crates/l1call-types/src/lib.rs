//! Shared types for the l1call crate family.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// How the signer behind an [`Account`] is reached.
///
/// Metadata only. Submission does not branch on it; the provider-backed submitter always sends
/// through `eth_sendTransaction`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Key held by the connected node.
    #[default]
    JsonRpc,
    /// Key held locally by the caller.
    Local,
}

/// The account a deposit is sent from.
///
/// A bare [`Address`] converts into a [`AccountKind::JsonRpc`] account, so callers can pass either
/// an address or an already built handle wherever `impl Into<Account>` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub address: Address,
    #[serde(default)]
    pub kind: AccountKind,
}

impl Account {
    /// Account whose key is held by the connected node.
    pub const fn json_rpc(address: Address) -> Self {
        Self { address, kind: AccountKind::JsonRpc }
    }

    /// Account whose key is held locally.
    pub const fn local(address: Address) -> Self {
        Self { address, kind: AccountKind::Local }
    }
}

impl From<Address> for Account {
    #[inline]
    fn from(address: Address) -> Self {
        Self::json_rpc(address)
    }
}

/// L1 transaction fields the caller may pin.
///
/// There is deliberately no `value`: a contract-call deposit never carries L1 value, so it never
/// mints on L2. The sender is chosen through [`Account`], not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOverrides {
    /// L1 nonce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// L1 gas limit of the portal call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
    /// Legacy gas price, in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u128>,
    /// EIP-1559 fee cap, in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<u128>,
    /// EIP-1559 priority fee, in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<u128>,
}

impl TransactionOverrides {
    /// Returns true if no field is pinned.
    pub const fn is_empty(&self) -> bool {
        self.nonce.is_none() &&
            self.gas.is_none() &&
            self.gas_price.is_none() &&
            self.max_fee_per_gas.is_none() &&
            self.max_priority_fee_per_gas.is_none()
    }
}
