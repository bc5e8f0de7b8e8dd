//! L1 → L2 chain pairing and portal resolution.

use alloy_primitives::Address;
use serde::Serialize;
use thiserror::Error;

use crate::config::{
    BASE_CHAIN_ID, BASE_PORTAL, BASE_SEPOLIA_CHAIN_ID, BASE_SEPOLIA_PORTAL, MAINNET_CHAIN_ID,
    OP_MAINNET_CHAIN_ID, OP_MAINNET_PORTAL, OP_SEPOLIA_CHAIN_ID, OP_SEPOLIA_PORTAL,
    SEPOLIA_CHAIN_ID, UNICHAIN_CHAIN_ID, UNICHAIN_PORTAL, ZORA_CHAIN_ID, ZORA_PORTAL,
};

/// `(l2_chain_id, name, l1_chain_id, portal)`, defaults first.
const OP_STACK_CHAINS: &[(u64, &str, u64, Address)] = &[
    (OP_MAINNET_CHAIN_ID, "OP Mainnet", MAINNET_CHAIN_ID, OP_MAINNET_PORTAL),
    (BASE_CHAIN_ID, "Base", MAINNET_CHAIN_ID, BASE_PORTAL),
    (ZORA_CHAIN_ID, "Zora", MAINNET_CHAIN_ID, ZORA_PORTAL),
    (UNICHAIN_CHAIN_ID, "Unichain", MAINNET_CHAIN_ID, UNICHAIN_PORTAL),
    (OP_SEPOLIA_CHAIN_ID, "OP Sepolia", SEPOLIA_CHAIN_ID, OP_SEPOLIA_PORTAL),
    (BASE_SEPOLIA_CHAIN_ID, "Base Sepolia", SEPOLIA_CHAIN_ID, BASE_SEPOLIA_PORTAL),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("no L2 chain registered for L1 chain {0}")]
    UnsupportedChain(u64),
    #[error("L2 chain {l2_chain_id} is not registered as a counterpart of L1 chain {l1_chain_id}")]
    UnsupportedRoute { l1_chain_id: u64, l2_chain_id: u64 },
}

/// An OP Stack L2 and the L1 portal that deposits into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct L2Chain {
    pub id: u64,
    pub name: String,
    pub l1_chain_id: u64,
    pub portal: Address,
}

impl L2Chain {
    pub fn new(id: u64, name: impl Into<String>, l1_chain_id: u64, portal: Address) -> Self {
        Self { id, name: name.into(), l1_chain_id, portal }
    }
}

/// Where a deposit goes: the L1 it is sent on, the L2 it lands on and the portal it is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub l1_chain_id: u64,
    pub l2_chain_id: u64,
    pub portal: Address,
}

/// Lookup table of known L1 → L2 pairings.
///
/// The first L2 registered for an L1 is that L1's default counterpart, used when the caller does
/// not name a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: Vec<L2Chain>,
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::op_stack()
    }
}

impl ChainRegistry {
    /// An empty registry.
    pub const fn empty() -> Self {
        Self { chains: Vec::new() }
    }

    /// Registry preloaded with OP Mainnet, Base, Zora and Unichain on mainnet, and OP Sepolia and
    /// Base Sepolia on Sepolia. OP Mainnet and OP Sepolia are the defaults.
    pub fn op_stack() -> Self {
        let chains = OP_STACK_CHAINS
            .iter()
            .map(|&(id, name, l1_chain_id, portal)| L2Chain::new(id, name, l1_chain_id, portal))
            .collect();
        Self { chains }
    }

    /// Add a chain, replacing any existing entry with the same L2 chain ID in place.
    pub fn register(&mut self, chain: L2Chain) -> &mut Self {
        match self.chains.iter_mut().find(|c| c.id == chain.id) {
            Some(existing) => *existing = chain,
            None => self.chains.push(chain),
        }
        self
    }

    /// Look up an L2 by its chain ID.
    pub fn get(&self, l2_chain_id: u64) -> Option<&L2Chain> {
        self.chains.iter().find(|c| c.id == l2_chain_id)
    }

    /// All L2s that deposit from `l1_chain_id`, in registration order.
    pub fn counterparts(&self, l1_chain_id: u64) -> impl Iterator<Item = &L2Chain> {
        self.chains.iter().filter(move |c| c.l1_chain_id == l1_chain_id)
    }

    /// Resolve the destination L2 and portal for a deposit sent on `l1_chain_id`.
    ///
    /// `l2_chain_id` selects a specific counterpart (default: the first registered one).
    /// `portal` replaces the registered portal address when given.
    pub fn resolve(
        &self,
        l1_chain_id: u64,
        l2_chain_id: Option<u64>,
        portal: Option<Address>,
    ) -> Result<Route, ChainError> {
        let chain = match l2_chain_id {
            Some(id) => self
                .get(id)
                .filter(|c| c.l1_chain_id == l1_chain_id)
                .ok_or(ChainError::UnsupportedRoute { l1_chain_id, l2_chain_id: id })?,
            None => self
                .counterparts(l1_chain_id)
                .next()
                .ok_or(ChainError::UnsupportedChain(l1_chain_id))?,
        };

        Ok(Route { l1_chain_id, l2_chain_id: chain.id, portal: portal.unwrap_or(chain.portal) })
    }
}
