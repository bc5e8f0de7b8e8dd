//! Turns a contract-call request into a portal deposit.

use alloy_primitives::{Address, TxHash, U256};
use bon::Builder;
use tracing::{debug, info, warn};

use l1call_pipeline::{encode_call, CallDescriptor, ChainRegistry, DepositMessage};
use l1call_types::{Account, TransactionOverrides};

use super::{
    client::{CodeReader, DepositSubmitter},
    DispatchError,
};

/// Settings shared by every request sent through a dispatcher.
#[derive(Debug, Clone, Builder)]
pub struct DispatcherConfig {
    /// Chain ID of the connected L1.
    pub l1_chain_id: u64,

    /// Account used by requests that do not name one.
    #[builder(into)]
    pub account: Option<Account>,

    /// Known L1 → L2 pairings (defaults to the built-in OP Stack chains).
    #[builder(default)]
    pub registry: ChainRegistry,
}

/// One L2 contract call to send from L1.
///
/// There is no L1 `value`: the deposit mints nothing on L2 beyond what `l2_msg_value` moves.
#[derive(Debug, Clone, Builder)]
pub struct DepositRequest {
    /// Sending account. Accepts an [`Address`] or a full [`Account`].
    #[builder(into)]
    pub account: Option<Account>,

    /// L2 contract to call.
    pub target: Address,

    /// Function and arguments to call it with.
    pub call: CallDescriptor,

    /// Gas limit of the call on L2.
    pub l2_gas_limit: u64,

    /// Value sent to `target` on L2.
    #[builder(default)]
    pub l2_msg_value: U256,

    /// Refuse to deposit from accounts with deployed code.
    #[builder(default = true)]
    pub strict: bool,

    /// Destination L2 chain ID (defaults to the L1's first registered counterpart).
    pub l2_chain: Option<u64>,

    /// L1 chain ID to resolve against instead of the connected one.
    pub l1_chain: Option<u64>,

    /// Portal address to use instead of the registered one.
    pub portal: Option<Address>,

    #[builder(default)]
    pub overrides: TransactionOverrides,
}

/// Validates, assembles and submits contract-call deposits.
///
/// Holds no per-request state; concurrent calls on one dispatcher are independent.
pub struct DepositDispatcher<C> {
    client: C,
    config: DispatcherConfig,
}

impl<C> DepositDispatcher<C>
where
    C: CodeReader + DepositSubmitter,
{
    pub const fn new(client: C, config: DispatcherConfig) -> Self {
        Self { client, config }
    }

    pub const fn client(&self) -> &C {
        &self.client
    }

    pub const fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Build the deposit message for `request` without submitting it.
    ///
    /// Runs every check `dispatch` runs, including the strict-mode code lookup.
    pub async fn prepare(&self, request: DepositRequest) -> Result<DepositMessage, DispatchError> {
        let data = encode_call(&request.call)?;

        let account = request.account.or(self.config.account).ok_or(DispatchError::MissingAccount)?;

        let l1_chain_id = request.l1_chain.unwrap_or(self.config.l1_chain_id);
        let route = self.config.registry.resolve(l1_chain_id, request.l2_chain, request.portal)?;

        if request.strict {
            self.ensure_no_code(account.address).await?;
        } else {
            debug!(
                target: "l1call::dispatch",
                account = %account.address,
                "strict mode disabled, skipping contract account check"
            );
        }

        Ok(DepositMessage {
            route,
            account,
            to: request.target,
            data,
            value: request.l2_msg_value,
            gas_limit: request.l2_gas_limit,
            overrides: request.overrides,
        })
    }

    /// Prepare `request` and hand it to the submitter, returning the L1 transaction hash.
    pub async fn dispatch(&self, request: DepositRequest) -> Result<TxHash, DispatchError> {
        let message = self.prepare(request).await?;

        info!(
            target: "l1call::dispatch",
            account = %message.account.address,
            portal = %message.route.portal,
            l2_chain = message.route.l2_chain_id,
            to = %message.to,
            gas_limit = message.gas_limit,
            value = %message.value,
            "submitting deposit"
        );

        let tx_hash = self.client.submit_deposit_transaction(message).await?;

        info!(target: "l1call::dispatch", %tx_hash, "deposit submitted");
        Ok(tx_hash)
    }

    async fn ensure_no_code(&self, address: Address) -> Result<(), DispatchError> {
        match self.client.deployed_code(address).await? {
            Some(code) => {
                warn!(
                    target: "l1call::dispatch",
                    account = %address,
                    code_len = code.len(),
                    "refusing deposit from contract account"
                );
                Err(DispatchError::ContractAccount { address })
            }
            None => Ok(()),
        }
    }
}
