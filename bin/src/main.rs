use std::time::Duration;

use alloy_primitives::{Address, U256};
use alloy_provider::ProviderBuilder;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use l1call_dispatch::{DepositDispatcher, DepositRequest, DispatcherConfig, ProviderClient};
use l1call_pipeline::CallDescriptor;
use l1call_types::TransactionOverrides;

#[derive(Parser)]
#[command(name = "l1call")]
#[command(about = "Call an L2 contract from L1 through the OptimismPortal")]
struct Args {
    /// L1 RPC URL
    #[arg(long, env = "L1_RPC_URL")]
    l1_rpc_url: String,

    /// Sending account (signed for by the node)
    #[arg(long, env = "L1CALL_ACCOUNT")]
    account: Option<Address>,

    /// L2 contract to call
    #[arg(long)]
    to: Address,

    /// Function signature, e.g. "transfer(address,uint256)"
    #[arg(long)]
    function: String,

    /// Function arguments, in order
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,

    /// Gas limit of the call on L2
    #[arg(long)]
    l2_gas_limit: u64,

    /// Value sent to the contract on L2, in wei
    #[arg(long, default_value = "0")]
    l2_msg_value: U256,

    /// Destination L2 chain ID (defaults to the L1's first known counterpart)
    #[arg(long)]
    l2_chain: Option<u64>,

    /// OptimismPortal address, overriding the known one
    #[arg(long)]
    portal: Option<Address>,

    /// Allow depositing from an account with deployed code
    #[arg(long)]
    no_strict: bool,

    /// L1 nonce
    #[arg(long)]
    nonce: Option<u64>,

    /// L1 gas limit
    #[arg(long)]
    gas: Option<u64>,

    /// Print the deposit instead of sending it
    #[arg(long)]
    dry_run: bool,

    /// Wait for the L1 receipt and print the L2 deposit transaction hashes
    #[arg(long)]
    wait: bool,
}

const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const RECEIPT_POLL_ATTEMPTS: u32 = 90;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,l1call=debug,l1call_dispatch=debug")
        }))
        .init();

    let args = Args::parse();

    let provider = ProviderBuilder::new().connect(&args.l1_rpc_url).await?;
    let client = ProviderClient::new(provider);
    let l1_chain_id = client.chain_id().await?;
    info!(l1_chain_id, "connected to L1");

    let config = DispatcherConfig::builder().l1_chain_id(l1_chain_id).build();
    let portal = config.registry.resolve(l1_chain_id, args.l2_chain, args.portal)?.portal;
    let dispatcher = DepositDispatcher::new(client, config);

    let request = DepositRequest::builder()
        .maybe_account(args.account)
        .target(args.to)
        .call(CallDescriptor::parse(&args.function, args.args.as_slice())?)
        .l2_gas_limit(args.l2_gas_limit)
        .l2_msg_value(args.l2_msg_value)
        .strict(!args.no_strict)
        .maybe_l2_chain(args.l2_chain)
        .maybe_portal(args.portal)
        .overrides(TransactionOverrides { nonce: args.nonce, gas: args.gas, ..Default::default() })
        .build();

    if args.dry_run {
        let message = dispatcher.prepare(request).await?;
        let portal_calldata = message.portal_calldata();
        let output = serde_json::json!({
            "message": message,
            "portalCalldata": portal_calldata,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let tx_hash = dispatcher.dispatch(request).await?;
    println!("{tx_hash}");

    if !args.wait {
        return Ok(());
    }

    for _ in 0..RECEIPT_POLL_ATTEMPTS {
        match dispatcher.client().deposits_in_transaction(tx_hash, portal).await {
            Ok(Some(deposits)) => {
                for deposit in &deposits {
                    info!(l2_tx_hash = %deposit.tx_hash(), from = %deposit.from, "L2 deposit");
                    println!("{}", deposit.tx_hash());
                }
                return Ok(());
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "failed to fetch receipt"),
        }
        tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
    }

    eyre::bail!("no receipt for {tx_hash} after {RECEIPT_POLL_ATTEMPTS} attempts")
}
