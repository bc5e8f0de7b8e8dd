//! Tests for the dispatch module.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{address, keccak256, Address, Bytes, TxHash, TxKind, B256, U256};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;

use l1call_pipeline::{
    config::{
        BASE_CHAIN_ID, BASE_SEPOLIA_CHAIN_ID, MAINNET_CHAIN_ID, OP_MAINNET_CHAIN_ID,
        OP_MAINNET_PORTAL, SEPOLIA_CHAIN_ID,
    },
    CallDescriptor, ChainError, DepositMessage, JsonAbi,
};
use l1call_types::{Account, TransactionOverrides};

use super::{
    portal_transaction_request, provider::indexed_logs, ClientError, CodeReader,
    DepositDispatcher, DepositRequest, DepositSubmitter, DispatchError, DispatcherConfig,
};

sol! {
    function foo(uint256 x);
}

const EOA: Address = address!("000000000000000000000000000000000000000a");
const CONTRACT: Address = address!("00000000000000000000000000000000000000c0");
const TARGET: Address = address!("000000000000000000000000000000000000000b");
const SUBMITTED_HASH: TxHash = B256::repeat_byte(0x99);

// =============================================================================
// Mock collaborator
// =============================================================================

#[derive(Default)]
struct MockClient {
    code: HashMap<Address, Bytes>,
    code_lookups: AtomicUsize,
    submitted: Mutex<Vec<DepositMessage>>,
    fail_code_lookup: bool,
    fail_submission: bool,
}

impl MockClient {
    fn with_contract(address: Address) -> Self {
        let mut client = Self::default();
        client.code.insert(address, Bytes::from_static(&[0x60, 0x80, 0x60, 0x40]));
        client
    }

    fn submitted(&self) -> Vec<DepositMessage> {
        self.submitted.lock().unwrap().clone()
    }

    fn lookups(&self) -> usize {
        self.code_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeReader for MockClient {
    async fn deployed_code(&self, address: Address) -> Result<Option<Bytes>, ClientError> {
        self.code_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_code_lookup {
            return Err(ClientError::Other("header not found".to_string()));
        }
        Ok(self.code.get(&address).cloned())
    }
}

#[async_trait]
impl DepositSubmitter for MockClient {
    async fn submit_deposit_transaction(
        &self,
        message: DepositMessage,
    ) -> Result<TxHash, ClientError> {
        if self.fail_submission {
            return Err(ClientError::Other("nonce too low".to_string()));
        }
        self.submitted.lock().unwrap().push(message);
        Ok(SUBMITTED_HASH)
    }
}

fn dispatcher(client: MockClient) -> DepositDispatcher<MockClient> {
    DepositDispatcher::new(client, DispatcherConfig::builder().l1_chain_id(MAINNET_CHAIN_ID).build())
}

fn foo_call(x: u64) -> CallDescriptor {
    let abi = JsonAbi::parse(["function foo(uint256 x)"]).unwrap();
    CallDescriptor::new(&abi, "foo", vec![DynSolValue::from(U256::from(x))]).unwrap()
}

fn request(account: Address) -> DepositRequest {
    DepositRequest::builder()
        .account(account)
        .target(TARGET)
        .call(foo_call(42))
        .l2_gas_limit(100_000)
        .build()
}

// =============================================================================
// Dispatch
// =============================================================================

#[tokio::test]
async fn test_end_to_end_dispatch() {
    let dispatcher = dispatcher(MockClient::default());

    let tx_hash = dispatcher
        .dispatch(
            DepositRequest::builder()
                .account(EOA)
                .target(TARGET)
                .call(foo_call(42))
                .l2_gas_limit(100_000)
                .l2_msg_value(U256::ZERO)
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(tx_hash, SUBMITTED_HASH);

    let submitted = dispatcher.client().submitted();
    assert_eq!(submitted.len(), 1);

    let message = &submitted[0];
    let mut expected_data = keccak256("foo(uint256)")[..4].to_vec();
    expected_data.extend_from_slice(&U256::from(42).to_be_bytes::<32>());

    assert_eq!(message.to, TARGET);
    assert_eq!(message.data.as_ref(), expected_data.as_slice());
    assert_eq!(message.data.as_ref(), fooCall { x: U256::from(42) }.abi_encode().as_slice());
    assert_eq!(message.value, U256::ZERO);
    assert_eq!(message.gas_limit, 100_000);
    assert_eq!(message.account, Account::from(EOA));
    assert_eq!(message.route.l2_chain_id, OP_MAINNET_CHAIN_ID);
    assert_eq!(message.route.portal, OP_MAINNET_PORTAL);
    assert_eq!(dispatcher.client().lookups(), 1);
}

#[tokio::test]
async fn test_omitted_value_is_zero() {
    let dispatcher = dispatcher(MockClient::default());

    let implicit = dispatcher.prepare(request(EOA)).await.unwrap();
    let explicit = dispatcher
        .prepare(DepositRequest { l2_msg_value: U256::ZERO, ..request(EOA) })
        .await
        .unwrap();

    assert_eq!(implicit.value, U256::ZERO);
    assert_eq!(implicit, explicit);
}

#[tokio::test]
async fn test_l2_value_forwarded() {
    let dispatcher = dispatcher(MockClient::default());

    let message = dispatcher
        .prepare(DepositRequest { l2_msg_value: U256::from(1_000), ..request(EOA) })
        .await
        .unwrap();

    assert_eq!(message.value, U256::from(1_000));
}

#[tokio::test]
async fn test_missing_account() {
    let dispatcher = dispatcher(MockClient::default());

    let err = dispatcher
        .dispatch(DepositRequest { account: None, ..request(EOA) })
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::MissingAccount));
    assert_eq!(err.to_string(), "No account found");
    assert_eq!(dispatcher.client().lookups(), 0);
    assert!(dispatcher.client().submitted().is_empty());
}

#[tokio::test]
async fn test_inherited_account() {
    let config = DispatcherConfig::builder()
        .l1_chain_id(MAINNET_CHAIN_ID)
        .account(Account::local(EOA))
        .build();
    let dispatcher = DepositDispatcher::new(MockClient::default(), config);

    let message = dispatcher.prepare(DepositRequest { account: None, ..request(EOA) }).await.unwrap();

    assert_eq!(message.account, Account::local(EOA));
}

#[tokio::test]
async fn test_request_account_beats_inherited() {
    let config = DispatcherConfig::builder()
        .l1_chain_id(MAINNET_CHAIN_ID)
        .account(address!("00000000000000000000000000000000000000ff"))
        .build();
    let dispatcher = DepositDispatcher::new(MockClient::default(), config);

    let message = dispatcher.prepare(request(EOA)).await.unwrap();

    assert_eq!(message.account.address, EOA);
}

#[tokio::test]
async fn test_contract_account_rejected_in_strict_mode() {
    let dispatcher = dispatcher(MockClient::with_contract(CONTRACT));

    let err = dispatcher.dispatch(request(CONTRACT)).await.unwrap_err();

    assert!(matches!(err, DispatchError::ContractAccount { address } if address == CONTRACT));
    assert!(err.to_string().contains("strict"));
    assert!(dispatcher.client().submitted().is_empty());
}

#[tokio::test]
async fn test_contract_account_allowed_when_not_strict() {
    let contract_dispatcher = dispatcher(MockClient::with_contract(CONTRACT));
    let eoa_dispatcher = dispatcher(MockClient::default());

    let tx_hash = contract_dispatcher
        .dispatch(DepositRequest { strict: false, ..request(CONTRACT) })
        .await
        .unwrap();
    eoa_dispatcher.dispatch(request(CONTRACT)).await.unwrap();

    assert_eq!(tx_hash, SUBMITTED_HASH);
    // no code lookup at all when not strict
    assert_eq!(contract_dispatcher.client().lookups(), 0);
    assert_eq!(contract_dispatcher.client().submitted(), eoa_dispatcher.client().submitted());
}

#[tokio::test]
async fn test_portal_override() {
    let portal = address!("00000000000000000000000000000000000000cc");
    let dispatcher = dispatcher(MockClient::default());

    let default = dispatcher.prepare(request(EOA)).await.unwrap();
    let overridden =
        dispatcher.prepare(DepositRequest { portal: Some(portal), ..request(EOA) }).await.unwrap();

    assert_eq!(default.route.portal, OP_MAINNET_PORTAL);
    assert_eq!(overridden.route.portal, portal);
    assert_eq!(overridden.route.l2_chain_id, default.route.l2_chain_id);
    assert_eq!(overridden.data, default.data);
}

#[tokio::test]
async fn test_destination_override() {
    let dispatcher = dispatcher(MockClient::default());

    let message = dispatcher
        .prepare(DepositRequest { l2_chain: Some(BASE_CHAIN_ID), ..request(EOA) })
        .await
        .unwrap();

    assert_eq!(message.route.l2_chain_id, BASE_CHAIN_ID);
}

#[tokio::test]
async fn test_l1_chain_override() {
    let dispatcher = dispatcher(MockClient::default());

    let message = dispatcher
        .prepare(DepositRequest {
            l1_chain: Some(SEPOLIA_CHAIN_ID),
            l2_chain: Some(BASE_SEPOLIA_CHAIN_ID),
            ..request(EOA)
        })
        .await
        .unwrap();

    assert_eq!(message.route.l1_chain_id, SEPOLIA_CHAIN_ID);
    assert_eq!(message.route.l2_chain_id, BASE_SEPOLIA_CHAIN_ID);
}

#[tokio::test]
async fn test_unsupported_chain() {
    let client = MockClient::default();
    let dispatcher =
        DepositDispatcher::new(client, DispatcherConfig::builder().l1_chain_id(424242).build());

    let err = dispatcher.dispatch(request(EOA)).await.unwrap_err();

    assert!(matches!(err, DispatchError::UnsupportedChain(ChainError::UnsupportedChain(424242))));
    assert_eq!(dispatcher.client().lookups(), 0);
    assert!(dispatcher.client().submitted().is_empty());
}

#[tokio::test]
async fn test_submission_failure_passes_through() {
    let client = MockClient { fail_submission: true, ..Default::default() };
    let dispatcher = dispatcher(client);

    let err = dispatcher.dispatch(request(EOA)).await.unwrap_err();

    assert!(matches!(err, DispatchError::Client(ClientError::Other(msg)) if msg == "nonce too low"));
}

#[tokio::test]
async fn test_code_lookup_failure_passes_through() {
    let client = MockClient { fail_code_lookup: true, ..Default::default() };
    let dispatcher = dispatcher(client);

    let err = dispatcher.dispatch(request(EOA)).await.unwrap_err();

    assert!(
        matches!(err, DispatchError::Client(ClientError::Other(msg)) if msg == "header not found")
    );
    assert_eq!(dispatcher.client().lookups(), 1);
    assert!(dispatcher.client().submitted().is_empty());
}

#[tokio::test]
async fn test_overrides_forwarded() {
    let overrides = TransactionOverrides {
        nonce: Some(3),
        max_fee_per_gas: Some(30_000_000_000),
        ..Default::default()
    };
    let dispatcher = dispatcher(MockClient::default());

    dispatcher
        .dispatch(DepositRequest { overrides: overrides.clone(), ..request(EOA) })
        .await
        .unwrap();

    assert_eq!(dispatcher.client().submitted()[0].overrides, overrides);
}

#[tokio::test]
async fn test_concurrent_dispatches_are_independent() {
    let dispatcher = dispatcher(MockClient::default());

    let a = DepositRequest { call: foo_call(1), ..request(EOA) };
    let b = DepositRequest { call: foo_call(2), ..request(EOA) };
    let (ra, rb) = tokio::join!(dispatcher.dispatch(a), dispatcher.dispatch(b));

    assert!(ra.is_ok() && rb.is_ok());

    let mut data: Vec<Vec<u8>> =
        dispatcher.client().submitted().into_iter().map(|m| m.data.to_vec()).collect();
    data.sort();
    let mut expected =
        vec![fooCall { x: U256::from(1) }.abi_encode(), fooCall { x: U256::from(2) }.abi_encode()];
    expected.sort();
    assert_eq!(data, expected);
}

// =============================================================================
// Provider request mapping
// =============================================================================

#[tokio::test]
async fn test_portal_transaction_request() {
    let dispatcher = dispatcher(MockClient::default());
    let message = dispatcher
        .prepare(DepositRequest {
            overrides: TransactionOverrides { nonce: Some(9), gas: Some(250_000), ..Default::default() },
            ..request(EOA)
        })
        .await
        .unwrap();

    let tx = portal_transaction_request(&message);

    assert_eq!(tx.from, Some(EOA));
    assert_eq!(tx.to, Some(TxKind::Call(OP_MAINNET_PORTAL)));
    assert_eq!(tx.value, Some(U256::ZERO));
    assert_eq!(tx.chain_id, Some(MAINNET_CHAIN_ID));
    assert_eq!(tx.nonce, Some(9));
    assert_eq!(tx.gas, Some(250_000));
    assert_eq!(tx.gas_price, None);
    assert_eq!(tx.input.input(), Some(&message.portal_calldata()));
}

// =============================================================================
// Receipt logs
// =============================================================================

fn rpc_log(log_index: Option<u64>) -> alloy_rpc_types_eth::Log {
    alloy_rpc_types_eth::Log {
        inner: alloy_primitives::Log::default(),
        block_hash: None,
        block_number: None,
        block_timestamp: None,
        transaction_hash: None,
        transaction_index: None,
        log_index,
        removed: false,
    }
}

#[test]
fn test_indexed_logs_keeps_block_indices() {
    let logs = [rpc_log(Some(4)), rpc_log(Some(5))];

    let indexed = indexed_logs(SUBMITTED_HASH, &logs).unwrap();

    assert_eq!(indexed.iter().map(|(index, _)| *index).collect::<Vec<_>>(), vec![4, 5]);
}

#[test]
fn test_indexed_logs_rejects_missing_index() {
    let logs = [rpc_log(Some(4)), rpc_log(None)];

    let err = indexed_logs(SUBMITTED_HASH, &logs).unwrap_err();

    assert!(matches!(err, ClientError::Pending(hash) if hash == SUBMITTED_HASH));
}
