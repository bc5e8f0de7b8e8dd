
use alloy_primitives::{address, Address, Bytes, U256};
use l1call_types::{Account, TransactionOverrides};

use crate::{DepositMessage, Route};

pub(crate) const ACCOUNT: Address = address!("00000000000000000000000000000000000000aa");
pub(crate) const TARGET: Address = address!("00000000000000000000000000000000000000bb");
pub(crate) const PORTAL: Address = address!("00000000000000000000000000000000000000cc");

pub(crate) fn test_message(data: Bytes) -> DepositMessage {
    DepositMessage {
        route: Route { l1_chain_id: 1, l2_chain_id: 10, portal: PORTAL },
        account: Account::from(ACCOUNT),
        to: TARGET,
        data,
        value: U256::from(5),
        gas_limit: 100_000,
        overrides: TransactionOverrides::default(),
    }
}
