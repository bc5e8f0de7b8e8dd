//! OptimismPortal bindings.

use alloy_primitives::B256;
use alloy_sol_types::{sol, SolEvent};

sol! {
    /// The subset of OptimismPortal used to send and observe deposits.
    interface IOptimismPortal {
        /// Emitted for every deposit accepted by the portal.
        #[derive(Debug)]
        event TransactionDeposited(
            address indexed from,
            address indexed to,
            uint256 indexed version,
            bytes opaqueData
        );

        /// Send a deposit transaction to L2.
        function depositTransaction(
            address _to,
            uint256 _value,
            uint64 _gasLimit,
            bool _isCreation,
            bytes _data
        ) external payable;
    }
}

pub use IOptimismPortal::{depositTransactionCall, TransactionDeposited};

/// Keccak256 hash of `TransactionDeposited(address,address,uint256,bytes)`.
pub const TRANSACTION_DEPOSITED_TOPIC: B256 = B256::new(TransactionDeposited::SIGNATURE_HASH.0);

/// The only `TransactionDeposited` version the portal currently emits.
pub const DEPOSIT_VERSION: u64 = 0;
