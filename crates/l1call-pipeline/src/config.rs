//! Built-in OP Stack chain constants.
//!
//! Portal addresses are the `OptimismPortalProxy` deployments listed in the superchain registry.

use alloy_primitives::{address, Address};

/// Ethereum mainnet chain ID.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Ethereum Sepolia chain ID.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// OP Mainnet chain ID.
pub const OP_MAINNET_CHAIN_ID: u64 = 10;

/// OP Mainnet OptimismPortal on L1.
/// <https://etherscan.io/address/0xbEb5Fc579115071764c7423A4f12eDde41f106Ed>
pub const OP_MAINNET_PORTAL: Address = address!("beb5fc579115071764c7423a4f12edde41f106ed");

/// Base chain ID.
pub const BASE_CHAIN_ID: u64 = 8453;

/// Base OptimismPortal on L1.
/// <https://etherscan.io/address/0x49048044D57e1C92A77f79988d21Fa8fAF74E97e>
pub const BASE_PORTAL: Address = address!("49048044d57e1c92a77f79988d21fa8faf74e97e");

/// Zora chain ID.
pub const ZORA_CHAIN_ID: u64 = 7_777_777;

/// Zora OptimismPortal on L1.
/// <https://etherscan.io/address/0x1a0ad011913A150f69f6A19DF447A0CfD9551054>
pub const ZORA_PORTAL: Address = address!("1a0ad011913a150f69f6a19df447a0cfd9551054");

/// Unichain chain ID.
pub const UNICHAIN_CHAIN_ID: u64 = 130;

/// Unichain OptimismPortal on L1.
/// <https://etherscan.io/address/0x0bd48f6B86a26D3a217d0Fa6FfE2B491B956A7a2>
pub const UNICHAIN_PORTAL: Address = address!("0bd48f6b86a26d3a217d0fa6ffe2b491b956a7a2");

/// OP Sepolia chain ID.
pub const OP_SEPOLIA_CHAIN_ID: u64 = 11_155_420;

/// OP Sepolia OptimismPortal on Sepolia.
pub const OP_SEPOLIA_PORTAL: Address = address!("16fc5058f25648194471939df75cf27a2e143c5c");

/// Base Sepolia chain ID.
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84_532;

/// Base Sepolia OptimismPortal on Sepolia.
pub const BASE_SEPOLIA_PORTAL: Address = address!("49f53e41452c74589e85ca1677426ba426459e85");

/// Offset added to a contract's L1 address to obtain its L2 sender address.
/// <https://specs.optimism.io/protocol/deposits.html#address-aliasing>
pub const L1_TO_L2_ALIAS_OFFSET: Address = address!("1111000000000000000000000000000000001111");
