// wallet-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! - **Address Derivation**: EIP-55 checksummed address generation via [`EvmAddress`].

pub mod address;

pub use address::EvmAddress;
