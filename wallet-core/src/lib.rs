// wallet-core/src/lib.rs

//! Multi-chain wallet core
//!
//! Seed → BIP-32 secp256k1 key → (private key hex, address) cho Bitcoin, Ethereum
//! và Solana, cùng password envelope (scrypt + AES-256-GCM) để lưu private key.
//!
//! ```rust
//! use multichain_wallet_core::{api, ChainType};
//!
//! let material = api::derive_from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//!     "m/44'/60'/0'/0/0",
//!     ChainType::Ethereum,
//! )
//! .unwrap();
//! assert_eq!(material.address(), "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
//! ```

pub mod api;
pub mod chains;
pub mod crypto;
pub mod error;
pub mod keystore;

pub use chains::{AddressFormat, BitcoinNetwork, BitcoinOptions, ChainParams, ChainType, KeyMaterial};
pub use crypto::{DerivationPath, ExtendedKey, KeyDeriver, WalletMnemonic, WordCount};
pub use error::{WalletError, WalletResult};
pub use keystore::{EncryptedEnvelope, EnvelopeCipher, KdfParams};
