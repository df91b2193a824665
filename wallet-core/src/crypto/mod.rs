// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic**: BIP-39 phrases (12-24 words) và seed via [`WalletMnemonic`].
//! - **Derivation Paths**: parse `m/44'/60'/0'/0/0` thành [`DerivationPath`], builders trong [`DerivationPaths`].
//! - **Key Derivation**: BIP-32 secp256k1 walk via [`KeyDeriver`] → [`ExtendedKey`].
//! - **Hashing**: hash160, keccak256, sha3-512 helpers dùng chung cho address adapters.

pub mod derivation_path;
pub mod hash;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use derivation_path::{parse_path, ChildStep, DerivationPath, HARDENED_OFFSET};
pub use key_deriver::{ExtendedKey, KeyDeriver, SEED_LENGTH};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::DerivationPaths;
