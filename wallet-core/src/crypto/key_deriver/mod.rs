// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine
//
// Kiến trúc:
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │                    ▼                            │
// │        secp256k1 master key (BIP-32)            │
// │                    │  path walk (tuần tự)       │
// │                    ▼                            │
// │              ExtendedKey (leaf)                 │
// │     ┌──────────────┼──────────────┐             │
// │     ▼              ▼              ▼             │
// │  Bitcoin        Ethereum        Solana          │
// │  (3 formats)    (keccak)        (non-standard)  │
// └─────────────────────────────────────────────────┘

pub mod secp256k1;

pub use secp256k1::ExtendedKey;

use crate::crypto::derivation_path::{ChildStep, DerivationPath};
use crate::error::{DerivationError, WalletResult};
use tracing::debug;

/// Độ dài seed từ BIP-39 (PBKDF2-HMAC-SHA512 output)
pub const SEED_LENGTH: usize = 64;

/// Key Derivation Engine - entry point cho mọi derivation
///
/// Stateless: mọi hàm là pure function của input, có thể gọi song song
/// từ nhiều thread trên cùng master key.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Master extended key from a seed.
    pub fn derive_master_key(seed: &[u8]) -> Result<ExtendedKey, DerivationError> {
        ExtendedKey::master(seed)
    }

    /// Walk `path` from `master`, root to leaf.
    ///
    /// Stops at the first failing step; the computation is deterministic so
    /// there is nothing to retry.
    pub fn derive_along_path(
        master: &ExtendedKey,
        path: &DerivationPath,
    ) -> Result<ExtendedKey, DerivationError> {
        let mut key = master.clone();
        for step in path {
            key = key.derive_child(*step)?;
        }
        Ok(key)
    }

    /// Parse `path`, derive master from a 64-byte seed and walk to the leaf.
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - Derivation path (e.g., "m/44'/60'/0'/0/0")
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<ExtendedKey> {
        Self::validate_seed(seed)?;
        let path = DerivationPath::parse(path)?;

        let master = Self::derive_master_key(seed)?;
        let key = Self::derive_along_path(&master, &path)?;

        debug!(path = %path, depth = key.depth(), "derived extended key");
        Ok(key)
    }

    /// Batch derive: derive tới base_path 1 lần, rồi fan-out từng index (non-hardened)
    ///
    /// Với feature `parallel`, fan-out chạy trên rayon thread pool.
    ///
    /// # Arguments
    /// * `seed` - 64 bytes
    /// * `base_path` - Path tới trước index cuối (e.g. "m/44'/60'/0'/0")
    /// * `indices` - Range of address indices (e.g. 0..10)
    pub fn derive_batch(
        seed: &[u8],
        base_path: &str,
        indices: std::ops::Range<u32>,
    ) -> WalletResult<Vec<ExtendedKey>> {
        let base = Self::derive(seed, base_path)?;

        let derive_one = |index: u32| -> WalletResult<ExtendedKey> {
            let step = ChildStep::normal(index)?;
            Ok(base.derive_child(step)?)
        };

        #[cfg(feature = "parallel")]
        let keys = {
            use rayon::prelude::*;
            indices.into_par_iter().map(derive_one).collect::<WalletResult<Vec<_>>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let keys = indices.map(derive_one).collect::<WalletResult<Vec<_>>>()?;

        debug!(base_path, count = keys.len(), "batch derivation complete");
        Ok(keys)
    }

    /// Validate seed length
    #[inline]
    fn validate_seed(seed: &[u8]) -> Result<(), DerivationError> {
        if seed.len() != SEED_LENGTH {
            return Err(DerivationError::InvalidSeedLength(seed.len()));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
