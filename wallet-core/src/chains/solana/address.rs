// wallet-core/src/chains/solana/address.rs
//
// Solana Address Module - NON-STANDARD scheme
//
//   secp256k1 scalar (32B) → SHA3-512 → first 32B = Ed25519 seed
//   Ed25519 public key (32B) → base58 = address
//
// KHÔNG tương thích với SLIP-0010 (m/44'/501'/x'/0') của Phantom/Solflare/solana-keygen.
// Giữ nguyên transform này để tái tạo đúng address của các wallet đã tạo trước đó.

use crate::crypto::hash::sha3_512;
use crate::error::AdapterError;
use ed25519_dalek::SigningKey;
use zeroize::{Zeroize, Zeroizing};

/// Solana Address Generator (non-standard derivation, xem module docs)
pub struct SolanaAddress;

impl SolanaAddress {
    /// secp256k1 scalar → base58 Ed25519 public key
    pub fn derive(secp256k1_secret: &[u8; 32]) -> Result<String, AdapterError> {
        let signing_key = Self::signing_key(secp256k1_secret);
        let public_key = signing_key.verifying_key().to_bytes();
        Ok(bs58::encode(public_key).into_string())
    }

    /// Ed25519 signing key rút ra từ secp256k1 scalar
    pub fn signing_key(secp256k1_secret: &[u8; 32]) -> SigningKey {
        let mut digest = sha3_512(secp256k1_secret);

        let mut seed = Zeroizing::new([0u8; 32]);
        seed.copy_from_slice(&digest[..32]);
        digest.zeroize();

        SigningKey::from_bytes(&seed)
    }
}

// =============================================================================
// TESTS
// =============================================================================
