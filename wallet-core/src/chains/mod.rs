// wallet-core/src/chains/mod.rs

//! Chain Adapters
//!
//! Biến một [`ExtendedKey`] đã derive thành cặp (private key hex, address) theo
//! quy tắc của từng chain:
//!
//! - **Bitcoin**: 3 address formats (Legacy P2PKH, P2SH-wrapped SegWit, Bech32 P2WPKH) via [`BitcoinAddress`].
//! - **Ethereum**: Keccak-256 address, EIP-55 checksum via [`EvmAddress`].
//! - **Solana**: scheme KHÔNG chuẩn (secp256k1 → SHA3-512 → Ed25519) via [`SolanaAddress`].
//!
//! Dispatch là closed enum [`ChainParams`]; thêm chain mới = thêm variant,
//! compiler bắt mọi `match` còn thiếu.

pub mod bitcoin;
pub mod evm;
pub mod solana;

pub use bitcoin::{AddressFormat, BitcoinAddress, BitcoinNetwork, BitcoinOptions};
pub use evm::EvmAddress;
pub use solana::SolanaAddress;

use crate::crypto::key_deriver::ExtendedKey;
use crate::crypto::paths::DerivationPaths;
use crate::error::{AdapterError, WalletError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use zeroize::Zeroizing;

// =============================================================================
// CHAIN TYPE
// =============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Bitcoin,
    Ethereum,
    Solana,
}

impl ChainType {
    pub const ALL: [ChainType; 3] = [ChainType::Bitcoin, ChainType::Ethereum, ChainType::Solana];

    /// Default derivation path của từng chain
    pub const fn default_path(self) -> &'static str {
        match self {
            ChainType::Bitcoin => DerivationPaths::BTC_LEGACY_0,
            ChainType::Ethereum => DerivationPaths::EVM_0,
            ChainType::Solana => DerivationPaths::SOLANA_0,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            ChainType::Bitcoin => "BTC",
            ChainType::Ethereum => "ETH",
            ChainType::Solana => "SOL",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChainType::Bitcoin => "bitcoin",
            ChainType::Ethereum => "ethereum",
            ChainType::Solana => "solana",
        };
        f.write_str(name)
    }
}

impl FromStr for ChainType {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitcoin" | "btc" => Ok(ChainType::Bitcoin),
            "ethereum" | "eth" => Ok(ChainType::Ethereum),
            "solana" | "sol" => Ok(ChainType::Solana),
            other => Err(WalletError::Validation(format!("unsupported chain '{}'", other))),
        }
    }
}

// =============================================================================
// CHAIN PARAMS (per-chain configuration)
// =============================================================================
/// Chain cùng cấu hình riêng của nó. Chỉ Bitcoin có options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "chain", rename_all = "lowercase")]
pub enum ChainParams {
    Bitcoin(BitcoinOptions),
    Ethereum,
    Solana,
}

impl ChainParams {
    pub fn chain_type(&self) -> ChainType {
        match self {
            ChainParams::Bitcoin(_) => ChainType::Bitcoin,
            ChainParams::Ethereum => ChainType::Ethereum,
            ChainParams::Solana => ChainType::Solana,
        }
    }

    /// Derived key → (private key hex, address)
    pub fn to_key_material(&self, key: &ExtendedKey) -> Result<KeyMaterial, AdapterError> {
        let secret = key.private_key().ok_or(AdapterError::MissingPrivateKey)?;

        let address = match self {
            ChainParams::Bitcoin(options) => BitcoinAddress::derive(&key.public_key(), options)?,
            ChainParams::Ethereum => EvmAddress::derive_from_slice(&*secret)?,
            ChainParams::Solana => SolanaAddress::derive(&secret)?,
        };

        debug!(chain = %self.chain_type(), depth = key.depth(), "key material ready");
        Ok(KeyMaterial::new(&secret, address))
    }
}

impl From<ChainType> for ChainParams {
    fn from(chain: ChainType) -> Self {
        match chain {
            ChainType::Bitcoin => ChainParams::Bitcoin(BitcoinOptions::default()),
            ChainType::Ethereum => ChainParams::Ethereum,
            ChainType::Solana => ChainParams::Solana,
        }
    }
}

impl From<BitcoinOptions> for ChainParams {
    fn from(options: BitcoinOptions) -> Self {
        ChainParams::Bitcoin(options)
    }
}

// =============================================================================
// KEY MATERIAL
// =============================================================================
/// Output của chain adapter. Private key hex tự zeroize khi drop.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    private_key_hex: Zeroizing<String>,
    address: String,
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("private_key_hex", &"[REDACTED]")
            .field("address", &self.address)
            .finish()
    }
}

impl KeyMaterial {
    fn new(secret: &[u8; 32], address: String) -> Self {
        Self {
            private_key_hex: Zeroizing::new(hex::encode(secret)),
            address,
        }
    }

    /// Lowercase hex, không có `0x`
    #[inline]
    pub fn private_key_hex(&self) -> &str {
        &self.private_key_hex
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }
}

// =============================================================================
// TESTS
// =============================================================================
