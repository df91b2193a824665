// wallet-core/src/chains/bitcoin/mod.rs

//! Bitcoin Chain Support
//!
//! - **Address Derivation**: P2PKH, P2SH-P2WPKH và Bech32 P2WPKH via [`BitcoinAddress`].
//! - **Networks**: Mainnet (mặc định) và Testnet version bytes / HRP via [`BitcoinNetwork`].

pub mod address;

pub use address::BitcoinAddress;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bitcoin address format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressFormat {
    /// P2PKH (1...)
    #[default]
    Legacy,
    /// P2SH-wrapped SegWit v0 (3...)
    SegwitWrapped,
    /// Native SegWit v0 P2WPKH (bc1q...)
    Bech32,
}

impl AddressFormat {
    /// Lenient lookup: unrecognized or missing names fall back to `Legacy`.
    pub fn from_name(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return AddressFormat::Legacy;
        };
        match name.trim().to_ascii_lowercase().as_str() {
            "segwit" | "segwit_wrapped" | "p2sh-segwit" | "nested" => AddressFormat::SegwitWrapped,
            "bech32" | "native" | "p2wpkh" => AddressFormat::Bech32,
            _ => AddressFormat::Legacy,
        }
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressFormat::Legacy => "legacy",
            AddressFormat::SegwitWrapped => "segwit",
            AddressFormat::Bech32 => "bech32",
        };
        f.write_str(name)
    }
}

/// Network parameters: version bytes + bech32 HRP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitcoinNetwork {
    #[default]
    Mainnet,
    Testnet,
}

impl BitcoinNetwork {
    pub const fn p2pkh_version(self) -> u8 {
        match self {
            BitcoinNetwork::Mainnet => 0x00,
            BitcoinNetwork::Testnet => 0x6f,
        }
    }

    pub const fn p2sh_version(self) -> u8 {
        match self {
            BitcoinNetwork::Mainnet => 0x05,
            BitcoinNetwork::Testnet => 0xc4,
        }
    }

    pub const fn bech32_hrp(self) -> &'static str {
        match self {
            BitcoinNetwork::Mainnet => "bc",
            BitcoinNetwork::Testnet => "tb",
        }
    }
}

/// Bitcoin-specific adapter options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitcoinOptions {
    #[serde(default)]
    pub format: AddressFormat,
    #[serde(default)]
    pub network: BitcoinNetwork,
}

impl BitcoinOptions {
    pub fn new(format: AddressFormat) -> Self {
        Self {
            format,
            network: BitcoinNetwork::Mainnet,
        }
    }

    pub fn with_network(mut self, network: BitcoinNetwork) -> Self {
        self.network = network;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_name() {
        assert_eq!(AddressFormat::from_name(Some("legacy")), AddressFormat::Legacy);
        assert_eq!(AddressFormat::from_name(Some("SegWit")), AddressFormat::SegwitWrapped);
        assert_eq!(AddressFormat::from_name(Some("bech32")), AddressFormat::Bech32);
        assert_eq!(AddressFormat::from_name(Some("taproot")), AddressFormat::Legacy);
        assert_eq!(AddressFormat::from_name(None), AddressFormat::Legacy);
    }

    #[test]
    fn test_format_display_roundtrip() {
        for format in [AddressFormat::Legacy, AddressFormat::SegwitWrapped, AddressFormat::Bech32] {
            assert_eq!(AddressFormat::from_name(Some(&format.to_string())), format);
        }
    }

    #[test]
    fn test_default_options() {
        let options = BitcoinOptions::default();
        assert_eq!(options.format, AddressFormat::Legacy);
        assert_eq!(options.network, BitcoinNetwork::Mainnet);
    }
}
