// wallet-core/src/chains/bitcoin/address.rs
//
// Bitcoin Address Module
// P2PKH (Base58Check), P2SH-P2WPKH (BIP-49), P2WPKH (BIP-173 Bech32)

use super::{AddressFormat, BitcoinOptions};
use crate::crypto::hash::hash160;
use crate::error::AdapterError;
use bech32::{u5, ToBase32, Variant};

/// Witness version 0
const WITNESS_V0: u8 = 0x00;
/// OP_0 <push 20 bytes>
const P2WPKH_SCRIPT_PREFIX: [u8; 2] = [0x00, 0x14];

/// Bitcoin Address Generator
///
/// # Flow:  Public Key (33B compressed) → hash160 → encode theo format
pub struct BitcoinAddress;

impl BitcoinAddress {
    /// Encode address cho compressed public key theo `options`
    pub fn derive(public_key: &[u8; 33], options: &BitcoinOptions) -> Result<String, AdapterError> {
        let pubkey_hash = hash160(public_key);
        let network = options.network;

        match options.format {
            AddressFormat::Legacy => Ok(Self::base58check(network.p2pkh_version(), &pubkey_hash)),
            AddressFormat::SegwitWrapped => {
                let script_hash = Self::p2wpkh_script_hash(&pubkey_hash);
                Ok(Self::base58check(network.p2sh_version(), &script_hash))
            }
            AddressFormat::Bech32 => Self::segwit_v0(network.bech32_hrp(), &pubkey_hash),
        }
    }

    /// hash160(0x00 0x14 ‖ pubkey_hash) - redeem script hash của P2SH-P2WPKH
    fn p2wpkh_script_hash(pubkey_hash: &[u8; 20]) -> [u8; 20] {
        let mut script = [0u8; 22];
        script[..2].copy_from_slice(&P2WPKH_SCRIPT_PREFIX);
        script[2..].copy_from_slice(pubkey_hash);
        hash160(&script)
    }

    fn base58check(version: u8, payload: &[u8; 20]) -> String {
        let mut data = [0u8; 21];
        data[0] = version;
        data[1..].copy_from_slice(payload);
        bs58::encode(data).with_check().into_string()
    }

    fn segwit_v0(hrp: &str, program: &[u8; 20]) -> Result<String, AdapterError> {
        let version = u5::try_from_u8(WITNESS_V0).map_err(|e| AdapterError::Encoding(e.to_string()))?;

        let mut data = Vec::with_capacity(1 + 32);
        data.push(version);
        data.extend(program.to_base32());

        bech32::encode(hrp, data, Variant::Bech32).map_err(|e| AdapterError::Encoding(e.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
