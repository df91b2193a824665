// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module - Address Derivation
// EIP-55 (Checksum), Keccak-256, secp256k1

use crate::crypto::hash::keccak256;
use crate::error::AdapterError;
use alloy_primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use zeroize::Zeroize;

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// # Security
/// - No Storage: Module này KHÔNG lưu private key
/// - `SecretKey` của k256 tự zeroize khi drop
pub struct EvmAddress;

impl EvmAddress {
    /// Derive 20 bytes address từ private key
    ///
    /// # Algorithm (chuẩn Ethereum Yellow Paper)
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Bỏ prefix byte 0x04 → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    ///
    /// The scalar must be a valid secp256k1 key (non-zero, below n).
    pub fn derive_bytes_from_slice(priv_key: &[u8]) -> Result<[u8; 20], AdapterError> {
        let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
            AdapterError::InvalidKey(format!("Invalid secp256k1 private key: {}", e))
        })?;

        let encoded = secret_key.public_key().to_encoded_point(false);
        let pub_key_raw = &encoded.as_bytes()[1..]; // Bỏ 0x04 prefix

        let mut hash = keccak256(pub_key_raw);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        hash.zeroize();

        Ok(address)
    }

    /// Derive EIP-55 checksummed address, `0x`-prefixed.
    ///
    /// # Returns
    /// `"0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B"` (mixed-case checksum)
    #[inline]
    pub fn derive_from_slice(priv_key: &[u8]) -> Result<String, AdapterError> {
        let bytes = Self::derive_bytes_from_slice(priv_key)?;
        Ok(Address::from_slice(&bytes).to_checksum(None))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Validate chuỗi có phải Ethereum address hợp lệ không
    ///
    /// Kiểm tra: `0x` prefix + 40 hex chars + EIP-55 checksum (nếu mixed case)
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        address.parse::<Address>().is_ok()
    }

    /// Normalize về EIP-55 checksum format
    pub fn to_checksum(address: &str) -> Result<String, AdapterError> {
        let addr: Address = address
            .parse()
            .map_err(|_| AdapterError::Encoding("Invalid Ethereum address format".to_string()))?;
        Ok(addr.to_checksum(None))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PRIVATE_KEY: &str =
        "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5";
    const TEST_ADDRESS: &str = "0xb611C31e4284BF7A7daD3296e62880F14b3b15DD";

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_derive() {
        let priv_key = hex::decode(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive_from_slice(&priv_key).unwrap(), TEST_ADDRESS);
    }

    #[test]
    fn test_derive_anvil() {
        let priv_key = hex::decode(ANVIL_PRIVATE_KEY).unwrap();
        assert_eq!(EvmAddress::derive_from_slice(&priv_key).unwrap(), ANVIL_ADDRESS);
    }

    #[test]
    fn test_scalar_one() {
        let mut priv_key = [0u8; 32];
        priv_key[31] = 1;
        let bytes = EvmAddress::derive_bytes_from_slice(&priv_key).unwrap();
        assert_eq!(hex::encode(bytes), "7e5f4552091a69125d5dfcb7b8c2659029395bdf");
    }

    #[test]
    fn test_derive_consistency() {
        let raw = hex::decode(TEST_PRIVATE_KEY).unwrap();
        let string_addr = EvmAddress::derive_from_slice(&raw).unwrap();
        let bytes_addr = EvmAddress::derive_bytes_from_slice(&raw).unwrap();
        assert_eq!(string_addr.to_lowercase(), format!("0x{}", hex::encode(bytes_addr)));
    }

    #[test]
    fn test_is_valid() {
        assert!(EvmAddress::is_valid(TEST_ADDRESS));
        assert!(EvmAddress::is_valid("0xdead000000000000000000000000000000000000"));

        assert!(!EvmAddress::is_valid("0xinvalid"));
        assert!(!EvmAddress::is_valid("0x123"));
        assert!(!EvmAddress::is_valid(""));
    }

    #[test]
    fn test_to_checksum() {
        let lowercase = "0xb611c31e4284bf7a7dad3296e62880f14b3b15dd";
        assert_eq!(EvmAddress::to_checksum(lowercase).unwrap(), TEST_ADDRESS);
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(EvmAddress::derive_from_slice(&[0u8; 31]).is_err());
        assert!(EvmAddress::derive_from_slice(&[0u8; 33]).is_err());
        assert!(EvmAddress::derive_from_slice(&[]).is_err());
    }

    #[test]
    fn test_zero_private_key_rejected() {
        assert!(matches!(
            EvmAddress::derive_from_slice(&[0u8; 32]),
            Err(AdapterError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_scalar_above_curve_order_rejected() {
        // n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
        let n = hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141").unwrap();
        assert!(EvmAddress::derive_from_slice(&n).is_err());
    }
}
