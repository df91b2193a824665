// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - default paths cho 3 chain được hỗ trợ
// BIP-44 (Purpose), SLIP-44 (Coin Types), BIP-84/49 (Bitcoin SegWit)

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const BITCOIN: u32 = 0;
    pub const BITCOIN_TESTNET: u32 = 1;
    pub const ETHEREUM: u32 = 60;
    pub const SOLANA: u32 = 501;
}

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Pre-built Derivation Paths
///
/// # Conventions
/// - BIP-44: `m/44'/coin'/account'/change/index`
/// - BIP-84: `m/84'/0'/account'/change/index` (Bitcoin Native SegWit)
/// - BIP-49: `m/49'/0'/account'/change/index` (Bitcoin Nested SegWit)
///
/// Mọi chain ở đây đều derive trên secp256k1. Solana path chỉ quyết định
/// secp256k1 scalar đầu vào cho scheme không chuẩn (xem `chains::solana`).
pub struct DerivationPaths;

impl DerivationPaths {
    // =========================================================================
    // EVM (coin_type = 60)
    // =========================================================================
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";

    /// EVM path with custom address index
    #[inline]
    pub fn evm(index: u32) -> String {
        format!("m/44'/60'/0'/0/{}", index)
    }

    /// EVM path with custom account & index (multi-account)
    #[inline]
    pub fn evm_account(account: u32, index: u32) -> String {
        format!("m/44'/60'/{}'/0/{}", account, index)
    }

    // =========================================================================
    // BITCOIN - Multiple standards
    // =========================================================================
    /// BIP-44: Legacy (1...) - default path của wallet
    pub const BTC_LEGACY_0: &'static str = "m/44'/0'/0'/0/0";

    /// BIP-49: Nested SegWit (3...)
    pub const BTC_NESTED_SEGWIT_0: &'static str = "m/49'/0'/0'/0/0";

    /// BIP-84: Native SegWit (bc1q...)
    pub const BTC_NATIVE_SEGWIT_0: &'static str = "m/84'/0'/0'/0/0";

    #[inline]
    pub fn btc_legacy(account: u32, index: u32) -> String {
        format!("m/44'/0'/{}'/0/{}", account, index)
    }

    #[inline]
    pub fn btc_nested_segwit(account: u32, index: u32) -> String {
        format!("m/49'/0'/{}'/0/{}", account, index)
    }

    #[inline]
    pub fn btc_native_segwit(account: u32, index: u32) -> String {
        format!("m/84'/0'/{}'/0/{}", account, index)
    }

    // =========================================================================
    // SOLANA (coin_type = 501)
    // Last level KHÔNG hardened: đây là secp256k1 walk, không phải SLIP-0010
    // =========================================================================
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0";

    #[inline]
    pub fn solana(account: u32) -> String {
        format!("m/44'/501'/{}'/0", account)
    }

    // =========================================================================
    // CUSTOM PATH BUILDER
    // =========================================================================
    /// Tạo BIP-44 path tùy chỉnh
    ///
    /// # Arguments
    /// * `purpose` - 44 (BIP-44), 84 (BIP-84 SegWit), 49 (BIP-49)
    /// * `coin_type` - SLIP-44 coin type (dùng constants từ `coin_type::*`)
    /// * `account` - Account index (thường 0)
    /// * `change` - 0 = external (nhận tiền), 1 = internal (thối tiền)
    /// * `index` - Address index
    #[inline]
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            purpose, coin_type, account, change, index
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
