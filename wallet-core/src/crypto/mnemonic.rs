// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 wrapper (mnemonic provider)
// Chuẩn: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Số lượng words hỗ trợ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    #[default]
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Lấy số bytes entropy cần thiết
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    pub fn from_count(count: usize) -> WalletResult<Self> {
        match count {
            12 => Ok(WordCount::Twelve),
            15 => Ok(WordCount::Fifteen),
            18 => Ok(WordCount::Eighteen),
            21 => Ok(WordCount::TwentyOne),
            24 => Ok(WordCount::TwentyFour),
            other => Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(other))),
        }
    }
}

/// Wallet Mnemonic - BIP-39 phrase holder
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: Phrase được tự động ghi đè bằng 0 khi struct bị drop
/// - **CSPRNG**: Sử dụng `OsRng` (OS-level cryptographically secure RNG)
/// - **No Debug Leak**: Custom Debug impl không hiển thị phrase
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị mnemonic phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Tạo mnemonic mới với 12 words (128-bit entropy)
    pub fn generate() -> WalletResult<Self> {
        Self::with_word_count(WordCount::Twelve)
    }

    /// Tạo mnemonic với số lượng words tùy chỉnh
    pub fn with_word_count(word_count: WordCount) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        // Stack-allocated entropy buffer (max 32 bytes), zeroize khi drop
        let mut entropy = Zeroizing::new([0u8; 32]);
        OsRng
            .try_fill_bytes(&mut entropy[..entropy_size])
            .map_err(|_| MnemonicError::EntropyUnavailable)?;

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size])
            .map_err(|e| MnemonicError::Bip39Error(e.to_string()))?;

        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Khôi phục mnemonic từ phrase có sẵn
    ///
    /// # Validation
    /// - Kiểm tra số lượng words (12, 15, 18, 21, 24)
    /// - Kiểm tra từng word có trong BIP-39 wordlist
    /// - Kiểm tra checksum
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        // Normalize whitespace và count words
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();
        WordCount::from_count(count)?;

        let normalized_phrase = normalized.join(" ");
        Self::parse(&normalized_phrase)?;

        Ok(Self {
            phrase: normalized_phrase,
            word_count: count,
        })
    }

    fn parse(phrase: &str) -> Result<Mnemonic, MnemonicError> {
        Mnemonic::parse(phrase).map_err(|e| {
            let msg = e.to_string();
            if msg.contains("invalid word") || msg.contains("unknown word") {
                MnemonicError::UnknownWord(msg)
            } else if msg.contains("checksum") {
                MnemonicError::ChecksumFailed
            } else {
                MnemonicError::Bip39Error(msg)
            }
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// Lấy mnemonic phrase
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// Tạo 64-byte seed từ mnemonic (PBKDF2-HMAC-SHA512, 2048 rounds)
    ///
    /// # Arguments
    /// * `passphrase` - Optional BIP-39 passphrase
    ///
    /// # Security Note
    /// Passphrase khác với password của envelope. Nếu mất passphrase, không
    /// thể khôi phục ví ngay cả khi có mnemonic phrase.
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Self::parse(&self.phrase)?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or(""))))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Full validation: word count, wordlist, checksum
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
