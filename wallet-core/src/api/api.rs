// wallet-core/src/api/api.rs

use tracing::debug;
use zeroize::Zeroizing;

use crate::chains::{ChainParams, ChainType, KeyMaterial};
use crate::crypto::{KeyDeriver, WalletMnemonic, WordCount};
use crate::error::{WalletError, WalletResult};
use crate::keystore::{EncryptedEnvelope, EnvelopeCipher};

// --- Key Derivation ---

/// Seed (64 bytes) + path → private key hex và address của chain.
///
/// `chain` nhận [`ChainType`] (Bitcoin mặc định legacy mainnet),
/// [`BitcoinOptions`](crate::chains::BitcoinOptions) hoặc [`ChainParams`].
pub fn derive_for_chain(
    seed: &[u8],
    path: &str,
    chain: impl Into<ChainParams>,
) -> WalletResult<KeyMaterial> {
    let params = chain.into();
    let key = KeyDeriver::derive(seed, path)?;
    let material = params.to_key_material(&key)?;

    debug!(chain = %params.chain_type(), path, "derived key material");
    Ok(material)
}

/// [`derive_for_chain`] tại default path của chain
pub fn derive_default(seed: &[u8], chain: ChainType) -> WalletResult<KeyMaterial> {
    derive_for_chain(seed, chain.default_path(), chain)
}

/// Mnemonic → seed → key material. Seed không rời khỏi hàm này.
pub fn derive_from_mnemonic(
    phrase: &str,
    passphrase: Option<&str>,
    path: &str,
    chain: impl Into<ChainParams>,
) -> WalletResult<KeyMaterial> {
    let mnemonic = WalletMnemonic::from_phrase(phrase)?;
    let seed = mnemonic.to_seed(passphrase)?;
    derive_for_chain(seed.as_slice(), path, chain)
}

// --- Mnemonic ---

pub fn generate_mnemonic(word_count: WordCount) -> WalletResult<Zeroizing<String>> {
    let mnemonic = WalletMnemonic::with_word_count(word_count)?;
    Ok(Zeroizing::new(mnemonic.phrase().to_string()))
}

pub fn validate_mnemonic(phrase: &str) -> bool {
    WalletMnemonic::validate(phrase)
}

// --- Secret Envelope ---

/// Seal `secret` under `password` with the default scrypt cost.
///
/// Returns `salt || nonce || ciphertext || tag`.
pub fn encrypt_secret(secret: &[u8], password: &str) -> WalletResult<Vec<u8>> {
    let envelope = EnvelopeCipher::default().seal(secret, password)?;
    Ok(envelope.to_bytes())
}

pub fn decrypt_secret(envelope: &[u8], password: &str) -> WalletResult<Zeroizing<Vec<u8>>> {
    Ok(EnvelopeCipher::default().open_bytes(envelope, password)?)
}

/// Hex variant: `secret_hex` (optional `0x`) → envelope hex
pub fn encrypt_secret_hex(secret_hex: &str, password: &str) -> WalletResult<String> {
    let secret = Zeroizing::new(decode_secret_hex(secret_hex)?);
    let envelope = EnvelopeCipher::default().seal(&secret, password)?;
    Ok(envelope.to_hex())
}

/// Hex variant: envelope hex → secret hex (lowercase, không `0x`)
pub fn decrypt_secret_hex(envelope_hex: &str, password: &str) -> WalletResult<Zeroizing<String>> {
    let envelope = EncryptedEnvelope::from_hex(envelope_hex)?;
    let secret = EnvelopeCipher::default().open(&envelope, password)?;
    Ok(Zeroizing::new(hex::encode(secret.as_slice())))
}

fn decode_secret_hex(secret_hex: &str) -> WalletResult<Vec<u8>> {
    let trimmed = secret_hex.trim();
    let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(stripped).map_err(|e| WalletError::Validation(format!("invalid secret hex: {}", e)))
}

// =============================================================================
// TESTS
// =============================================================================
