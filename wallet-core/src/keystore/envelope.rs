//! Password envelope: scrypt + AES-256-GCM
//!
//! Byte layout (bit-exact, no length prefixes):
//!
//! ```text
//! salt[32] || nonce[12] || ciphertext || tag[16]
//! ```

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use rand::{rngs::OsRng, RngCore};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::kdf::{KdfParams, KEY_LENGTH, SALT_LENGTH};
use crate::error::CipherError;

/// AES-GCM nonce length (96-bit)
pub const NONCE_LENGTH: usize = 12;
/// AES-GCM authentication tag length (128-bit)
pub const TAG_LENGTH: usize = 16;
/// salt + nonce
pub const HEADER_LENGTH: usize = SALT_LENGTH + NONCE_LENGTH;

/// Self-contained encrypted blob; only the password is needed to open it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedEnvelope {
    salt: [u8; SALT_LENGTH],
    nonce: [u8; NONCE_LENGTH],
    ciphertext: Vec<u8>,
}

impl EncryptedEnvelope {
    /// Split raw envelope bytes. Anything shorter than the 44-byte header is
    /// rejected before any key derivation happens.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CipherError> {
        if bytes.len() < HEADER_LENGTH {
            return Err(CipherError::MalformedEnvelope(format!(
                "expected at least {} bytes, got {}",
                HEADER_LENGTH,
                bytes.len()
            )));
        }

        let mut salt = [0u8; SALT_LENGTH];
        let mut nonce = [0u8; NONCE_LENGTH];
        salt.copy_from_slice(&bytes[..SALT_LENGTH]);
        nonce.copy_from_slice(&bytes[SALT_LENGTH..HEADER_LENGTH]);

        Ok(Self {
            salt,
            nonce,
            ciphertext: bytes[HEADER_LENGTH..].to_vec(),
        })
    }

    pub fn from_hex(encoded: &str) -> Result<Self, CipherError> {
        let bytes = hex::decode(encoded.trim())
            .map_err(|e| CipherError::MalformedEnvelope(format!("invalid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Lowercase hex of [`to_bytes`](Self::to_bytes)
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Total envelope length in bytes
    pub fn len(&self) -> usize {
        HEADER_LENGTH + self.ciphertext.len()
    }

    /// Luôn `false`: envelope hợp lệ có ít nhất header 44 bytes
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; NONCE_LENGTH] {
        &self.nonce
    }

    /// Ciphertext with the 16-byte tag appended
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }
}

/// Envelope cipher with fixed KDF cost.
///
/// Stateless apart from the cost parameters; safe to share across threads.
/// Every `seal` draws a fresh salt and nonce from the OS RNG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvelopeCipher {
    params: KdfParams,
}

impl EnvelopeCipher {
    pub fn new(params: KdfParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &KdfParams {
        &self.params
    }

    /// Encrypt `plaintext` under `password`
    pub fn seal(&self, plaintext: &[u8], password: &str) -> Result<EncryptedEnvelope, CipherError> {
        let mut salt = [0u8; SALT_LENGTH];
        fill_random(&mut salt)?;

        let key = self.params.derive_key(password, &salt)?;

        let mut nonce = [0u8; NONCE_LENGTH];
        fill_random(&mut nonce)?;

        let ciphertext = aead(&key)
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        debug!(
            plaintext_len = plaintext.len(),
            envelope_len = HEADER_LENGTH + ciphertext.len(),
            "sealed envelope"
        );

        Ok(EncryptedEnvelope {
            salt,
            nonce,
            ciphertext,
        })
    }

    /// Decrypt an envelope.
    ///
    /// Wrong password, flipped bits and truncated tags all map to
    /// `AuthenticationFailed`.
    pub fn open(&self, envelope: &EncryptedEnvelope, password: &str) -> Result<Zeroizing<Vec<u8>>, CipherError> {
        let key = self.params.derive_key(password, &envelope.salt)?;

        match aead(&key).decrypt(Nonce::from_slice(&envelope.nonce), envelope.ciphertext.as_slice()) {
            Ok(plaintext) => {
                debug!(envelope_len = envelope.len(), "opened envelope");
                Ok(Zeroizing::new(plaintext))
            }
            Err(_) => {
                warn!(envelope_len = envelope.len(), "envelope authentication failed");
                Err(CipherError::AuthenticationFailed)
            }
        }
    }

    /// [`open`](Self::open) on raw envelope bytes
    pub fn open_bytes(&self, bytes: &[u8], password: &str) -> Result<Zeroizing<Vec<u8>>, CipherError> {
        let envelope = EncryptedEnvelope::from_bytes(bytes)?;
        self.open(&envelope, password)
    }
}

fn aead(key: &[u8; KEY_LENGTH]) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key))
}

fn fill_random(buf: &mut [u8]) -> Result<(), CipherError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|_| CipherError::RandomSourceFailure)
}
