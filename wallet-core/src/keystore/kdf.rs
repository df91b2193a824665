//! Key Derivation Function (KDF) implementation
//!
//! scrypt-based password → 256-bit key. Default cost N=32768 (2^15), r=8, p=1.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::CipherError;

/// log2(N): N = 32768
pub const SCRYPT_LOG_N: u8 = 15;
/// Block size
pub const SCRYPT_R: u32 = 8;
/// Parallelization
pub const SCRYPT_P: u32 = 1;
/// Derived key length (AES-256)
pub const KEY_LENGTH: usize = 32;
/// Salt length in bytes
pub const SALT_LENGTH: usize = 32;

/// scrypt cost parameters.
///
/// Envelopes do not record these; seal and open must use the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    /// log2 of the CPU/memory cost N
    pub log_n: u8,
    /// Block size parameter
    pub r: u32,
    /// Parallelization parameter
    pub p: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            log_n: SCRYPT_LOG_N,
            r: SCRYPT_R,
            p: SCRYPT_P,
        }
    }
}

impl KdfParams {
    /// N=1024 preset for tests and local development. Not for real secrets.
    pub const fn light() -> Self {
        Self {
            log_n: 10,
            r: SCRYPT_R,
            p: SCRYPT_P,
        }
    }

    /// CPU/memory cost N
    pub fn n(&self) -> u64 {
        1u64 << self.log_n
    }

    /// Derive a 32-byte key from the given password and salt
    pub fn derive_key(&self, password: &str, salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LENGTH]>, CipherError> {
        let params = scrypt::Params::new(self.log_n, self.r, self.p, KEY_LENGTH)
            .map_err(|e| CipherError::InvalidKdfParams(e.to_string()))?;

        let mut output = Zeroizing::new([0u8; KEY_LENGTH]);
        scrypt::scrypt(password.as_bytes(), salt, &params, output.as_mut_slice())
            .map_err(|e| CipherError::InvalidKdfParams(e.to_string()))?;

        Ok(output)
    }
}
