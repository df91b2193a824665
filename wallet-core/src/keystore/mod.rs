//! Password-protected storage for exported private keys
//!
//! - scrypt KDF (N=32768, r=8, p=1) turns a password + random salt into a 256-bit key
//! - AES-256-GCM seals the secret with a random 96-bit nonce, no associated data
//! - The envelope carries its own salt and nonce, so the password alone opens it
//!
//! # Example
//!
//! ```rust
//! use multichain_wallet_core::keystore::{EnvelopeCipher, KdfParams};
//!
//! let cipher = EnvelopeCipher::new(KdfParams::light());
//! let envelope = cipher.seal(b"private key bytes", "hunter2").unwrap();
//! let opened = cipher.open(&envelope, "hunter2").unwrap();
//! assert_eq!(&*opened, b"private key bytes");
//! ```

mod envelope;
mod kdf;

pub use envelope::{EncryptedEnvelope, EnvelopeCipher, HEADER_LENGTH, NONCE_LENGTH, TAG_LENGTH};
pub use kdf::{KdfParams, KEY_LENGTH, SALT_LENGTH, SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R};
