// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Path Error: {0}")]
    Path(#[from] ParseError),

    #[error("Derivation Error: {0}")]
    Derivation(#[from] DerivationError),

    #[error("Address Error: {0}")]
    Adapter(#[from] AdapterError),

    #[error("Envelope Error: {0}")]
    Cipher(#[from] CipherError),

    #[error("Validation Error: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("Entropy source unavailable.")]
    EntropyUnavailable,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

/// Malformed derivation path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid path component '{0}'")]
    InvalidComponent(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    /// Seed produced an out-of-range master scalar, or BIP32 rejected its length.
    #[error("seed does not produce a valid master key")]
    InvalidSeed,

    #[error("invalid seed length: expected 64 bytes, got {0}")]
    InvalidSeedLength(usize),

    #[error("child derivation failed at index {index}: {reason}")]
    ChildDerivationFailed { index: String, reason: String },

    #[error("hardened child {0} requires a private key")]
    HardenedFromPublic(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("extended key has no private scalar")]
    MissingPrivateKey,

    #[error("address encoding failed: {0}")]
    Encoding(String),
}

/// Envelope failures. `AuthenticationFailed` intentionally carries no detail:
/// a wrong password and a corrupted envelope are indistinguishable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("secure random source unavailable")]
    RandomSourceFailure,

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid KDF parameters: {0}")]
    InvalidKdfParams(String),
}
