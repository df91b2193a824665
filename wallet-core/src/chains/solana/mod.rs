// wallet-core/src/chains/solana/mod.rs

//! Solana Chain Support (non-standard derivation)
//!
//! Address được tính từ secp256k1 scalar của BIP-32 walk, không phải SLIP-0010
//! Ed25519 derivation. Xem [`SolanaAddress`] trước khi dùng với wallet khác.

pub mod address;

pub use address::SolanaAddress;
