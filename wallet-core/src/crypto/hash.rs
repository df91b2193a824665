// wallet-core/src/crypto/hash.rs
//
// Hash chains dùng cho address encoding

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Sha3_512;
use tiny_keccak::{Hasher, Keccak};

/// RIPEMD160(SHA256(data)) - Bitcoin public-key / script hash
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);

    let mut out = [0u8; 20];
    out.copy_from_slice(&ripe);
    out
}

/// Keccak-256 (pre-NIST padding, như Ethereum)
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut out = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut out);
    out
}

/// SHA3-512 (NIST). Caller is responsible for zeroizing the output when it
/// carries key material.
pub fn sha3_512(data: &[u8]) -> [u8; 64] {
    let digest = Sha3_512::digest(data);

    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}
