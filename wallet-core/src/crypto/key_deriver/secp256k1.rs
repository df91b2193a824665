// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Extended Key - BIP-32
//
// Dùng cho: Bitcoin, Ethereum, Solana (scheme không chuẩn, xem chains/solana)
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation (qua crate `bip32`)
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::crypto::derivation_path::{ChildStep, HARDENED_OFFSET};
use crate::error::DerivationError;
use bip32::{ChildNumber, ExtendedKeyAttrs, Prefix, XPrv, XPub};
use zeroize::Zeroizing;

/// BIP-32 extended key (private hoặc public-only)
///
/// # Security
/// - Private scalar nằm trong `XPrv`, được zeroize khi drop
/// - `private_key()` trả về `Zeroizing<[u8; 32]>`
/// - Debug không hiển thị key material
///
/// Immutable: mỗi lần derive tạo instance mới.
#[derive(Clone)]
pub struct ExtendedKey {
    inner: KeyKind,
}

#[derive(Clone)]
enum KeyKind {
    Private(XPrv),
    Public(XPub),
}

impl std::fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("has_private_key", &self.has_private_key())
            .field("depth", &self.depth())
            .field("child_index", &self.child_index())
            .field("public_key", &hex::encode(self.public_key()))
            .finish_non_exhaustive()
    }
}

impl ExtendedKey {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Master key: I = HMAC-SHA512(Key = "Bitcoin seed", Data = seed)
    ///
    /// Fails with `InvalidSeed` when IL is zero or ≥ n, or the seed length
    /// is not one the `bip32` crate accepts (16, 32 or 64 bytes).
    pub fn master(seed: &[u8]) -> Result<Self, DerivationError> {
        let xprv = XPrv::new(seed).map_err(|_| DerivationError::InvalidSeed)?;
        Ok(Self {
            inner: KeyKind::Private(xprv),
        })
    }

    /// Derive child từ (parent, index, hardened)
    ///
    /// Hardened steps always go through the private scalar; a public-only key
    /// cannot produce a hardened child.
    pub fn derive_child(&self, step: ChildStep) -> Result<Self, DerivationError> {
        let child_number = ChildNumber::new(step.index(), step.is_hardened()).map_err(|e| {
            DerivationError::ChildDerivationFailed {
                index: step.to_string(),
                reason: e.to_string(),
            }
        })?;

        let failed = |e: bip32::Error| DerivationError::ChildDerivationFailed {
            index: step.to_string(),
            reason: e.to_string(),
        };

        let inner = match &self.inner {
            KeyKind::Private(xprv) => KeyKind::Private(xprv.derive_child(child_number).map_err(failed)?),
            KeyKind::Public(_) if step.is_hardened() => {
                return Err(DerivationError::HardenedFromPublic(step.to_string()));
            }
            KeyKind::Public(xpub) => KeyKind::Public(xpub.derive_child(child_number).map_err(failed)?),
        };

        Ok(Self { inner })
    }

    /// Public-only view of this key (drops the private scalar).
    pub fn neuter(&self) -> Self {
        let xpub = match &self.inner {
            KeyKind::Private(xprv) => xprv.public_key(),
            KeyKind::Public(xpub) => xpub.clone(),
        };
        Self {
            inner: KeyKind::Public(xpub),
        }
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn has_private_key(&self) -> bool {
        matches!(self.inner, KeyKind::Private(_))
    }

    /// 32-byte big-endian scalar, `None` cho public-only key
    pub fn private_key(&self) -> Option<Zeroizing<[u8; 32]>> {
        match &self.inner {
            KeyKind::Private(xprv) => Some(Zeroizing::new(xprv.to_bytes())),
            KeyKind::Public(_) => None,
        }
    }

    /// Compressed SEC1 public point (33 bytes)
    pub fn public_key(&self) -> [u8; 33] {
        self.xpub().to_bytes()
    }

    pub fn chain_code(&self) -> [u8; 32] {
        self.attrs().chain_code
    }

    pub fn depth(&self) -> u8 {
        self.attrs().depth
    }

    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.attrs().parent_fingerprint
    }

    /// Raw child number (hardened children include the 2^31 offset).
    pub fn child_index(&self) -> u32 {
        self.attrs().child_number.0
    }

    pub fn is_hardened(&self) -> bool {
        self.child_index() & HARDENED_OFFSET != 0
    }

    /// First 4 bytes of hash160(public key)
    pub fn fingerprint(&self) -> [u8; 4] {
        self.xpub().fingerprint()
    }

    // =========================================================================
    // SERIALIZATION (mainnet xprv / xpub)
    // =========================================================================

    pub fn to_xprv(&self) -> Option<Zeroizing<String>> {
        match &self.inner {
            KeyKind::Private(xprv) => Some(xprv.to_string(Prefix::XPRV)),
            KeyKind::Public(_) => None,
        }
    }

    pub fn to_xpub(&self) -> String {
        self.xpub().to_string(Prefix::XPUB)
    }

    fn attrs(&self) -> &ExtendedKeyAttrs {
        match &self.inner {
            KeyKind::Private(xprv) => xprv.attrs(),
            KeyKind::Public(xpub) => xpub.attrs(),
        }
    }

    fn xpub(&self) -> XPub {
        match &self.inner {
            KeyKind::Private(xprv) => xprv.public_key(),
            KeyKind::Public(xpub) => xpub.clone(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
