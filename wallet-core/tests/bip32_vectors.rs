// wallet-core/tests/bip32_vectors.rs
//
// BIP-32 test vector 1 (seed 000102030405060708090a0b0c0d0e0f)

use multichain_wallet_core::crypto::{DerivationPath, KeyDeriver};
use multichain_wallet_core::error::{DerivationError, WalletError};

const SEED: &str = "000102030405060708090a0b0c0d0e0f";

fn master() -> multichain_wallet_core::ExtendedKey {
    KeyDeriver::derive_master_key(&hex::decode(SEED).unwrap()).unwrap()
}

#[test]
fn master_key_matches_vector() {
    let master = master();
    assert_eq!(
        hex::encode(*master.private_key().unwrap()),
        "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
    );
    assert_eq!(
        hex::encode(master.chain_code()),
        "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"
    );
    assert_eq!(master.depth(), 0);
    assert_eq!(master.parent_fingerprint(), [0u8; 4]);
    assert_eq!(hex::encode(master.fingerprint()), "3442193e");
}

#[test]
fn chain_m_0h_1_2h() {
    let path = DerivationPath::parse("m/0'/1/2'").unwrap();
    let key = KeyDeriver::derive_along_path(&master(), &path).unwrap();

    assert_eq!(key.depth(), 3);
    assert!(key.is_hardened());
    assert_eq!(
        hex::encode(key.chain_code()),
        "04466b9cc8e161e966409ca52986c584f07e9dc81f735db683c3ff6ec7b1503f"
    );
    assert_eq!(
        hex::encode(*key.private_key().unwrap()),
        "cbce0d719ecf7431d88e6a89fa1483e02e35092af60c042b1df2ff59fa424dca"
    );
    assert_eq!(
        hex::encode(key.public_key()),
        "0357bfe1e341d01c69fe5654309956cbea516822fba8a601743a012a7896ee8dc2"
    );
    assert_eq!(hex::encode(key.parent_fingerprint()), "bef5a2f9");
    assert_eq!(hex::encode(key.fingerprint()), "ee7ab90c");
    assert_eq!(
        key.to_xpub(),
        "xpub6D4BDPcP2GT577Vvch3R8wDkScZWzQzMMUm3PWbmWvVJrZwQY4VUNgqFJPMM3No2dFDFGTsxxpG5uJh7n7epu4trkrX7x7DogT5Uv6fcLW5"
    );
}

#[test]
fn step_by_step_equals_full_walk() {
    let full = KeyDeriver::derive_along_path(&master(), &DerivationPath::parse("m/0'/1/2'").unwrap()).unwrap();

    let mut key = master();
    for step in DerivationPath::parse("m/0'/1/2'").unwrap().iter() {
        key = key.derive_child(*step).unwrap();
    }
    assert_eq!(key.private_key(), full.private_key());
    assert_eq!(key.chain_code(), full.chain_code());
}

#[test]
fn neutered_key_derives_same_public_child() {
    let parent = KeyDeriver::derive_along_path(&master(), &DerivationPath::parse("m/0'").unwrap()).unwrap();
    let path = DerivationPath::parse("m/1").unwrap();

    let private_child = KeyDeriver::derive_along_path(&parent, &path).unwrap();
    let public_child = KeyDeriver::derive_along_path(&parent.neuter(), &path).unwrap();

    assert!(!public_child.has_private_key());
    assert_eq!(private_child.public_key(), public_child.public_key());
    assert_eq!(private_child.chain_code(), public_child.chain_code());
}

#[test]
fn hardened_step_from_public_key_fails() {
    let public = master().neuter();
    let path = DerivationPath::parse("m/0'").unwrap();
    assert!(matches!(
        KeyDeriver::derive_along_path(&public, &path),
        Err(DerivationError::HardenedFromPublic(_))
    ));
}

#[test]
fn short_seed_rejected_by_path_derivation() {
    assert_eq!(
        KeyDeriver::derive(&hex::decode(SEED).unwrap(), "m/0").unwrap_err(),
        WalletError::Derivation(DerivationError::InvalidSeedLength(16))
    );
}
