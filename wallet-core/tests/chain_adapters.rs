// wallet-core/tests/chain_adapters.rs
//
// End-to-end: mnemonic → seed → path → (private key hex, address)

use multichain_wallet_core::api;
use multichain_wallet_core::chains::{
    AddressFormat, BitcoinNetwork, BitcoinOptions, ChainParams, ChainType, SolanaAddress,
};
use multichain_wallet_core::crypto::{DerivationPaths, KeyDeriver, WalletMnemonic};

const PHRASE: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn seed() -> Vec<u8> {
    WalletMnemonic::from_phrase(PHRASE).unwrap().to_seed(None).unwrap().to_vec()
}

#[test]
fn ethereum_bip44_account_zero() {
    let material = api::derive_for_chain(&seed(), DerivationPaths::EVM_0, ChainType::Ethereum).unwrap();
    assert_eq!(
        material.private_key_hex(),
        "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
    );
    assert_eq!(material.address(), "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
}

#[test]
fn bitcoin_three_formats() {
    let legacy = api::derive_for_chain(&seed(), DerivationPaths::BTC_LEGACY_0, ChainType::Bitcoin).unwrap();
    assert_eq!(legacy.address(), "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");

    let bech32 = api::derive_for_chain(
        &seed(),
        DerivationPaths::BTC_NATIVE_SEGWIT_0,
        BitcoinOptions::new(AddressFormat::Bech32),
    )
    .unwrap();
    assert_eq!(bech32.address(), "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");

    let wrapped = api::derive_for_chain(
        &seed(),
        "m/49'/1'/0'/0/0",
        BitcoinOptions::new(AddressFormat::SegwitWrapped).with_network(BitcoinNetwork::Testnet),
    )
    .unwrap();
    assert_eq!(wrapped.address(), "2Mww8dCYPUpKHofjgcXcBCEGmniw9CoaiD2");
}

#[test]
fn same_key_different_formats() {
    let seed = seed();
    let addresses: Vec<String> = [AddressFormat::Legacy, AddressFormat::SegwitWrapped, AddressFormat::Bech32]
        .into_iter()
        .map(|format| {
            api::derive_for_chain(&seed, DerivationPaths::BTC_LEGACY_0, BitcoinOptions::new(format))
                .unwrap()
                .address()
                .to_string()
        })
        .collect();

    assert!(addresses[0].starts_with('1'));
    assert!(addresses[1].starts_with('3'));
    assert!(addresses[2].starts_with("bc1q"));
    assert_ne!(addresses[0], addresses[1]);
    assert_ne!(addresses[1], addresses[2]);
}

#[test]
fn unknown_format_name_falls_back_to_legacy() {
    let options = BitcoinOptions::new(AddressFormat::from_name(Some("taproot")));
    let material = api::derive_for_chain(&seed(), DerivationPaths::BTC_LEGACY_0, options).unwrap();
    assert_eq!(material.address(), "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
}

#[test]
fn solana_private_key_is_secp256k1_scalar() {
    let seed = seed();
    let material = api::derive_for_chain(&seed, DerivationPaths::SOLANA_0, ChainType::Solana).unwrap();
    let key = KeyDeriver::derive(&seed, DerivationPaths::SOLANA_0).unwrap();
    let scalar = key.private_key().unwrap();

    assert_eq!(material.private_key_hex(), hex::encode(*scalar));
    assert_eq!(material.address(), SolanaAddress::derive(&scalar).unwrap());
    assert_eq!(bs58::decode(material.address()).into_vec().unwrap().len(), 32);
}

#[test]
fn chain_params_from_json() {
    let params: ChainParams =
        serde_json::from_str(r#"{"chain":"bitcoin","format":"bech32","network":"mainnet"}"#).unwrap();
    let material = api::derive_for_chain(&seed(), DerivationPaths::BTC_NATIVE_SEGWIT_0, params).unwrap();
    assert_eq!(material.address(), "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
}

#[test]
fn derivation_is_deterministic() {
    for chain in ChainType::ALL {
        let first = api::derive_default(&seed(), chain).unwrap();
        let second = api::derive_default(&seed(), chain).unwrap();
        assert_eq!(first, second, "{}", chain);
    }
}

#[test]
fn batch_matches_individual_derivation() {
    let seed = seed();
    let keys = KeyDeriver::derive_batch(&seed, "m/44'/60'/0'/0", 0..4).unwrap();
    assert_eq!(keys.len(), 4);

    for (index, key) in keys.iter().enumerate() {
        let single = KeyDeriver::derive(&seed, &DerivationPaths::evm(index as u32)).unwrap();
        assert_eq!(key.private_key(), single.private_key());
    }
}
