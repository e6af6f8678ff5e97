//! End-to-end wallet scenarios: mnemonic → keys → accounts → signatures

use interchain_wallet_core::chains::evm::Eip55Checksum;
use interchain_wallet_core::chains::{AddressChecksum, AddressStrategy};
use interchain_wallet_core::*;
use std::collections::HashSet;
use std::sync::Arc;

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn registry() -> Registry {
    Registry::with_defaults().frozen()
}

/// strategy.hash(preprocess(pubkey)), computed without going through Address
fn expected_address_bytes(strategy: &dyn AddressStrategy, pubkey: &PublicKey) -> Vec<u8> {
    let data = match strategy.preprocessor() {
        Some(p) => p
            .preprocess(pubkey.as_bytes(), pubkey.is_compressed(), pubkey.algo().as_ref())
            .unwrap(),
        None => pubkey.as_bytes().to_vec(),
    };
    strategy.hash(&data)
}

#[test]
fn test_ethereum_address_of_test_mnemonic() {
    let registry = registry();
    let wallet = Wallet::from_mnemonic(
        TEST_MNEMONIC,
        &["m/44'/60'/0'/0/0".parse().unwrap()],
        WalletConfig::ethereum(),
        &registry,
    )
    .unwrap();

    let account = wallet.get_account_by_index(0).unwrap();
    assert_eq!(account.address.value(), "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    assert_eq!(account.pubkey.as_bytes().len(), 65);
    assert!(account.address.is_valid());
}

#[test]
fn test_osmo_prefix_shares_cosmos_bytes() {
    let registry = registry();
    let paths = [HdPath::cosmos(0, 0, 0)];
    let cosmos = Wallet::from_mnemonic(TEST_MNEMONIC, &paths, WalletConfig::cosmos(), &registry)
        .unwrap()
        .get_account_by_index(0)
        .unwrap();
    let osmo = Wallet::from_mnemonic(
        TEST_MNEMONIC,
        &paths,
        WalletConfig::cosmos().with_prefix("osmo"),
        &registry,
    )
    .unwrap()
    .get_account_by_index(0)
    .unwrap();

    // ^osmo1[a-z0-9]{38}$
    let value = osmo.address.value();
    let (hrp, data) = value.split_at(5);
    assert_eq!(hrp, "osmo1");
    assert_eq!(data.len(), 38);
    assert!(data.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

    assert_eq!(osmo.address.prefix(), Some("osmo"));
    assert_eq!(osmo.address.to_bytes().unwrap(), cosmos.address.to_bytes().unwrap());
    assert_eq!(osmo.address.to_bytes().unwrap().len(), 20);
}

#[test]
fn test_address_round_trip_for_every_strategy() {
    let registry = registry();
    let cases = [
        (WalletConfig::cosmos(), HdPath::cosmos(0, 0, 0)),
        (WalletConfig::ethereum(), HdPath::eth(0, 0, 0)),
        (WalletConfig::injective(), HdPath::eth(0, 0, 0)),
        (WalletConfig::solana(), HdPath::solana(0)),
    ];

    for (config, path) in cases {
        let strategy = config.address_config.strategy.resolve(&registry).unwrap();
        let keys = PrivateKey::from_mnemonic(
            TEST_MNEMONIC,
            &[path],
            &config.private_key_config,
            &registry,
        )
        .unwrap();
        let pubkey = keys[0].to_public_key(Some(config.public_key_config)).unwrap();

        let derived = Address::from_public_key(
            &pubkey,
            Arc::clone(&strategy),
            config.address_prefix.as_deref(),
        )
        .unwrap();
        let parsed = Address::from_string(derived.value(), Arc::clone(&strategy)).unwrap();

        assert_eq!(
            parsed.to_bytes().unwrap(),
            expected_address_bytes(strategy.as_ref(), &pubkey),
            "round trip failed for {}",
            strategy.name()
        );
        assert!(parsed.is_valid(), "{} should be valid", derived.value());
    }
}

#[test]
fn test_injective_and_ethereum_share_address_bytes() {
    let registry = registry();
    let path = [HdPath::eth(0, 0, 0)];
    let inj = Wallet::from_mnemonic(TEST_MNEMONIC, &path, WalletConfig::injective(), &registry)
        .unwrap()
        .get_account_by_index(0)
        .unwrap();
    let eth = Wallet::from_mnemonic(TEST_MNEMONIC, &path, WalletConfig::ethereum(), &registry)
        .unwrap()
        .get_account_by_index(0)
        .unwrap();

    assert!(inj.address.value().starts_with("inj1"));
    assert_eq!(inj.address.to_bytes().unwrap(), eth.address.to_bytes().unwrap());
}

#[test]
fn test_checksum_idempotence() {
    let registry = registry();
    let paths: Vec<HdPath> = (0..8).map(|i| HdPath::eth(0, 0, i)).collect();
    let wallet =
        Wallet::from_mnemonic(TEST_MNEMONIC, &paths, WalletConfig::ethereum(), &registry).unwrap();

    let mut inputs: Vec<String> = wallet
        .to_accounts()
        .unwrap()
        .into_iter()
        .map(|account| account.address.value().to_lowercase())
        .collect();
    inputs.push("0x0000000000000000000000000000000000000000".to_string());
    inputs.push("0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF".to_lowercase());

    for x in inputs {
        let once = Eip55Checksum.apply(&x);
        assert_eq!(Eip55Checksum.apply(&once), once);
        assert!(Eip55Checksum.validate(&once));
    }
}

#[test]
fn test_distinct_paths_give_distinct_addresses() {
    let registry = registry();
    let paths: Vec<HdPath> = (0..5).map(|i| HdPath::cosmos(0, 0, i)).collect();
    let wallet =
        Wallet::from_mnemonic(TEST_MNEMONIC, &paths, WalletConfig::cosmos(), &registry).unwrap();

    let accounts = wallet.to_accounts().unwrap();
    let unique: HashSet<&str> = accounts.iter().map(|a| a.address.value()).collect();
    assert_eq!(accounts.len(), 5);
    assert_eq!(unique.len(), 5);

    // deterministic across instances
    let again =
        Wallet::from_mnemonic(TEST_MNEMONIC, &paths, WalletConfig::cosmos(), &registry).unwrap();
    assert_eq!(again.to_accounts().unwrap(), accounts);
}

#[test]
fn test_index_bounds() {
    let registry = registry();
    let paths = [HdPath::cosmos(0, 0, 0), HdPath::cosmos(0, 0, 1)];
    let wallet =
        Wallet::from_mnemonic(TEST_MNEMONIC, &paths, WalletConfig::cosmos(), &registry).unwrap();

    assert!(wallet.get_account_by_index(0).is_ok());
    assert!(wallet.get_account_by_index(1).is_ok());
    assert!(matches!(
        wallet.get_account_by_index(2),
        Err(WalletError::InvalidKeyIndex { index: 2, len: 2 })
    ));
}

#[test]
fn test_compact_signature_scenario() {
    let mut sig = vec![0xaa; 32];
    sig.extend_from_slice(&[0xbb; 32]);
    sig.push(27);

    let compact = SignatureProcessor::process_named(&sig, Some("compact")).unwrap();
    assert_eq!(compact.len(), 64);
    assert_eq!(&compact[..32], &[0xaa; 32]);
    assert_eq!(&compact[32..], &[0xbb; 32]);
}

#[tokio::test]
async fn test_sign_keccak_digest_and_compact() {
    let registry = registry();
    let wallet = Wallet::from_mnemonic(
        TEST_MNEMONIC,
        &[HdPath::eth(0, 0, 0)],
        WalletConfig::injective(),
        &registry,
    )
    .unwrap();

    let digest = chains::evm::keccak256(b"sign doc bytes");
    let raw = wallet.sign_by_index(0, &digest).await.unwrap();
    let signature = EthSecp256k1Signature::new(raw.as_bytes());

    let compact = signature.to_compact().unwrap();
    assert_eq!(compact.as_bytes(), &raw.as_bytes()[..64]);

    let account = wallet.get_account_by_index(0).unwrap();
    assert!(account.pubkey.verify(&digest, compact.as_bytes()).await.unwrap());
    assert!(account.pubkey.verify(&digest, signature.to_full().unwrap().as_bytes()).await.unwrap());
}

#[tokio::test]
async fn test_solana_wallet_signs_message_bytes() {
    let registry = registry();
    let wallet = Wallet::from_mnemonic(
        TEST_MNEMONIC,
        &[HdPath::solana(0), HdPath::solana(1)],
        WalletConfig::solana(),
        &registry,
    )
    .unwrap();

    let account = wallet.get_account_by_index(0).unwrap();
    assert_eq!(account.pubkey.as_bytes().len(), 32);
    assert_eq!(account.address.to_bytes().unwrap(), account.pubkey.as_bytes());

    let sig = wallet.sign_by_index(0, b"any length message").await.unwrap();
    assert_eq!(sig.len(), 64);
    assert!(account.pubkey.verify(b"any length message", sig.as_bytes()).await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_signing_on_shared_wallet() {
    let registry = registry();
    let paths = [HdPath::eth(0, 0, 0), HdPath::eth(0, 0, 1)];
    let wallet = Arc::new(
        Wallet::from_mnemonic(TEST_MNEMONIC, &paths, WalletConfig::ethereum(), &registry).unwrap(),
    );
    let digest = [0x5cu8; 32];

    let expected = [
        wallet.sign_by_index(0, &digest).await.unwrap(),
        wallet.sign_by_index(1, &digest).await.unwrap(),
    ];

    let handles: Vec<_> = (0..16usize)
        .map(|i| {
            let wallet = Arc::clone(&wallet);
            tokio::spawn(async move { (i % 2, wallet.sign_by_index(i % 2, &digest).await) })
        })
        .collect();

    for handle in handles {
        let (index, sig) = handle.await.unwrap();
        assert_eq!(sig.unwrap(), expected[index]);
    }
}

#[test]
fn test_custom_strategy_through_config() {
    /// Cosmos hashing with a fixed "juno" default prefix
    struct Juno;

    impl AddressStrategy for Juno {
        fn name(&self) -> &str {
            "juno"
        }
        fn hash(&self, data: &[u8]) -> Vec<u8> {
            chains::cosmos::hash160(data).to_vec()
        }
        fn encode(&self, bytes: &[u8], prefix: Option<&str>) -> WalletResult<String> {
            chains::CosmosStrategy.encode(bytes, Some(prefix.unwrap_or("juno")))
        }
        fn decode(&self, address: &str) -> WalletResult<DecodedAddress> {
            chains::CosmosStrategy.decode(address)
        }
        fn extract_prefix(&self, address: &str) -> Option<String> {
            chains::CosmosStrategy.extract_prefix(address)
        }
    }

    let registry = registry();
    let mut config = WalletConfig::cosmos();
    config.address_config = AddressConfig::new(Arc::new(Juno) as Arc<dyn AddressStrategy>);
    config.address_prefix = None;

    let wallet =
        Wallet::from_mnemonic(TEST_MNEMONIC, &[HdPath::cosmos(0, 0, 0)], config, &registry)
            .unwrap();
    let account = wallet.get_account_by_index(0).unwrap();
    assert!(account.address.value().starts_with("juno1"));
    assert_eq!(account.address.strategy_name(), "juno");
}

#[test]
fn test_config_from_json() {
    let registry = registry();
    let config: WalletConfig = serde_json::from_str(
        r#"{
            "privateKeyConfig": { "algo": "secp256k1" },
            "publicKeyConfig": { "compressed": false },
            "addressConfig": { "strategy": "ethereum" }
        }"#,
    )
    .unwrap();

    let wallet =
        Wallet::from_mnemonic(TEST_MNEMONIC, &[HdPath::eth(0, 0, 0)], config, &registry).unwrap();
    assert_eq!(
        wallet.get_account_by_index(0).unwrap().address.value(),
        "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
    );
}
