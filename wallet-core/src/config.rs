// wallet-core/src/config.rs
//
// Wallet Configuration - PrivateKey / PublicKey / Address / Wallet
//
// Config chỉ chứa tên (hoặc object custom); việc resolve tên → capability
// xảy ra một lần khi tạo key/address/wallet, dựa trên `Registry`.

use crate::chains::{strategy_name, AddressStrategy};
use crate::crypto::algo::{algo_name, SigningAlgorithm};
use crate::error::WalletResult;
use crate::registry::Registry;
use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// CAPABILITY REFERENCES
// =============================================================================

/// Signing algorithm by registry name, or a caller-supplied implementation.
///
/// Serialized as the bare name; `Custom` cannot be serialized.
#[derive(Clone)]
pub enum AlgoRef {
    Named(String),
    Custom(Arc<dyn SigningAlgorithm>),
}

impl AlgoRef {
    pub fn name(&self) -> &str {
        match self {
            AlgoRef::Named(name) => name,
            AlgoRef::Custom(algo) => algo.name(),
        }
    }

    pub fn resolve(&self, registry: &Registry) -> WalletResult<Arc<dyn SigningAlgorithm>> {
        match self {
            AlgoRef::Named(name) => registry.resolve_algo(name),
            AlgoRef::Custom(algo) => Ok(Arc::clone(algo)),
        }
    }
}

/// Address strategy by registry name, or a caller-supplied implementation.
///
/// Serialized as the bare name; `Custom` cannot be serialized.
#[derive(Clone)]
pub enum StrategyRef {
    Named(String),
    Custom(Arc<dyn AddressStrategy>),
}

impl StrategyRef {
    pub fn name(&self) -> &str {
        match self {
            StrategyRef::Named(name) => name,
            StrategyRef::Custom(strategy) => strategy.name(),
        }
    }

    pub fn resolve(&self, registry: &Registry) -> WalletResult<Arc<dyn AddressStrategy>> {
        match self {
            StrategyRef::Named(name) => registry.resolve_strategy(name),
            StrategyRef::Custom(strategy) => Ok(Arc::clone(strategy)),
        }
    }
}

impl From<&str> for AlgoRef {
    fn from(name: &str) -> Self {
        AlgoRef::Named(name.to_string())
    }
}

impl From<Arc<dyn SigningAlgorithm>> for AlgoRef {
    fn from(algo: Arc<dyn SigningAlgorithm>) -> Self {
        AlgoRef::Custom(algo)
    }
}

impl From<&str> for StrategyRef {
    fn from(name: &str) -> Self {
        StrategyRef::Named(name.to_string())
    }
}

impl From<Arc<dyn AddressStrategy>> for StrategyRef {
    fn from(strategy: Arc<dyn AddressStrategy>) -> Self {
        StrategyRef::Custom(strategy)
    }
}

impl fmt::Debug for AlgoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgoRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            AlgoRef::Custom(algo) => f.debug_tuple("Custom").field(&algo.name()).finish(),
        }
    }
}

impl fmt::Debug for StrategyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            StrategyRef::Custom(strategy) => {
                f.debug_tuple("Custom").field(&strategy.name()).finish()
            }
        }
    }
}

impl Serialize for AlgoRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AlgoRef::Named(name) => serializer.serialize_str(name),
            AlgoRef::Custom(algo) => Err(ser::Error::custom(format!(
                "custom algorithm '{}' is not serializable",
                algo.name()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for AlgoRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(AlgoRef::Named)
    }
}

impl Serialize for StrategyRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StrategyRef::Named(name) => serializer.serialize_str(name),
            StrategyRef::Custom(strategy) => Err(ser::Error::custom(format!(
                "custom address strategy '{}' is not serializable",
                strategy.name()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for StrategyRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(StrategyRef::Named)
    }
}

// =============================================================================
// CONFIG STRUCTS
// =============================================================================

/// Algorithm plus the optional BIP-39 passphrase.
///
/// # Security
/// - Passphrase is zeroized on drop and never printed by `Debug`
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct PrivateKeyConfig {
    #[zeroize(skip)]
    pub algo: AlgoRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
}

impl PrivateKeyConfig {
    pub fn new(algo: impl Into<AlgoRef>) -> Self {
        Self {
            algo: algo.into(),
            passphrase: None,
        }
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }
}

impl fmt::Debug for PrivateKeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyConfig")
            .field("algo", &self.algo)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyConfig {
    #[serde(default = "default_compressed")]
    pub compressed: bool,
}

fn default_compressed() -> bool {
    true
}

impl Default for PublicKeyConfig {
    fn default() -> Self {
        Self { compressed: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressConfig {
    pub strategy: StrategyRef,
}

impl AddressConfig {
    pub fn new(strategy: impl Into<StrategyRef>) -> Self {
        Self {
            strategy: strategy.into(),
        }
    }
}

/// One configuration shared by every key of a wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfig {
    pub private_key_config: PrivateKeyConfig,
    #[serde(default)]
    pub public_key_config: PublicKeyConfig,
    pub address_config: AddressConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_prefix: Option<String>,
}

impl WalletConfig {
    // =========================================================================
    // PRESETS
    // =========================================================================

    /// secp256k1, compressed pubkey, bech32 `cosmos1...`
    pub fn cosmos() -> Self {
        Self {
            private_key_config: PrivateKeyConfig::new(algo_name::SECP256K1),
            public_key_config: PublicKeyConfig { compressed: true },
            address_config: AddressConfig::new(strategy_name::COSMOS),
            address_prefix: Some("cosmos".to_string()),
        }
    }

    /// secp256k1, uncompressed pubkey, EIP-55 `0x...`
    pub fn ethereum() -> Self {
        Self {
            private_key_config: PrivateKeyConfig::new(algo_name::SECP256K1),
            public_key_config: PublicKeyConfig { compressed: false },
            address_config: AddressConfig::new(strategy_name::ETHEREUM),
            address_prefix: None,
        }
    }

    /// secp256k1, compressed pubkey, Ethereum hashing, bech32 `inj1...`
    pub fn injective() -> Self {
        Self {
            private_key_config: PrivateKeyConfig::new(algo_name::SECP256K1),
            public_key_config: PublicKeyConfig { compressed: true },
            address_config: AddressConfig::new(strategy_name::INJECTIVE_ETH),
            address_prefix: Some("inj".to_string()),
        }
    }

    /// ed25519, base58 pubkey
    pub fn solana() -> Self {
        Self {
            private_key_config: PrivateKeyConfig::new(algo_name::ED25519),
            public_key_config: PublicKeyConfig::default(),
            address_config: AddressConfig::new(strategy_name::SOLANA),
            address_prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.address_prefix = Some(prefix.into());
        self
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.private_key_config.passphrase = Some(passphrase.into());
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
