// wallet-core/src/wallet.rs
//
// Wallet - danh sách PrivateKey có thứ tự + một config chung
//
// Thứ tự trong list = index ổn định cho mọi thao tác by-index.
// Account (pubkey, address) luôn tính lại khi gọi, không cache.

use crate::chains::AddressStrategy;
use crate::config::WalletConfig;
use crate::crypto::bytes::CryptoBytes;
use crate::crypto::paths::HdPath;
use crate::error::{WalletError, WalletResult};
use crate::keys::{Address, PrivateKey, PublicKey};
use crate::registry::Registry;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Per-index view of a wallet key, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Hex in JSON
    pub pubkey: PublicKey,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hd_path: Option<HdPath>,
    pub algo: String,
}

/// Seam consumed by transaction builders: accounts plus signing by index.
#[async_trait]
pub trait AccountSigner: Send + Sync {
    async fn get_accounts(&self) -> WalletResult<Vec<Account>>;

    async fn sign_by_index(&self, index: usize, data: &[u8]) -> WalletResult<CryptoBytes>;
}

/// Ordered keys sharing one configuration.
///
/// Immutable after construction: concurrent `sign_by_index` calls on a shared
/// `Arc<Wallet>` need no locking.
#[derive(Debug, Clone)]
pub struct Wallet {
    private_keys: Vec<PrivateKey>,
    config: WalletConfig,
    strategy: Arc<dyn AddressStrategy>,
}

impl Wallet {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    pub fn new(
        private_keys: Vec<PrivateKey>,
        config: WalletConfig,
        registry: &Registry,
    ) -> WalletResult<Self> {
        let strategy = config.address_config.strategy.resolve(registry)?;
        debug!(
            keys = private_keys.len(),
            strategy = strategy.name(),
            prefix = ?config.address_prefix,
            "wallet created"
        );
        Ok(Self {
            private_keys,
            config,
            strategy,
        })
    }

    /// One key per HD path, in order. At least one path is required.
    pub fn from_mnemonic(
        mnemonic: &str,
        hd_paths: &[HdPath],
        config: WalletConfig,
        registry: &Registry,
    ) -> WalletResult<Self> {
        if hd_paths.is_empty() {
            return Err(WalletError::Validation(
                "At least one HD path is required".to_string(),
            ));
        }
        let keys =
            PrivateKey::from_mnemonic(mnemonic, hd_paths, &config.private_key_config, registry)?;
        Self::new(keys, config, registry)
    }

    // =========================================================================
    // ACCOUNTS
    // =========================================================================

    pub fn get_account_by_index(&self, index: usize) -> WalletResult<Account> {
        let key = self.key(index)?;
        let pubkey = key.to_public_key(Some(self.config.public_key_config))?;
        let address = Address::from_public_key(
            &pubkey,
            Arc::clone(&self.strategy),
            self.config.address_prefix.as_deref(),
        )?;

        Ok(Account {
            algo: key.algo().name().to_string(),
            hd_path: key.hd_path().cloned(),
            pubkey,
            address,
        })
    }

    pub fn to_accounts(&self) -> WalletResult<Vec<Account>> {
        (0..self.private_keys.len())
            .map(|index| self.get_account_by_index(index))
            .collect()
    }

    // =========================================================================
    // SIGNING
    // =========================================================================

    /// Signs `data` as given with the key at `index`.
    pub async fn sign_by_index(&self, index: usize, data: &[u8]) -> WalletResult<CryptoBytes> {
        self.key(index)?.sign(data).await
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.private_keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.private_keys.is_empty()
    }

    #[inline]
    pub fn private_keys(&self) -> &[PrivateKey] {
        &self.private_keys
    }

    #[inline]
    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    fn key(&self, index: usize) -> WalletResult<&PrivateKey> {
        self.private_keys
            .get(index)
            .ok_or(WalletError::InvalidKeyIndex {
                index,
                len: self.private_keys.len(),
            })
    }
}

#[async_trait]
impl AccountSigner for Wallet {
    async fn get_accounts(&self) -> WalletResult<Vec<Account>> {
        self.to_accounts()
    }

    async fn sign_by_index(&self, index: usize, data: &[u8]) -> WalletResult<CryptoBytes> {
        Wallet::sign_by_index(self, index, data).await
    }
}

// =============================================================================
// TESTS
// =============================================================================
