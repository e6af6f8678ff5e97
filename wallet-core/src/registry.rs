// wallet-core/src/registry.rs
//
// Registry - name → algorithm / address strategy
//
// Không phải global singleton: app tạo một Registry lúc khởi động,
// đăng ký xong thì `freeze()`, sau đó share bằng `&Registry` hoặc `Arc<Registry>`.

use crate::chains::{
    AddressStrategy, CosmosStrategy, EthereumStrategy, InjectiveEthStrategy, SolanaStrategy,
};
use crate::crypto::algo::{Ed25519Algo, Secp256k1Algo, SigningAlgorithm};
use crate::error::{WalletError, WalletResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Name table for signing algorithms and address strategies.
///
/// # Lifecycle
/// 1. `Registry::with_defaults()` (or `new()`), then any custom `register_*`
/// 2. `freeze()`; every later registration fails with `RegistryFrozen`
/// 3. Read-only use from any number of threads
#[derive(Default)]
pub struct Registry {
    algos: HashMap<String, Arc<dyn SigningAlgorithm>>,
    strategies: HashMap<String, Arc<dyn AddressStrategy>>,
    frozen: bool,
}

impl Registry {
    /// Empty, unfrozen registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in algorithms (`secp256k1`, `ed25519`) and strategies
    /// (`cosmos`, `ethereum`, `injective-eth`, `solana`). Not frozen.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert_algo(Arc::new(Secp256k1Algo));
        registry.insert_algo(Arc::new(Ed25519Algo));
        registry.insert_strategy(Arc::new(CosmosStrategy));
        registry.insert_strategy(Arc::new(EthereumStrategy));
        registry.insert_strategy(Arc::new(InjectiveEthStrategy));
        registry.insert_strategy(Arc::new(SolanaStrategy));
        registry
    }

    // =========================================================================
    // REGISTRATION
    // =========================================================================

    /// Last write wins for a repeated name.
    pub fn register_algo(&mut self, algo: Arc<dyn SigningAlgorithm>) -> WalletResult<()> {
        self.ensure_open(algo.name())?;
        self.insert_algo(algo);
        Ok(())
    }

    /// Last write wins for a repeated name.
    pub fn register_strategy(&mut self, strategy: Arc<dyn AddressStrategy>) -> WalletResult<()> {
        self.ensure_open(strategy.name())?;
        self.insert_strategy(strategy);
        Ok(())
    }

    pub fn freeze(&mut self) {
        debug!(
            algos = self.algos.len(),
            strategies = self.strategies.len(),
            "registry frozen"
        );
        self.frozen = true;
    }

    /// Consuming variant of [`freeze`](Self::freeze), handy right before wrapping in `Arc`.
    pub fn frozen(mut self) -> Self {
        self.freeze();
        self
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn ensure_open(&self, name: &str) -> WalletResult<()> {
        if self.frozen {
            return Err(WalletError::RegistryFrozen(name.to_string()));
        }
        Ok(())
    }

    fn insert_algo(&mut self, algo: Arc<dyn SigningAlgorithm>) {
        debug!(name = algo.name(), "registering signing algorithm");
        self.algos.insert(algo.name().to_string(), algo);
    }

    fn insert_strategy(&mut self, strategy: Arc<dyn AddressStrategy>) {
        debug!(name = strategy.name(), "registering address strategy");
        self.strategies.insert(strategy.name().to_string(), strategy);
    }

    // =========================================================================
    // RESOLUTION
    // =========================================================================

    pub fn resolve_algo(&self, name: &str) -> WalletResult<Arc<dyn SigningAlgorithm>> {
        self.algos
            .get(name)
            .cloned()
            .ok_or_else(|| WalletError::UnknownAlgorithm(name.to_string()))
    }

    pub fn resolve_strategy(&self, name: &str) -> WalletResult<Arc<dyn AddressStrategy>> {
        self.strategies
            .get(name)
            .cloned()
            .ok_or_else(|| WalletError::UnknownAddressStrategy(name.to_string()))
    }

    /// Sorted algorithm names
    pub fn algo_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.algos.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sorted strategy names
    pub fn strategy_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("algos", &self.algo_names())
            .field("strategies", &self.strategy_names())
            .field("frozen", &self.frozen)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
