// wallet-core/src/keys/private_key.rs
//
// PrivateKey - 32-byte secret + algorithm, immutable sau khi tạo
//
// Không hash dữ liệu trước khi ký: caller tự hash theo chuẩn chain
// (SHA-256 cho Cosmos, Keccak-256 cho Ethereum/Injective).

use super::PublicKey;
use crate::config::{PrivateKeyConfig, PublicKeyConfig};
use crate::crypto::algo::SigningAlgorithm;
use crate::crypto::bytes::CryptoBytes;
use crate::crypto::key_deriver::KeyDeriver;
use crate::crypto::mnemonic::WalletMnemonic;
use crate::crypto::paths::HdPath;
use crate::error::{WalletError, WalletResult};
use crate::registry::Registry;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use zeroize::Zeroizing;

/// Secret key bound to one signing algorithm.
///
/// # Security
/// - Secret lives in `Zeroizing<[u8; 32]>` (wiped on drop)
/// - `Debug` never prints the secret
/// - `to_hex`/`to_base64` export the raw secret; callers must not leak it
#[derive(Clone)]
pub struct PrivateKey {
    secret: Zeroizing<[u8; 32]>,
    config: PrivateKeyConfig,
    algo: Arc<dyn SigningAlgorithm>,
    hd_path: Option<HdPath>,
}

// Custom Debug - KHÔNG BAO GIỜ hiển thị secret
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algo", &self.algo.name())
            .field("hd_path", &self.hd_path)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl PrivateKey {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// One key per path, in input order, each tagged with its path.
    ///
    /// The curve follows the configured algorithm; the seed uses
    /// `config.passphrase` (empty when absent).
    pub fn from_mnemonic(
        mnemonic: &str,
        hd_paths: &[HdPath],
        config: &PrivateKeyConfig,
        registry: &Registry,
    ) -> WalletResult<Vec<Self>> {
        let mnemonic = WalletMnemonic::from_phrase(mnemonic)?;
        Self::from_wallet_mnemonic(&mnemonic, hd_paths, config, registry)
    }

    pub fn from_wallet_mnemonic(
        mnemonic: &WalletMnemonic,
        hd_paths: &[HdPath],
        config: &PrivateKeyConfig,
        registry: &Registry,
    ) -> WalletResult<Vec<Self>> {
        let algo = config.algo.resolve(registry)?;
        let seed = mnemonic.to_seed(config.passphrase.as_deref())?;
        debug!(algo = algo.name(), paths = hd_paths.len(), "deriving private keys");

        hd_paths
            .iter()
            .map(|path| {
                let derived = KeyDeriver::derive(&seed[..], path, algo.curve())?;
                Ok(Self {
                    secret: derived.private_key,
                    config: config.clone(),
                    algo: Arc::clone(&algo),
                    hd_path: Some(derived.path),
                })
            })
            .collect()
    }

    /// Import a raw 32-byte secret.
    pub fn from_bytes(
        bytes: &[u8],
        config: &PrivateKeyConfig,
        registry: &Registry,
    ) -> WalletResult<Self> {
        let algo = config.algo.resolve(registry)?;
        let secret: [u8; 32] = bytes.try_into().map_err(|_| {
            WalletError::invalid_key(format!(
                "Private key must be 32 bytes, got {}",
                bytes.len()
            ))
        })?;
        let secret = Zeroizing::new(secret);

        // Reject secrets the curve cannot use (zero, >= order, ...)
        algo.public_key(&secret[..])?;

        Ok(Self {
            secret,
            config: config.clone(),
            algo,
            hd_path: None,
        })
    }

    /// Import a hex secret, `0x` prefix optional.
    pub fn from_hex(
        hex_str: &str,
        config: &PrivateKeyConfig,
        registry: &Registry,
    ) -> WalletResult<Self> {
        let raw = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = Zeroizing::new(
            hex::decode(raw).map_err(|e| WalletError::invalid_key(format!("Invalid hex: {}", e)))?,
        );
        Self::from_bytes(&bytes, config, registry)
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Public key in the requested form (compressed unless told otherwise).
    pub fn to_public_key(&self, config: Option<PublicKeyConfig>) -> WalletResult<PublicKey> {
        let compressed = config.unwrap_or_default().compressed;
        let bytes = self.algo.public_key_with(&self.secret[..], compressed)?;
        Ok(PublicKey::from_bytes(bytes, Arc::clone(&self.algo), compressed))
    }

    /// Sign `data` exactly as given.
    pub async fn sign(&self, data: &[u8]) -> WalletResult<CryptoBytes> {
        self.algo
            .sign(data, &self.secret[..])
            .await
            .map(CryptoBytes::new)
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn algo(&self) -> &Arc<dyn SigningAlgorithm> {
        &self.algo
    }

    #[inline]
    pub fn config(&self) -> &PrivateKeyConfig {
        &self.config
    }

    #[inline]
    pub fn hd_path(&self) -> Option<&HdPath> {
        self.hd_path.as_ref()
    }

    /// Raw secret as lowercase hex
    ///
    /// # Warning
    /// Cẩn thận khi hiển thị hoặc log giá trị này!
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.secret[..]))
    }

    /// Raw secret as standard base64
    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(STANDARD.encode(&self.secret[..]))
    }
}

// =============================================================================
// TESTS
// =============================================================================
