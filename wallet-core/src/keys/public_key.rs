// wallet-core/src/keys/public_key.rs

use super::{Address, PrivateKey};
use crate::chains::AddressStrategy;
use crate::config::{AddressConfig, PublicKeyConfig};
use crate::crypto::algo::SigningAlgorithm;
use crate::crypto::bytes::CryptoBytes;
use crate::error::WalletResult;
use crate::registry::Registry;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Public key bytes plus the algorithm and form they were produced in.
#[derive(Debug, Clone)]
pub struct PublicKey {
    bytes: CryptoBytes,
    algo: Arc<dyn SigningAlgorithm>,
    compressed: bool,
}

impl PublicKey {
    pub fn from_bytes(
        bytes: impl Into<CryptoBytes>,
        algo: Arc<dyn SigningAlgorithm>,
        compressed: bool,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            algo,
            compressed,
        }
    }

    /// Same as [`PrivateKey::to_public_key`].
    pub fn from_private_key(
        key: &PrivateKey,
        config: Option<PublicKeyConfig>,
    ) -> WalletResult<Self> {
        key.to_public_key(config)
    }

    pub fn from_hex(
        hex_str: &str,
        algo: Arc<dyn SigningAlgorithm>,
        compressed: bool,
    ) -> WalletResult<Self> {
        Ok(Self::from_bytes(CryptoBytes::from_hex(hex_str)?, algo, compressed))
    }

    /// Address under the configured strategy; `prefix = None` uses the strategy default.
    pub fn to_address(
        &self,
        config: &AddressConfig,
        prefix: Option<&str>,
        registry: &Registry,
    ) -> WalletResult<Address> {
        let strategy = config.strategy.resolve(registry)?;
        Address::from_public_key(self, strategy, prefix)
    }

    pub fn to_address_with(
        &self,
        strategy: Arc<dyn AddressStrategy>,
        prefix: Option<&str>,
    ) -> WalletResult<Address> {
        Address::from_public_key(self, strategy, prefix)
    }

    /// `Ok(false)` for a well-formed signature that does not match `data`.
    ///
    /// `data` must be hashed the same way it was for `sign`.
    pub async fn verify(&self, data: &[u8], signature: &[u8]) -> WalletResult<bool> {
        self.algo.verify(signature, data, self.bytes.as_bytes()).await
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_bytes()
    }

    #[inline]
    pub fn algo(&self) -> &Arc<dyn SigningAlgorithm> {
        &self.algo
    }

    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn to_hex(&self) -> String {
        self.bytes.to_hex()
    }

    pub fn to_base64(&self) -> String {
        self.bytes.to_base64()
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
            && self.compressed == other.compressed
            && self.algo.name() == other.algo.name()
    }
}

impl Eq for PublicKey {}

/// Serialized as lowercase hex.
impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
