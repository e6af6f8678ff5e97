// wallet-core/src/keys/address.rs
//
// Address - string value + strategy
//
// Tạo từ PublicKey (derive) hoặc từ string (parse + validate).
// Giá trị string được giữ nguyên như input, không re-encode.

use super::PublicKey;
use crate::chains::AddressStrategy;
use crate::config::AddressConfig;
use crate::error::{CryptoError, WalletError, WalletResult};
use crate::registry::Registry;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Address {
    value: String,
    strategy: Arc<dyn AddressStrategy>,
    prefix: Option<String>,
}

impl Address {
    /// pubkey → [preprocess] → hash → encode(prefix) → [checksum]
    pub fn from_public_key(
        pubkey: &PublicKey,
        strategy: Arc<dyn AddressStrategy>,
        prefix: Option<&str>,
    ) -> WalletResult<Self> {
        let data = match strategy.preprocessor() {
            Some(preprocessor) => preprocessor.preprocess(
                pubkey.as_bytes(),
                pubkey.is_compressed(),
                pubkey.algo().as_ref(),
            )?,
            None => pubkey.as_bytes().to_vec(),
        };

        let hash = strategy.hash(&data);
        let encoded = strategy.encode(&hash, prefix)?;
        let value = match strategy.checksum() {
            Some(checksum) => checksum.apply(&encoded),
            None => encoded,
        };

        let prefix = prefix
            .map(str::to_string)
            .or_else(|| strategy.extract_prefix(&value));
        Ok(Self {
            value,
            strategy,
            prefix,
        })
    }

    /// Parse and format-check `value`; the string is stored verbatim.
    ///
    /// Checksum case is not enforced here, see [`is_valid`](Self::is_valid).
    pub fn from_string(value: &str, strategy: Arc<dyn AddressStrategy>) -> WalletResult<Self> {
        let prefix = strategy.extract_prefix(value);
        strategy
            .decode(value)
            .map_err(|e| Self::format_error(strategy.as_ref(), e))?;

        Ok(Self {
            value: value.to_string(),
            strategy,
            prefix,
        })
    }

    /// [`from_string`](Self::from_string) with the strategy named in `config`.
    pub fn parse(value: &str, config: &AddressConfig, registry: &Registry) -> WalletResult<Self> {
        Self::from_string(value, config.strategy.resolve(registry)?)
    }

    /// Raw address bytes, decoded on every call.
    pub fn to_bytes(&self) -> WalletResult<Vec<u8>> {
        self.strategy
            .decode(&self.value)
            .map(|decoded| decoded.bytes)
            .map_err(|e| Self::format_error(self.strategy.as_ref(), e))
    }

    /// Decodable AND, when the strategy has a checksum, checksum-valid.
    pub fn is_valid(&self) -> bool {
        self.to_bytes().is_ok()
            && self
                .strategy
                .checksum()
                .map_or(true, |checksum| checksum.validate(&self.value))
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[inline]
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    fn format_error(strategy: &dyn AddressStrategy, err: WalletError) -> WalletError {
        let reason = match err {
            WalletError::Crypto(CryptoError::Encoding(msg)) => msg,
            other => other.to_string(),
        };
        WalletError::InvalidAddressFormat {
            strategy: strategy.name().to_string(),
            reason,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.strategy_name() == other.strategy_name()
    }
}

impl Eq for Address {}

/// Serialized as the address string.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

// =============================================================================
// TESTS
// =============================================================================
