// wallet-core/src/crypto/bytes.rs

use crate::error::{WalletError, WalletResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

/// Owned bytes of a public key or signature, with the usual text encodings.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct CryptoBytes(Vec<u8>);

impl CryptoBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Accepts an optional `0x` prefix.
    pub fn from_hex(hex_str: &str) -> WalletResult<Self> {
        let raw = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        hex::decode(raw)
            .map(Self)
            .map_err(|e| WalletError::encoding(format!("invalid hex: {}", e)))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, no prefix
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for CryptoBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CryptoBytes(0x{})", self.to_hex())
    }
}

impl From<Vec<u8>> for CryptoBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for CryptoBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for CryptoBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
