// wallet-core/src/error.rs

use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(#[from] MnemonicError),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown address strategy: {0}")]
    UnknownAddressStrategy(String),

    #[error("Invalid key index: {index} (wallet holds {len} keys)")]
    InvalidKeyIndex { index: usize, len: usize },

    #[error("Invalid {strategy} address format: {reason}")]
    InvalidAddressFormat { strategy: String, reason: String },

    #[error("Invalid signature length: {0}. Expected 64 or 65 bytes.")]
    InvalidSignatureLength(usize),

    #[error("R and S components must be 32 bytes each (got r={r}, s={s})")]
    InvalidComponentLength { r: usize, s: usize },

    #[error("Invalid HD path '{path}': {reason}")]
    InvalidHdPath { path: String, reason: String },

    #[error("Unknown signature format: {0}")]
    UnknownSignatureFormat(String),

    #[error("Registry is frozen, cannot register '{0}'")]
    RegistryFrozen(String),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Validation Error: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Encoding failed: {0}")]
    Encoding(String),
}

impl WalletError {
    /// Shorthand used by address codecs.
    pub(crate) fn encoding(msg: impl Into<String>) -> Self {
        WalletError::Crypto(CryptoError::Encoding(msg.into()))
    }

    pub(crate) fn invalid_key(msg: impl Into<String>) -> Self {
        WalletError::Crypto(CryptoError::InvalidKeyFormat(msg.into()))
    }
}
