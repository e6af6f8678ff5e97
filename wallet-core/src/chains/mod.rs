// wallet-core/src/chains/mod.rs

// Address Strategies - Chain-Agnostic Interface
//
// Một strategy = hash + encode/decode + extract_prefix (bắt buộc),
// cộng với các capability tùy chọn: pubkey preprocessing, checksum.
// Hash và encoding là hai trục độc lập: injective-eth = hash của ethereum + bech32.

pub mod cosmos;
pub mod evm;
pub mod solana;

pub use cosmos::CosmosStrategy;
pub use evm::{EthereumStrategy, InjectiveEthStrategy};
pub use solana::SolanaStrategy;

use crate::crypto::algo::SigningAlgorithm;
use crate::error::WalletResult;
use std::fmt;

/// Strategy names understood by [`Registry::with_defaults`](crate::Registry::with_defaults).
pub mod strategy_name {
    pub const COSMOS: &str = "cosmos";
    pub const ETHEREUM: &str = "ethereum";
    pub const INJECTIVE_ETH: &str = "injective-eth";
    pub const SOLANA: &str = "solana";
}

/// Raw address bytes plus the prefix found while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    pub bytes: Vec<u8>,
    pub prefix: Option<String>,
}

/// AddressStrategy - chain-specific rules turning a public key into an address
///
/// # Flow
/// pubkey → [preprocess] → hash → encode(prefix) → [checksum] → address
///
/// Optional steps are exposed through [`preprocessor`](Self::preprocessor)
/// and [`checksum`](Self::checksum); `None` means the step is skipped.
pub trait AddressStrategy: Send + Sync {
    fn name(&self) -> &str;

    /// Hash of the (preprocessed) public key; these are the address bytes.
    fn hash(&self, data: &[u8]) -> Vec<u8>;

    /// `prefix = None` uses the strategy's default prefix, if it has one.
    fn encode(&self, bytes: &[u8], prefix: Option<&str>) -> WalletResult<String>;

    fn decode(&self, address: &str) -> WalletResult<DecodedAddress>;

    /// Pure string inspection, no decoding.
    fn extract_prefix(&self, address: &str) -> Option<String>;

    fn preprocessor(&self) -> Option<&dyn PublicKeyPreprocessor> {
        None
    }

    fn checksum(&self) -> Option<&dyn AddressChecksum> {
        None
    }
}

/// Rewrites the stored public key into the form the strategy hashes.
pub trait PublicKeyPreprocessor: Send + Sync {
    fn preprocess(
        &self,
        pubkey: &[u8],
        compressed: bool,
        algo: &dyn SigningAlgorithm,
    ) -> WalletResult<Vec<u8>>;
}

/// Text-level checksum applied after encoding (e.g. EIP-55 mixed case).
pub trait AddressChecksum: Send + Sync {
    fn apply(&self, address: &str) -> String;

    fn validate(&self, address: &str) -> bool;
}

impl fmt::Debug for dyn AddressStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AddressStrategy").field(&self.name()).finish()
    }
}

/// Bech32 human-readable part: leading lowercase letters followed by `1`.
pub(crate) fn bech32_prefix(address: &str) -> Option<String> {
    let end = address
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(address.len());
    if end > 0 && address[end..].starts_with('1') {
        Some(address[..end].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bech32_prefix() {
        assert_eq!(bech32_prefix("cosmos1abc").as_deref(), Some("cosmos"));
        assert_eq!(bech32_prefix("osmo1").as_deref(), Some("osmo"));
        assert_eq!(bech32_prefix("inj1qqq").as_deref(), Some("inj"));
        assert_eq!(bech32_prefix("1abc"), None);
        assert_eq!(bech32_prefix("cosmos"), None);
        assert_eq!(bech32_prefix("Cosmos1abc"), None);
        assert_eq!(bech32_prefix("0x1234"), None);
    }
}
