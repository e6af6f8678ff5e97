// wallet-core/src/chains/evm/address.rs
//
// EVM Address Strategies - Keccak-256, EIP-55 (Checksum), secp256k1
//
// ethereum:      0x + hex(keccak256(X || Y)[12..])  + EIP-55
// injective-eth: bech32("inj", keccak256(X || Y)[12..])

use crate::chains::cosmos::{bech32_decode, bech32_encode};
use crate::chains::{
    bech32_prefix, strategy_name, AddressChecksum, AddressStrategy, DecodedAddress,
    PublicKeyPreprocessor,
};
use crate::crypto::algo::SigningAlgorithm;
use crate::error::{WalletError, WalletResult};
use tiny_keccak::{Hasher, Keccak};

pub const ETH_PREFIX: &str = "0x";
pub const INJECTIVE_PREFIX: &str = "inj";

/// Keccak-256 (Ethereum variant, not NIST SHA3)
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut hash = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut hash);
    hash
}

/// Last 20 bytes of Keccak-256
fn eth_hash(data: &[u8]) -> Vec<u8> {
    keccak256(data)[12..].to_vec()
}

// =============================================================================
// PREPROCESSING
// =============================================================================
/// Ethereum hashes the 64-byte X || Y point, whatever form the key is stored in.
#[derive(Debug, Clone, Copy, Default)]
pub struct EthPublicKeyPreprocessor;

impl PublicKeyPreprocessor for EthPublicKeyPreprocessor {
    fn preprocess(
        &self,
        pubkey: &[u8],
        compressed: bool,
        algo: &dyn SigningAlgorithm,
    ) -> WalletResult<Vec<u8>> {
        let mut full = if compressed {
            algo.uncompress(pubkey)?
        } else {
            pubkey.to_vec()
        };
        // Bỏ prefix byte 0x04
        if full.len() == 65 && full[0] == 0x04 {
            full.remove(0);
        }
        Ok(full)
    }
}

// =============================================================================
// EIP-55
// =============================================================================
/// EIP-55 mixed-case checksum
///
/// A hex letter is uppercased iff the matching nibble of
/// keccak256(lowercase hex address) is >= 8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip55Checksum;

impl Eip55Checksum {
    pub fn to_checksum(address: &str) -> String {
        let lower = address.to_lowercase();
        let hex_part = lower.strip_prefix(ETH_PREFIX).unwrap_or(&lower);
        let hash = keccak256(hex_part.as_bytes());

        let mut result = String::with_capacity(hex_part.len() + 2);
        result.push_str(ETH_PREFIX);
        for (i, c) in hex_part.chars().enumerate() {
            // Nibble thứ i của hash
            let nibble = match hash.get(i / 2) {
                Some(byte) if i % 2 == 0 => byte >> 4,
                Some(byte) => byte & 0x0f,
                None => 0,
            };
            if nibble >= 8 {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
        }
        result
    }
}

impl AddressChecksum for Eip55Checksum {
    fn apply(&self, address: &str) -> String {
        Self::to_checksum(address)
    }

    /// Exact match with the checksummed form; an all-lowercase address fails.
    fn validate(&self, address: &str) -> bool {
        address == Self::to_checksum(address)
    }
}

// =============================================================================
// STRATEGIES
// =============================================================================
/// Ethereum address strategy (`0x` + 40 hex chars, EIP-55).
#[derive(Debug, Clone, Copy, Default)]
pub struct EthereumStrategy;

impl AddressStrategy for EthereumStrategy {
    fn name(&self) -> &str {
        strategy_name::ETHEREUM
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        eth_hash(data)
    }

    /// The prefix is always `0x`; any requested prefix is ignored.
    fn encode(&self, bytes: &[u8], _prefix: Option<&str>) -> WalletResult<String> {
        Ok(format!("{}{}", ETH_PREFIX, hex::encode(bytes)))
    }

    fn decode(&self, address: &str) -> WalletResult<DecodedAddress> {
        let hex_part = address
            .strip_prefix(ETH_PREFIX)
            .ok_or_else(|| WalletError::encoding("Ethereum address must start with 0x"))?;
        if hex_part.len() != 40 {
            return Err(WalletError::encoding(format!(
                "Ethereum address must have 40 hex chars, got {}",
                hex_part.len()
            )));
        }
        let bytes = hex::decode(hex_part)
            .map_err(|e| WalletError::encoding(format!("Invalid hex: {}", e)))?;
        Ok(DecodedAddress {
            bytes,
            prefix: Some(ETH_PREFIX.to_string()),
        })
    }

    fn extract_prefix(&self, address: &str) -> Option<String> {
        address
            .starts_with(ETH_PREFIX)
            .then(|| ETH_PREFIX.to_string())
    }

    fn preprocessor(&self) -> Option<&dyn PublicKeyPreprocessor> {
        Some(&EthPublicKeyPreprocessor)
    }

    fn checksum(&self) -> Option<&dyn AddressChecksum> {
        Some(&Eip55Checksum)
    }
}

/// Injective: Ethereum key hashing with a bech32 `inj` encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct InjectiveEthStrategy;

impl AddressStrategy for InjectiveEthStrategy {
    fn name(&self) -> &str {
        strategy_name::INJECTIVE_ETH
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        eth_hash(data)
    }

    fn encode(&self, bytes: &[u8], prefix: Option<&str>) -> WalletResult<String> {
        bech32_encode(prefix.unwrap_or(INJECTIVE_PREFIX), bytes)
    }

    fn decode(&self, address: &str) -> WalletResult<DecodedAddress> {
        bech32_decode(address)
    }

    fn extract_prefix(&self, address: &str) -> Option<String> {
        bech32_prefix(address)
    }

    fn preprocessor(&self) -> Option<&dyn PublicKeyPreprocessor> {
        Some(&EthPublicKeyPreprocessor)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::algo::Secp256k1Algo;

    // Test vectors from well-known sources
    const TEST_PRIVATE_KEY: &str =
        "501c797c4b1fdfa88fb7efdf7c9871b8e0f46dbc44259e3e270e0d4c938165f5";
    const TEST_ADDRESS: &str = "0xb611C31e4284BF7A7daD3296e62880F14b3b15DD";

    // Anvil/Hardhat account #0
    const ANVIL_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const ANVIL_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    // EIP-55 reference vectors
    const EIP55_VECTORS: [&str; 4] = [
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    fn derive(strategy: &dyn AddressStrategy, priv_hex: &str, compressed: bool) -> String {
        let algo = Secp256k1Algo;
        let secret = hex::decode(priv_hex).unwrap();
        let pubkey = algo.public_key_with(&secret, compressed).unwrap();
        let data = strategy
            .preprocessor()
            .unwrap()
            .preprocess(&pubkey, compressed, &algo)
            .unwrap();
        assert_eq!(data.len(), 64);
        let encoded = strategy.encode(&strategy.hash(&data), None).unwrap();
        match strategy.checksum() {
            Some(checksum) => checksum.apply(&encoded),
            None => encoded,
        }
    }

    #[test]
    fn test_eth_address_vectors() {
        assert_eq!(derive(&EthereumStrategy, TEST_PRIVATE_KEY, false), TEST_ADDRESS);
        assert_eq!(derive(&EthereumStrategy, ANVIL_PRIVATE_KEY, false), ANVIL_ADDRESS);
    }

    #[test]
    fn test_compressed_storage_gives_same_address() {
        assert_eq!(derive(&EthereumStrategy, ANVIL_PRIVATE_KEY, true), ANVIL_ADDRESS);
    }

    #[test]
    fn test_eip55_vectors() {
        for vector in EIP55_VECTORS {
            assert_eq!(Eip55Checksum::to_checksum(&vector.to_lowercase()), vector);
            assert!(Eip55Checksum.validate(vector));
        }
    }

    #[test]
    fn test_checksum_idempotent() {
        let once = Eip55Checksum.apply("0xb611c31e4284bf7a7dad3296e62880f14b3b15dd");
        assert_eq!(once, TEST_ADDRESS);
        assert_eq!(Eip55Checksum.apply(&once), once);
        assert_eq!(Eip55Checksum.apply(&once.to_uppercase().replace("0X", "0x")), once);
    }

    #[test]
    fn test_validate_rejects_wrong_case() {
        assert!(!Eip55Checksum.validate("0xb611c31e4284bf7a7dad3296e62880f14b3b15dd"));
        assert!(!Eip55Checksum.validate("0xB611C31e4284BF7A7daD3296e62880F14b3b15DD"));
    }

    #[test]
    fn test_decode() {
        let decoded = EthereumStrategy.decode(ANVIL_ADDRESS).unwrap();
        assert_eq!(decoded.bytes.len(), 20);
        assert_eq!(decoded.prefix.as_deref(), Some("0x"));
        assert_eq!(EthereumStrategy.extract_prefix(ANVIL_ADDRESS).as_deref(), Some("0x"));

        assert!(EthereumStrategy.decode("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266").is_err());
        assert!(EthereumStrategy.decode("0x123").is_err());
        assert!(EthereumStrategy.decode("0xzz9Fd6e51aad88F6F4ce6aB8827279cffFb92266").is_err());
    }

    #[test]
    fn test_injective_shares_eth_bytes() {
        let inj = derive(&InjectiveEthStrategy, ANVIL_PRIVATE_KEY, true);
        assert!(inj.starts_with("inj1"));

        let inj_bytes = InjectiveEthStrategy.decode(&inj).unwrap().bytes;
        let eth_bytes = EthereumStrategy.decode(ANVIL_ADDRESS).unwrap().bytes;
        assert_eq!(inj_bytes, eth_bytes);
    }

    #[test]
    fn test_injective_rejects_foreign_checksum() {
        // Cosmos zero-address payload + checksum, hrp swapped to inj
        assert!(InjectiveEthStrategy
            .decode("inj1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqnrql8a")
            .is_err());
    }
}
