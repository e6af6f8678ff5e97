// wallet-core/src/chains/cosmos.rs
//
// Cosmos Address - Bech32(prefix, RIPEMD160(SHA256(pubkey)))
// Dùng cho: Cosmos Hub, Osmosis, và mọi chain Cosmos SDK (chỉ khác prefix)

use super::{bech32_prefix, strategy_name, AddressStrategy, DecodedAddress};
use crate::error::{WalletError, WalletResult};
use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

pub const DEFAULT_PREFIX: &str = "cosmos";

/// RIPEMD160(SHA256(data)), 20 bytes
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

pub(crate) fn bech32_encode(prefix: &str, data: &[u8]) -> WalletResult<String> {
    let hrp = Hrp::parse(prefix)
        .map_err(|e| WalletError::encoding(format!("Invalid bech32 prefix '{}': {}", prefix, e)))?;
    bech32::encode::<Bech32>(hrp, data)
        .map_err(|e| WalletError::encoding(format!("Bech32 encoding failed: {}", e)))
}

/// Only the original bech32 checksum is accepted; bech32m strings are rejected.
pub(crate) fn bech32_decode(address: &str) -> WalletResult<DecodedAddress> {
    let checked = CheckedHrpstring::new::<Bech32>(address)
        .map_err(|e| WalletError::encoding(format!("Bech32 decoding failed: {}", e)))?;
    Ok(DecodedAddress {
        prefix: Some(checked.hrp().to_string().to_ascii_lowercase()),
        bytes: checked.byte_iter().collect(),
    })
}

/// Cosmos SDK account address strategy.
///
/// Bech32 carries its own checksum, so no extra checksum step.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosmosStrategy;

impl AddressStrategy for CosmosStrategy {
    fn name(&self) -> &str {
        strategy_name::COSMOS
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        hash160(data).to_vec()
    }

    fn encode(&self, bytes: &[u8], prefix: Option<&str>) -> WalletResult<String> {
        bech32_encode(prefix.unwrap_or(DEFAULT_PREFIX), bytes)
    }

    fn decode(&self, address: &str) -> WalletResult<DecodedAddress> {
        bech32_decode(address)
    }

    fn extract_prefix(&self, address: &str) -> Option<String> {
        bech32_prefix(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_ADDRESS: &str = "cosmos1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqnrql8a";

    #[test]
    fn test_zero_address_vector() {
        let strategy = CosmosStrategy;
        assert_eq!(strategy.encode(&[0u8; 20], None).unwrap(), ZERO_ADDRESS);

        let decoded = strategy.decode(ZERO_ADDRESS).unwrap();
        assert_eq!(decoded.bytes, vec![0u8; 20]);
        assert_eq!(decoded.prefix.as_deref(), Some("cosmos"));
    }

    #[test]
    fn test_custom_prefix() {
        let strategy = CosmosStrategy;
        let addr = strategy.encode(&[7u8; 20], Some("osmo")).unwrap();
        assert!(addr.starts_with("osmo1"));
        assert_eq!(strategy.extract_prefix(&addr).as_deref(), Some("osmo"));
        assert_eq!(strategy.decode(&addr).unwrap().bytes, vec![7u8; 20]);
    }

    #[test]
    fn test_hash_is_ripemd_of_sha256() {
        // RIPEMD160(SHA256("")) = b472a266d0bd89c13706a4132ccfb16f7c3b9fcb
        assert_eq!(
            hex::encode(CosmosStrategy.hash(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let tampered = "cosmos1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqnrql8b";
        assert!(CosmosStrategy.decode(tampered).is_err());
        assert!(CosmosStrategy.decode("not-an-address").is_err());
    }

    #[test]
    fn test_decode_rejects_bech32m() {
        let hrp = Hrp::parse("cosmos").unwrap();
        let bech32m = bech32::encode::<bech32::Bech32m>(hrp, &[7u8; 20]).unwrap();
        assert!(bech32m.starts_with("cosmos1"));
        assert!(CosmosStrategy.decode(&bech32m).is_err());

        // same payload under the bech32 checksum still decodes
        let classic = bech32::encode::<Bech32>(hrp, &[7u8; 20]).unwrap();
        assert_eq!(CosmosStrategy.decode(&classic).unwrap().bytes, vec![7u8; 20]);
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(CosmosStrategy.encode(&[0u8; 20], Some("")).is_err());
    }
}
