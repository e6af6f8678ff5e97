// wallet-core/src/chains/solana.rs
//
// Solana Address - Base58(ed25519 public key)
// Không hash, không prefix: address chính là public key 32 bytes.

use super::{strategy_name, AddressStrategy, DecodedAddress};
use crate::error::{WalletError, WalletResult};

pub const PUBKEY_LEN: usize = 32;

#[derive(Debug, Clone, Copy, Default)]
pub struct SolanaStrategy;

impl AddressStrategy for SolanaStrategy {
    fn name(&self) -> &str {
        strategy_name::SOLANA
    }

    /// Identity
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        data.to_vec()
    }

    fn encode(&self, bytes: &[u8], _prefix: Option<&str>) -> WalletResult<String> {
        if bytes.len() != PUBKEY_LEN {
            return Err(WalletError::encoding(format!(
                "Solana address must encode 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(bs58::encode(bytes).into_string())
    }

    fn decode(&self, address: &str) -> WalletResult<DecodedAddress> {
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| WalletError::encoding(format!("Invalid base58: {}", e)))?;
        if bytes.len() != PUBKEY_LEN {
            return Err(WalletError::encoding(format!(
                "Solana address must decode to 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(DecodedAddress {
            bytes,
            prefix: None,
        })
    }

    fn extract_prefix(&self, _address: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // System program id
    const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

    #[test]
    fn test_system_program_vector() {
        assert_eq!(SolanaStrategy.encode(&[0u8; 32], None).unwrap(), SYSTEM_PROGRAM);
        assert_eq!(SolanaStrategy.decode(SYSTEM_PROGRAM).unwrap().bytes, vec![0u8; 32]);
    }

    #[test]
    fn test_round_trip() {
        let key = [0x5au8; 32];
        let addr = SolanaStrategy.encode(&SolanaStrategy.hash(&key), None).unwrap();
        let decoded = SolanaStrategy.decode(&addr).unwrap();
        assert_eq!(decoded.bytes, key.to_vec());
        assert_eq!(decoded.prefix, None);
        assert_eq!(SolanaStrategy.extract_prefix(&addr), None);
    }

    #[test]
    fn test_invalid() {
        // '0', 'O', 'I', 'l' are not in the base58 alphabet
        assert!(SolanaStrategy.decode("0OIl").is_err());
        assert!(SolanaStrategy.decode("1111").is_err());
        assert!(SolanaStrategy.encode(&[1u8; 33], None).is_err());
    }
}
