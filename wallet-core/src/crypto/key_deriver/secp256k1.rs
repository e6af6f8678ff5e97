// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32 / SLIP-0010
//
// Dùng cho: Cosmos, Ethereum, Injective
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// SLIP-0010 secp256k1 trùng khớp với BIP-32.
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::crypto::paths::HdPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{ChildNumber, XPrv};
use zeroize::Zeroizing;

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// # Security
/// - Private keys wrap trong `Zeroizing<[u8; 32]>` (auto-zeroize khi drop)
/// - Không lưu intermediate keys
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Derive single private key từ seed + path
    ///
    /// Both hardened and normal segments are allowed.
    pub fn derive(seed: &[u8], path: &HdPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        let root_xprv = XPrv::new(seed).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Failed to create master key: {}",
                e
            )))
        })?;

        let mut child = root_xprv;
        for segment in path.segments() {
            let child_num = ChildNumber::new(segment.index(), segment.is_hardened()).map_err(|e| {
                WalletError::InvalidHdPath {
                    path: path.to_string(),
                    reason: format!("segment {}: {}", segment, e),
                }
            })?;

            child = child.derive_child(child_num).map_err(|e| {
                WalletError::Crypto(CryptoError::DerivationFailed(format!(
                    "Child derivation failed at {}: {}",
                    segment, e
                )))
            })?;
        }

        let key_bytes: [u8; 32] = child.private_key().to_bytes().into();
        Ok(Zeroizing::new(key_bytes))
    }
}

// =============================================================================
// TESTS
// =============================================================================
