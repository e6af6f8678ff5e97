// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010 Standard
//
// Dùng cho: Solana
// Algorithm: HMAC-SHA512 (khác BIP-32, chỉ hỗ trợ hardened derivation)
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// QUAN TRỌNG: SLIP-0010 cho ed25519 CHỈ hỗ trợ hardened child derivation.
// VD: m/44'/501'/0'/0' (OK)    m/44'/501'/0'/0 (INVALID)

use crate::crypto::paths::HdPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Ed25519 Key Deriver - SLIP-0010 Standard
///
/// # Khác biệt với secp256k1 (BIP-32)
/// - Master key seed: "ed25519 seed" (thay vì "Bitcoin seed")
/// - Chỉ hỗ trợ hardened derivation (index >= 2^31)
/// - Không cần validate key range (ed25519 key là bất kỳ 32 bytes)
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive single ed25519 private key từ seed + path
    ///
    /// Every segment of `path` must be hardened.
    pub fn derive(seed: &[u8], path: &HdPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        if let Some(segment) = path.segments().iter().find(|s| !s.is_hardened()) {
            return Err(WalletError::InvalidHdPath {
                path: path.to_string(),
                reason: format!(
                    "Ed25519 SLIP-0010 requires ALL levels to be hardened, got '{}'",
                    segment
                ),
            });
        }

        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::hmac_split(Self::MASTER_SECRET, &[seed])?;

        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || index)
        for segment in path.segments() {
            let (child_key, child_chain) = Self::hmac_split(
                &chain_code,
                &[&[0x00u8][..], &key[..], &segment.raw().to_be_bytes()[..]],
            )?;
            // Zeroize old values trước khi overwrite
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        chain_code.zeroize();

        Ok(Zeroizing::new(key))
    }

    /// HMAC-SHA512 → (IL, IR), mỗi nửa 32 bytes
    fn hmac_split(hmac_key: &[u8], data: &[&[u8]]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(hmac_key).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;
        for chunk in data {
            mac.update(chunk);
        }

        // Copy into stack buffer we fully control, then zeroize
        let mut buf = [0u8; 64];
        buf.copy_from_slice(&mac.finalize().into_bytes());

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        buf.zeroize();

        Ok((key, chain_code))
    }
}

// =============================================================================
// TESTS
// =============================================================================
