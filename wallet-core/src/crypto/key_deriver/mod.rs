// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Multi-Curve Support
//
// Kiến trúc:
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  ├─ Cosmos Hub, Osmosis   └─ Solana             │
// │  ├─ Ethereum                                    │
// │  └─ Injective                                   │
// └─────────────────────────────────────────────────┘

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::crypto::paths::HdPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

// =============================================================================
// COMMON TYPES
// =============================================================================
/// Curve type cho key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// secp256k1 - Cosmos, Ethereum, Injective
    Secp256k1,
    /// Ed25519 - Solana
    Ed25519,
}

/// Kết quả derivation chứa private key + metadata
#[derive(Debug)]
pub struct DerivedKey {
    /// Private key bytes (32 bytes, auto-zeroize khi drop)
    pub private_key: Zeroizing<[u8; 32]>,
    pub curve: CurveType,
    /// Derivation path đã sử dụng
    pub path: HdPath,
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Entry point for every key derivation, dispatching on the curve.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the child key at `path`.
    ///
    /// Identical `(seed, path, curve)` always yields byte-identical output.
    pub fn derive(seed: &[u8], path: &HdPath, curve: CurveType) -> WalletResult<DerivedKey> {
        Self::validate_seed(seed)?;
        debug!(path = %path, ?curve, "deriving child key");

        let private_key = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive(seed, path)?,
            CurveType::Ed25519 => Ed25519Deriver::derive(seed, path)?,
        };

        Ok(DerivedKey {
            private_key,
            curve,
            path: path.clone(),
        })
    }

    /// BIP-32 accepts seeds between 128 and 512 bits.
    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if !(16..=64).contains(&seed.len()) {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected 16..=64 bytes, got {}",
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
