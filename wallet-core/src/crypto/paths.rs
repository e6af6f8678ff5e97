// wallet-core/src/crypto/paths.rs
//
// HD Paths - BIP-32/44 path value type + SLIP-44 coin types
//
// Canonical form: m/44'/118'/0'/0/0
// Hardened marker: ' (h được chấp nhận khi parse, luôn in ra ')

use crate::error::{WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    // ---- secp256k1 chains ----
    pub const ETHEREUM: u32 = 60; // Ethereum + Injective
    pub const COSMOS: u32 = 118;

    // ---- ed25519 chains ----
    pub const SOLANA: u32 = 501;
}

/// Bit đánh dấu hardened index (2^31)
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

// =============================================================================
// CHILD INDEX
// =============================================================================
/// One path segment: a 31-bit index plus the hardened flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildIndex {
    index: u32,
    hardened: bool,
}

impl ChildIndex {
    /// Index must fit in 31 bits.
    pub fn new(index: u32, hardened: bool) -> WalletResult<Self> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::InvalidHdPath {
                path: index.to_string(),
                reason: "index must be below 2^31".to_string(),
            });
        }
        Ok(Self { index, hardened })
    }

    pub const fn hardened(index: u32) -> Self {
        Self {
            index: index & !HARDENED_OFFSET,
            hardened: true,
        }
    }

    pub const fn normal(index: u32) -> Self {
        Self {
            index: index & !HARDENED_OFFSET,
            hardened: false,
        }
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[inline]
    pub fn is_hardened(&self) -> bool {
        self.hardened
    }

    /// Wire form used by HMAC child derivation (index | 2^31 when hardened).
    #[inline]
    pub fn raw(&self) -> u32 {
        if self.hardened {
            self.index | HARDENED_OFFSET
        } else {
            self.index
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

// =============================================================================
// HD PATH
// =============================================================================
/// Immutable derivation path.
///
/// # Conventions
/// - BIP-44: `m/44'/coin'/account'/change/index` (secp256k1)
/// - SLIP-0010: `m/44'/coin'/account'/change'` (ed25519, all hardened)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HdPath {
    segments: Vec<ChildIndex>,
}

impl HdPath {
    pub fn new(segments: Vec<ChildIndex>) -> Self {
        Self { segments }
    }

    /// BIP-44 path: `m/purpose'/coin'/account'/change/index`
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> Self {
        Self::new(vec![
            ChildIndex::hardened(purpose),
            ChildIndex::hardened(coin_type),
            ChildIndex::hardened(account),
            ChildIndex::normal(change),
            ChildIndex::normal(index),
        ])
    }

    /// Cosmos SDK chains: `m/44'/118'/account'/change/index`
    #[inline]
    pub fn cosmos(account: u32, change: u32, index: u32) -> Self {
        Self::bip44(44, coin_type::COSMOS, account, change, index)
    }

    /// EVM chains and Injective: `m/44'/60'/account'/change/index`
    #[inline]
    pub fn eth(account: u32, change: u32, index: u32) -> Self {
        Self::bip44(44, coin_type::ETHEREUM, account, change, index)
    }

    /// Solana: `m/44'/501'/account'/0'` (SLIP-0010, all hardened)
    pub fn solana(account: u32) -> Self {
        Self::new(vec![
            ChildIndex::hardened(44),
            ChildIndex::hardened(coin_type::SOLANA),
            ChildIndex::hardened(account),
            ChildIndex::hardened(0),
        ])
    }

    #[inline]
    pub fn segments(&self) -> &[ChildIndex] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True khi mọi level đều hardened (yêu cầu của ed25519 SLIP-0010)
    pub fn is_fully_hardened(&self) -> bool {
        self.segments.iter().all(ChildIndex::is_hardened)
    }
}

impl fmt::Display for HdPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for HdPath {
    type Err = WalletError;

    fn from_str(path: &str) -> WalletResult<Self> {
        let invalid = |reason: String| WalletError::InvalidHdPath {
            path: path.to_string(),
            reason,
        };

        let trimmed = path.trim();
        let mut parts = trimmed.split('/');
        if parts.next() != Some("m") {
            return Err(invalid("path must start with 'm'".to_string()));
        }

        let mut segments = Vec::new();
        for part in parts {
            let part = part.trim();
            if part.is_empty() {
                return Err(invalid("empty segment".to_string()));
            }

            let (digits, hardened) = match part.strip_suffix('\'').or_else(|| part.strip_suffix('h')) {
                Some(digits) => (digits, true),
                None => (part, false),
            };

            let index: u32 = digits
                .parse()
                .map_err(|e| invalid(format!("invalid index '{}': {}", digits, e)))?;
            if index >= HARDENED_OFFSET {
                return Err(invalid(format!("index {} must be below 2^31", index)));
            }
            segments.push(ChildIndex { index, hardened });
        }

        Ok(Self { segments })
    }
}

impl serde::Serialize for HdPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for HdPath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// TESTS
// =============================================================================
