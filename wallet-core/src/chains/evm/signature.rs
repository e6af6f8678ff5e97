// wallet-core/src/chains/evm/signature.rs
//
// Signature Post-Processing - raw / full / compact
//
// secp256k1 trả về 65 bytes: r (32) || s (32) || recovery (1).
// Ethereum dùng full 65 bytes; Injective/Cosmos tx dùng compact 64 bytes (r || s).

use crate::crypto::bytes::CryptoBytes;
use crate::error::{WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

/// Caller-supplied byte → byte transform
pub type SignatureFormatFn = Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

/// Output layout for a raw signature.
#[derive(Clone, Default)]
pub enum SignatureFormat {
    /// Unmodified
    Raw,
    /// Unmodified, 65 bytes with recovery
    Full,
    /// 64 bytes r || s, recovery dropped
    #[default]
    Compact,
    Custom(SignatureFormatFn),
}

impl SignatureFormat {
    pub const RAW: &'static str = "raw";
    pub const FULL: &'static str = "full";
    pub const COMPACT: &'static str = "compact";

    /// Named preset or `default` for unknown names.
    ///
    /// Without a default an unknown name is an error; `None` as the name
    /// yields the default (possibly none).
    pub fn resolve(
        name: Option<&str>,
        default: Option<SignatureFormat>,
    ) -> WalletResult<Option<SignatureFormat>> {
        let Some(name) = name else {
            return Ok(default);
        };
        match (name.parse::<SignatureFormat>(), default) {
            (Ok(format), _) => Ok(Some(format)),
            (Err(_), Some(default)) => {
                warn!(format = name, fallback = ?default, "unknown signature format, using fallback");
                Ok(Some(default))
            }
            (Err(e), None) => Err(e),
        }
    }

    /// Unknown names fall back to [`SignatureFormat::Compact`].
    pub fn lenient(name: &str) -> SignatureFormat {
        match name.parse() {
            Ok(format) => format,
            Err(_) => {
                warn!(format = name, "unknown signature format, falling back to compact");
                SignatureFormat::Compact
            }
        }
    }

    pub fn custom<F>(f: F) -> SignatureFormat
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        SignatureFormat::Custom(Arc::new(f))
    }
}

impl FromStr for SignatureFormat {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::RAW => Ok(SignatureFormat::Raw),
            Self::FULL => Ok(SignatureFormat::Full),
            Self::COMPACT => Ok(SignatureFormat::Compact),
            other => Err(WalletError::UnknownSignatureFormat(other.to_string())),
        }
    }
}

impl fmt::Debug for SignatureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureFormat::Raw => f.write_str("Raw"),
            SignatureFormat::Full => f.write_str("Full"),
            SignatureFormat::Compact => f.write_str("Compact"),
            SignatureFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// r, s and the optional recovery byte of an ECDSA signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureComponents {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub recovery: Option<u8>,
}

// =============================================================================
// PROCESSOR
// =============================================================================
/// Stateless signature post-processing.
pub struct SignatureProcessor;

impl SignatureProcessor {
    /// Accepts 64 (r || s) or 65 (r || s || recovery) bytes.
    pub fn split_signature(signature: &[u8]) -> WalletResult<SignatureComponents> {
        let recovery = match signature.len() {
            64 => None,
            65 => Some(signature[64]),
            other => return Err(WalletError::InvalidSignatureLength(other)),
        };

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&signature[..32]);
        s.copy_from_slice(&signature[32..64]);
        Ok(SignatureComponents { r, s, recovery })
    }

    /// Inverse of [`split_signature`](Self::split_signature).
    pub fn combine_signature(r: &[u8], s: &[u8], recovery: Option<u8>) -> WalletResult<Vec<u8>> {
        if r.len() != 32 || s.len() != 32 {
            return Err(WalletError::InvalidComponentLength {
                r: r.len(),
                s: s.len(),
            });
        }

        let mut out = Vec::with_capacity(65);
        out.extend_from_slice(r);
        out.extend_from_slice(s);
        if let Some(v) = recovery {
            out.push(v);
        }
        Ok(out)
    }

    pub fn process_signature(signature: &[u8], format: &SignatureFormat) -> WalletResult<Vec<u8>> {
        match format {
            SignatureFormat::Raw | SignatureFormat::Full => Ok(signature.to_vec()),
            SignatureFormat::Compact => {
                let parts = Self::split_signature(signature)?;
                Self::combine_signature(&parts.r, &parts.s, None)
            }
            SignatureFormat::Custom(f) => Ok(f(signature)),
        }
    }

    /// Named format; absent or unknown names mean compact.
    pub fn process_named(signature: &[u8], format: Option<&str>) -> WalletResult<Vec<u8>> {
        let format = format.map(SignatureFormat::lenient).unwrap_or_default();
        Self::process_signature(signature, &format)
    }

    /// Named format; unknown names fail with `UnknownSignatureFormat`.
    pub fn process_named_strict(signature: &[u8], format: &str) -> WalletResult<Vec<u8>> {
        Self::process_signature(signature, &format.parse()?)
    }

    pub fn to_crypto_bytes(signature: &[u8], format: &SignatureFormat) -> WalletResult<CryptoBytes> {
        Self::process_signature(signature, format).map(CryptoBytes::new)
    }
}

// =============================================================================
// ETH SECP256K1 SIGNATURE
// =============================================================================
/// A raw secp256k1 signature as produced by [`Secp256k1Algo`](crate::crypto::Secp256k1Algo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthSecp256k1Signature {
    signature: Vec<u8>,
}

impl EthSecp256k1Signature {
    pub fn new(signature: impl Into<Vec<u8>>) -> Self {
        Self {
            signature: signature.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.signature
    }

    pub fn to_compact(&self) -> WalletResult<CryptoBytes> {
        self.process(&SignatureFormat::Compact)
    }

    pub fn to_full(&self) -> WalletResult<CryptoBytes> {
        self.process(&SignatureFormat::Full)
    }

    pub fn to_raw(&self) -> WalletResult<CryptoBytes> {
        self.process(&SignatureFormat::Raw)
    }

    pub fn process(&self, format: &SignatureFormat) -> WalletResult<CryptoBytes> {
        SignatureProcessor::to_crypto_bytes(&self.signature, format)
    }
}

// =============================================================================
// TESTS
// =============================================================================
