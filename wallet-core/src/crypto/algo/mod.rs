// wallet-core/src/crypto/algo/mod.rs

// Signing Algorithms - Curve-Agnostic Interface
//
// Mỗi curve là một capability bundle: keypair, compress/uncompress, sign, verify.
// Key và Wallet chỉ làm việc với `Arc<dyn SigningAlgorithm>`, không biết curve cụ thể.

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Algo;
pub use secp256k1::Secp256k1Algo;

use crate::crypto::key_deriver::CurveType;
use crate::error::WalletResult;
use async_trait::async_trait;
use std::fmt;

/// Algorithm names understood by [`Registry::with_defaults`](crate::Registry::with_defaults).
pub mod algo_name {
    pub const SECP256K1: &str = "secp256k1";
    pub const ED25519: &str = "ed25519";
}

/// SigningAlgorithm - capability bundle for one asymmetric curve
///
/// # Design Principles
/// - **No Hashing**: `sign`/`verify` take the message exactly as given.
///   Callers pre-hash per chain convention (SHA-256, Keccak-256, ...).
/// - **Async-First**: sign/verify are async so an implementation may itself be
///   asynchronous (remote signer, WASM-backed curve).
/// - **Stateless**: implementations hold no key material.
#[async_trait]
pub trait SigningAlgorithm: Send + Sync {
    /// Registry name, e.g. `"secp256k1"`
    fn name(&self) -> &str;

    /// Curve used for HD derivation of keys belonging to this algorithm
    fn curve(&self) -> CurveType;

    /// Public key in the algorithm's natural encoding for `secret`.
    fn public_key(&self, secret: &[u8]) -> WalletResult<Vec<u8>>;

    fn compress(&self, pubkey: &[u8]) -> WalletResult<Vec<u8>>;

    fn uncompress(&self, pubkey: &[u8]) -> WalletResult<Vec<u8>>;

    /// Sign `message` as-is.
    async fn sign(&self, message: &[u8], secret: &[u8]) -> WalletResult<Vec<u8>>;

    /// `Ok(false)` for a well-formed signature that does not match.
    /// Errors only on structurally invalid signature lengths.
    async fn verify(&self, signature: &[u8], message: &[u8], pubkey: &[u8]) -> WalletResult<bool>;

    /// Public key for `secret` in compressed or uncompressed form.
    fn public_key_with(&self, secret: &[u8], compressed: bool) -> WalletResult<Vec<u8>> {
        let pubkey = self.public_key(secret)?;
        if compressed {
            self.compress(&pubkey)
        } else {
            self.uncompress(&pubkey)
        }
    }
}

impl fmt::Debug for dyn SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningAlgorithm").field(&self.name()).finish()
    }
}
