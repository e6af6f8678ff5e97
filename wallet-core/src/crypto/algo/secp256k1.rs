// wallet-core/src/crypto/algo/secp256k1.rs
//
// secp256k1 ECDSA - Cosmos, Ethereum, Injective
// Signature layout: r (32B) || s (32B) || recovery id (1B, 0 hoặc 1)

use super::{algo_name, SigningAlgorithm};
use crate::crypto::key_deriver::CurveType;
use crate::error::{CryptoError, WalletError, WalletResult};
use async_trait::async_trait;
use k256::{
    ecdsa::{signature::hazmat::PrehashVerifier, Signature, SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
    PublicKey,
};

/// secp256k1 signing over a 32-byte pre-hashed message.
///
/// # Security
/// - RFC6979 deterministic nonces, low-s normalized signatures
/// - `SigningKey` zeroizes itself on drop
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Algo;

impl Secp256k1Algo {
    pub const SECRET_LEN: usize = 32;
    pub const PREHASH_LEN: usize = 32;
    pub const COMPRESSED_LEN: usize = 33;
    pub const UNCOMPRESSED_LEN: usize = 65;

    fn signing_key(secret: &[u8]) -> WalletResult<SigningKey> {
        // from_slice left-pads short input
        if secret.len() != Self::SECRET_LEN {
            return Err(WalletError::invalid_key(format!(
                "secp256k1 private key must be 32 bytes, got {}",
                secret.len()
            )));
        }
        SigningKey::from_slice(secret).map_err(|e| {
            WalletError::invalid_key(format!("Invalid secp256k1 private key: {}", e))
        })
    }

    fn parse_public_key(pubkey: &[u8]) -> WalletResult<PublicKey> {
        PublicKey::from_sec1_bytes(pubkey).map_err(|e| {
            WalletError::invalid_key(format!(
                "Invalid secp256k1 public key ({} bytes): {}",
                pubkey.len(),
                e
            ))
        })
    }
}

#[async_trait]
impl SigningAlgorithm for Secp256k1Algo {
    fn name(&self) -> &str {
        algo_name::SECP256K1
    }

    fn curve(&self) -> CurveType {
        CurveType::Secp256k1
    }

    /// 65-byte uncompressed SEC1 point (0x04 || X || Y).
    fn public_key(&self, secret: &[u8]) -> WalletResult<Vec<u8>> {
        let signing_key = Self::signing_key(secret)?;
        Ok(signing_key
            .verifying_key()
            .to_encoded_point(false)
            .as_bytes()
            .to_vec())
    }

    fn compress(&self, pubkey: &[u8]) -> WalletResult<Vec<u8>> {
        let point = Self::parse_public_key(pubkey)?;
        Ok(point.to_encoded_point(true).as_bytes().to_vec())
    }

    fn uncompress(&self, pubkey: &[u8]) -> WalletResult<Vec<u8>> {
        let point = Self::parse_public_key(pubkey)?;
        Ok(point.to_encoded_point(false).as_bytes().to_vec())
    }

    /// Signs an already hashed message.
    ///
    /// `message` must be exactly 32 bytes. Shorter digests are rejected
    /// rather than zero-padded, unlike cosmjs `Secp256k1.createSignature`,
    /// which accepts anything up to 32 bytes.
    async fn sign(&self, message: &[u8], secret: &[u8]) -> WalletResult<Vec<u8>> {
        if message.len() != Self::PREHASH_LEN {
            return Err(WalletError::Crypto(CryptoError::SigningFailed(format!(
                "secp256k1 expects a 32-byte message hash, got {} bytes",
                message.len()
            ))));
        }

        let signing_key = Self::signing_key(secret)?;
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(message)
            .map_err(|e| WalletError::Crypto(CryptoError::SigningFailed(e.to_string())))?;

        let mut out = Vec::with_capacity(65);
        out.extend_from_slice(&signature.to_bytes());
        out.push(recovery_id.to_byte());
        Ok(out)
    }

    async fn verify(&self, signature: &[u8], message: &[u8], pubkey: &[u8]) -> WalletResult<bool> {
        // Recovery byte (nếu có) không tham gia verify
        let rs = match signature.len() {
            64 | 65 => &signature[..64],
            other => return Err(WalletError::InvalidSignatureLength(other)),
        };

        let Ok(signature) = Signature::from_slice(rs) else {
            return Ok(false);
        };
        let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(pubkey) else {
            return Ok(false);
        };

        Ok(verifying_key.verify_prehash(message, &signature).is_ok())
    }
}

// =============================================================================
// TESTS
// =============================================================================
