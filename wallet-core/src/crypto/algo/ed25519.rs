// wallet-core/src/crypto/algo/ed25519.rs
//
// Ed25519 (RFC 8032) - Solana
// Public key luôn 32 bytes, không có dạng compressed/uncompressed.

use super::{algo_name, SigningAlgorithm};
use crate::crypto::key_deriver::CurveType;
use crate::error::{WalletError, WalletResult};
use async_trait::async_trait;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Algo;

impl Ed25519Algo {
    pub const SIGNATURE_LEN: usize = 64;

    fn signing_key(secret: &[u8]) -> WalletResult<SigningKey> {
        let bytes: &[u8; 32] = secret.try_into().map_err(|_| {
            WalletError::invalid_key(format!(
                "Ed25519 private key must be 32 bytes, got {}",
                secret.len()
            ))
        })?;
        Ok(SigningKey::from_bytes(bytes))
    }

    fn check_public_key(pubkey: &[u8]) -> WalletResult<Vec<u8>> {
        if pubkey.len() != 32 {
            return Err(WalletError::invalid_key(format!(
                "Ed25519 public key must be 32 bytes, got {}",
                pubkey.len()
            )));
        }
        Ok(pubkey.to_vec())
    }
}

#[async_trait]
impl SigningAlgorithm for Ed25519Algo {
    fn name(&self) -> &str {
        algo_name::ED25519
    }

    fn curve(&self) -> CurveType {
        CurveType::Ed25519
    }

    fn public_key(&self, secret: &[u8]) -> WalletResult<Vec<u8>> {
        let signing_key = Self::signing_key(secret)?;
        Ok(signing_key.verifying_key().to_bytes().to_vec())
    }

    fn compress(&self, pubkey: &[u8]) -> WalletResult<Vec<u8>> {
        Self::check_public_key(pubkey)
    }

    fn uncompress(&self, pubkey: &[u8]) -> WalletResult<Vec<u8>> {
        Self::check_public_key(pubkey)
    }

    async fn sign(&self, message: &[u8], secret: &[u8]) -> WalletResult<Vec<u8>> {
        let signing_key = Self::signing_key(secret)?;
        Ok(signing_key.sign(message).to_bytes().to_vec())
    }

    async fn verify(&self, signature: &[u8], message: &[u8], pubkey: &[u8]) -> WalletResult<bool> {
        let sig_bytes: &[u8; 64] = signature
            .try_into()
            .map_err(|_| WalletError::InvalidSignatureLength(signature.len()))?;
        let Ok(pubkey_bytes) = <&[u8; 32]>::try_from(pubkey) else {
            return Ok(false);
        };
        let Ok(verifying_key) = VerifyingKey::from_bytes(pubkey_bytes) else {
            return Ok(false);
        };

        let signature = Signature::from_bytes(sig_bytes);
        Ok(verifying_key.verify(message, &signature).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 test 1
    const RFC8032_SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC8032_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const RFC8032_SIG: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    #[test]
    fn test_public_key_vector() {
        let secret = hex::decode(RFC8032_SECRET).unwrap();
        let pubkey = Ed25519Algo.public_key(&secret).unwrap();
        assert_eq!(hex::encode(&pubkey), RFC8032_PUBLIC);
        // compress/uncompress are identity
        assert_eq!(Ed25519Algo.compress(&pubkey).unwrap(), pubkey);
        assert_eq!(Ed25519Algo.public_key_with(&secret, false).unwrap(), pubkey);
    }

    #[tokio::test]
    async fn test_sign_vector_empty_message() {
        let secret = hex::decode(RFC8032_SECRET).unwrap();
        let sig = Ed25519Algo.sign(b"", &secret).await.unwrap();
        assert_eq!(hex::encode(&sig), RFC8032_SIG);

        let pubkey = hex::decode(RFC8032_PUBLIC).unwrap();
        assert!(Ed25519Algo.verify(&sig, b"", &pubkey).await.unwrap());
        assert!(!Ed25519Algo.verify(&sig, b"tampered", &pubkey).await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_bad_inputs() {
        let pubkey = hex::decode(RFC8032_PUBLIC).unwrap();
        assert_eq!(
            Ed25519Algo.verify(&[0u8; 65], b"", &pubkey).await.unwrap_err(),
            WalletError::InvalidSignatureLength(65)
        );
        assert!(!Ed25519Algo.verify(&[0u8; 64], b"", &[1u8; 31]).await.unwrap());
        assert!(Ed25519Algo.sign(b"", &[1u8; 16]).await.is_err());
    }
}
