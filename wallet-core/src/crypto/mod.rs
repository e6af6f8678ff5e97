// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic**: BIP-39 phrases and seed derivation via [`WalletMnemonic`].
//! - **Key Derivation**: BIP-32 (secp256k1) and SLIP-0010 (ed25519) via [`KeyDeriver`].
//! - **HD Paths**: parsed, canonical derivation paths via [`HdPath`].
//! - **Signing Algorithms**: curve capability bundles behind [`SigningAlgorithm`].

pub mod algo;
pub mod bytes;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use algo::{Ed25519Algo, Secp256k1Algo, SigningAlgorithm};
pub use bytes::CryptoBytes;
pub use key_deriver::{CurveType, DerivedKey, KeyDeriver};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::{coin_type, ChildIndex, HdPath};
