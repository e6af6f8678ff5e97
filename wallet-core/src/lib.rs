// wallet-core/src/lib.rs

//! Multi-chain identity and signing core.
//!
//! One seed phrase → chain-specific accounts (private key, public key, address)
//! under pluggable derivation and address-encoding rules, plus chain-correct
//! signature post-processing.
//!
//! ```text
//! mnemonic ─► KeyDeriver ─► PrivateKey[] ─► Wallet
//! Wallet::get_account_by_index ─► PublicKey ─► AddressStrategy ─► Address
//! Wallet::sign_by_index ─► signature ─► SignatureProcessor ─► broadcast (caller)
//! ```
//!
//! Names in configs (`"secp256k1"`, `"cosmos"`, ...) are resolved once against an
//! explicit [`Registry`], built at startup and frozen before being shared.

pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod keys;
pub mod registry;
pub mod wallet;

// Re-exports for cleaner API access
pub use chains::evm::{EthSecp256k1Signature, SignatureFormat, SignatureProcessor};
pub use chains::{AddressStrategy, DecodedAddress};
pub use config::{AddressConfig, AlgoRef, PrivateKeyConfig, PublicKeyConfig, StrategyRef, WalletConfig};
pub use crypto::{CryptoBytes, CurveType, HdPath, SigningAlgorithm, WalletMnemonic};
pub use error::{CryptoError, MnemonicError, WalletError, WalletResult};
pub use keys::{Address, PrivateKey, PublicKey};
pub use registry::Registry;
pub use wallet::{Account, AccountSigner, Wallet};
