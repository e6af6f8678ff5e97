// wallet-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! # Key Features
//! - **Address Strategies**: `ethereum` (EIP-55 hex) and `injective-eth` (bech32 `inj`)
//!   sharing Keccak-256 public key hashing, via [`EthereumStrategy`] and [`InjectiveEthStrategy`].
//! - **Signature Processing**: raw/full/compact layouts of secp256k1 signatures via
//!   [`SignatureProcessor`].

pub mod address;
pub mod signature;

// Re-exports for cleaner API access
pub use address::{keccak256, Eip55Checksum, EthPublicKeyPreprocessor, EthereumStrategy, InjectiveEthStrategy};
pub use signature::{
    EthSecp256k1Signature, SignatureComponents, SignatureFormat, SignatureFormatFn,
    SignatureProcessor,
};
