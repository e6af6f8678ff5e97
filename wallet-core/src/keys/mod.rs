// wallet-core/src/keys/mod.rs

//! Key Value Types
//!
//! Immutable values along the derivation chain:
//! [`PrivateKey`] → [`PublicKey`] → [`Address`].

pub mod address;
pub mod private_key;
pub mod public_key;

pub use address::Address;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
