//! Cryptographic primitives for CCX wallet utilities.
//!
//! - **Keccak-256** (`cn_fast_hash`) for address checksums
//! - **CryptoNote base58** (8-byte blocks) for address text
//! - **Ed25519** scalar multiplication for secret/public key correspondence
//! - Address decoding with network prefix checks

pub mod address;
pub mod base58;
pub mod hash;
pub mod keys;
pub mod varint;

pub use address::{
    decode_address, encode_address, is_valid_address, validate_address, AddressError,
    DecodedAddress,
};
pub use base58::Base58Error;
pub use hash::{keccak256, keccak256_multi};
pub use keys::{
    generate_keypair, keypair_from_secret, public_key_from_secret, verify_key_correspondence,
    verify_keypair, KeyMismatchError,
};
pub use varint::VarintError;
