//! Key types for CryptoNote spend/view key pairs.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte compressed Edwards25519 point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; 32]);

/// A 32-byte secret scalar, little-endian.
///
/// This type intentionally does not implement `Debug`, `Serialize`, or `Clone`
/// to prevent accidental exposure. Key bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(pub [u8; 32]);

/// A secret scalar together with the public key it is expected to produce.
///
/// Nothing about construction guarantees `public = secret·G`; use
/// `ccx_crypto::verify_keypair` before trusting a pair loaded from outside.
pub struct KeyPair {
    pub public: PublicKey,
    pub secret: SecretKey,
}

/// The two public keys carried by a standard address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressKeys {
    pub spend: PublicKey,
    pub view: PublicKey,
}

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl SecretKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}
