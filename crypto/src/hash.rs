//! Keccak-256 hashing (pre-standard Keccak padding, not NIST SHA3).

use sha3::{Digest, Keccak256};

/// Compute the 256-bit Keccak hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    keccak256_multi(&[data])
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn keccak256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}
