//! Secret/public key correspondence on Ed25519.
//!
//! CryptoNote secret keys are raw scalars (not Ed25519 seeds): the public key
//! is `secret·G` with no hashing or clamping in between.

use ccx_types::{KeyPair, PublicKey, SecretKey};
use curve25519_dalek::{constants::ED25519_BASEPOINT_TABLE, scalar::Scalar};
use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroize;

/// The secret key does not produce the expected public key.
///
/// `context` is the caller's message, carried verbatim; empty means none.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("secret key does not correspond to public key{}", context_suffix(.context))]
pub struct KeyMismatchError {
    pub context: String,
}

fn context_suffix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!(": {context}")
    }
}

fn mul_base(scalar: &Scalar) -> PublicKey {
    PublicKey((scalar * ED25519_BASEPOINT_TABLE).compress().to_bytes())
}

/// Derive `secret·G`. Returns `None` for a non-canonical scalar (≥ ℓ), which
/// no wallet would have generated.
pub fn public_key_from_secret(secret: &SecretKey) -> Option<PublicKey> {
    let scalar: Option<Scalar> = Scalar::from_canonical_bytes(*secret.as_bytes()).into();
    scalar.map(|mut s| {
        let public = mul_base(&s);
        s.zeroize();
        public
    })
}

/// Check that `secret` corresponds to `expected`.
///
/// The comparison is constant-time. Neither key is logged.
pub fn verify_key_correspondence(
    secret: &SecretKey,
    expected: &PublicKey,
    context: &str,
) -> Result<(), KeyMismatchError> {
    let matches = public_key_from_secret(secret)
        .map(|derived| bool::from(derived.0[..].ct_eq(&expected.0[..])))
        .unwrap_or(false);
    if matches {
        Ok(())
    } else {
        tracing::debug!(context, "secret key does not match expected public key");
        Err(KeyMismatchError {
            context: context.to_owned(),
        })
    }
}

/// [`verify_key_correspondence`] over a stored pair.
pub fn verify_keypair(pair: &KeyPair, context: &str) -> Result<(), KeyMismatchError> {
    verify_key_correspondence(&pair.secret, &pair.public, context)
}

/// Build a pair from a secret, or `None` if the scalar is not canonical.
pub fn keypair_from_secret(secret: SecretKey) -> Option<KeyPair> {
    let public = public_key_from_secret(&secret)?;
    Some(KeyPair { public, secret })
}

/// Generate a key pair from a secure random source.
pub fn generate_keypair() -> KeyPair {
    let mut wide = [0u8; 64];
    OsRng.fill_bytes(&mut wide);
    let mut scalar = Scalar::from_bytes_mod_order_wide(&wide);
    wide.zeroize();

    let public = mul_base(&scalar);
    let secret = SecretKey(scalar.to_bytes());
    scalar.zeroize();
    KeyPair { public, secret }
}
