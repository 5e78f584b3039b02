//! Standard address encoding and validation.
//!
//! Address layout before base58:
//! `varint(prefix) ‖ spend_public_key (32) ‖ view_public_key (32) ‖ checksum (4)`
//!
//! Checksum: first 4 bytes of Keccak-256 over everything before it.
//! The prefix identifies the network; Conceal mainnet uses `0x7AD4`.

use crate::base58::{self, Base58Error};
use crate::hash::keccak256;
use crate::varint;
use ccx_types::{AddressKeys, CurrencyParams, PublicKey};
use thiserror::Error;

/// Number of checksum bytes appended to the address body.
pub const CHECKSUM_SIZE: usize = 4;
/// Spend key followed by view key.
const KEYS_SIZE: usize = 64;
/// Longest text that can decode to a standard address (10-byte prefix varint).
pub const MAX_ADDRESS_LEN: usize = 108;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("malformed address encoding: {0}")]
    MalformedEncoding(#[source] Base58Error),

    #[error("decoded address has the wrong length ({actual} bytes)")]
    WrongLength { actual: usize },

    #[error("address checksum mismatch")]
    ChecksumMismatch,

    #[error("address is for another network: expected prefix {expected:#x}, found {found:#x}")]
    WrongNetwork { expected: u64, found: u64 },
}

/// An address whose structure and checksum have been verified, with the
/// network prefix not yet checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedAddress {
    pub prefix: u64,
    pub keys: AddressKeys,
}

fn checksum(body: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let hash = keccak256(body);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&hash[..CHECKSUM_SIZE]);
    out
}

/// Encode a prefix and key pair as address text.
pub fn encode_address(prefix: u64, keys: &AddressKeys) -> String {
    let mut data = Vec::with_capacity(varint::MAX_VARINT_LEN + KEYS_SIZE + CHECKSUM_SIZE);
    varint::write(prefix, &mut data);
    data.extend_from_slice(keys.spend.as_bytes());
    data.extend_from_slice(keys.view.as_bytes());
    let sum = checksum(&data);
    data.extend_from_slice(&sum);
    base58::encode(&data)
}

/// Decode address text and verify its layout and checksum.
///
/// The network prefix is returned, not checked; see [`validate_address`].
pub fn decode_address(text: &str) -> Result<DecodedAddress, AddressError> {
    if text.len() > MAX_ADDRESS_LEN {
        return Err(AddressError::MalformedEncoding(Base58Error::InvalidLength {
            len: text.len(),
        }));
    }
    let data = base58::decode(text).map_err(AddressError::MalformedEncoding)?;

    let wrong_length = AddressError::WrongLength { actual: data.len() };
    let (prefix, prefix_len) = varint::decode(&data).map_err(|_| wrong_length.clone())?;
    if data.len() != prefix_len + KEYS_SIZE + CHECKSUM_SIZE {
        return Err(wrong_length);
    }

    let (body, sum) = data.split_at(data.len() - CHECKSUM_SIZE);
    if checksum(body).as_slice() != sum {
        return Err(AddressError::ChecksumMismatch);
    }

    let keys = &body[prefix_len..];
    let mut spend = [0u8; 32];
    let mut view = [0u8; 32];
    spend.copy_from_slice(&keys[..32]);
    view.copy_from_slice(&keys[32..]);

    Ok(DecodedAddress {
        prefix,
        keys: AddressKeys {
            spend: PublicKey(spend),
            view: PublicKey(view),
        },
    })
}

/// Validate address text against a currency and return its public keys.
///
/// Checks, in order: base58 encoding, byte layout, checksum, network prefix.
/// The keys are not checked to be valid curve points.
pub fn validate_address(
    text: &str,
    currency: &CurrencyParams,
) -> Result<AddressKeys, AddressError> {
    let result = decode_address(text).and_then(|decoded| {
        if decoded.prefix == currency.address_prefix {
            Ok(decoded.keys)
        } else {
            Err(AddressError::WrongNetwork {
                expected: currency.address_prefix,
                found: decoded.prefix,
            })
        }
    });
    if let Err(ref e) = result {
        tracing::debug!(error = %e, len = text.len(), "address rejected");
    }
    result
}

pub fn is_valid_address(text: &str, currency: &CurrencyParams) -> bool {
    validate_address(text, currency).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::generate_keypair;

    fn sample_keys() -> AddressKeys {
        AddressKeys {
            spend: generate_keypair().public,
            view: generate_keypair().public,
        }
    }

    fn mainnet() -> CurrencyParams {
        CurrencyParams::default()
    }

    #[test]
    fn encode_and_validate() {
        let keys = sample_keys();
        let addr = encode_address(mainnet().address_prefix, &keys);
        assert!(addr.starts_with("ccx7"));
        assert_eq!(addr.len(), 98);
        assert_eq!(validate_address(&addr, &mainnet()), Ok(keys));
    }

    #[test]
    fn encode_is_deterministic() {
        let keys = AddressKeys {
            spend: PublicKey([7u8; 32]),
            view: PublicKey([8u8; 32]),
        };
        assert_eq!(encode_address(0x7AD4, &keys), encode_address(0x7AD4, &keys));
    }

    #[test]
    fn max_prefix_fits_max_length() {
        let addr = encode_address(u64::MAX, &sample_keys());
        assert_eq!(addr.len(), MAX_ADDRESS_LEN);
        assert_eq!(decode_address(&addr).unwrap().prefix, u64::MAX);
    }

    #[test]
    fn flipped_checksum_rejected() {
        let keys = sample_keys();
        let mut data = varint::encode(0x7AD4);
        data.extend_from_slice(keys.spend.as_bytes());
        data.extend_from_slice(keys.view.as_bytes());
        let mut sum = checksum(&data);
        sum[0] ^= 0x01;
        data.extend_from_slice(&sum);
        let addr = base58::encode(&data);
        assert_eq!(
            validate_address(&addr, &mainnet()),
            Err(AddressError::ChecksumMismatch)
        );
    }

    #[test]
    fn flipped_key_byte_rejected() {
        let keys = sample_keys();
        let mut data = varint::encode(0x7AD4);
        data.extend_from_slice(keys.spend.as_bytes());
        data.extend_from_slice(keys.view.as_bytes());
        let sum = checksum(&data);
        data[5] ^= 0x80;
        data.extend_from_slice(&sum);
        assert_eq!(
            decode_address(&base58::encode(&data)),
            Err(AddressError::ChecksumMismatch)
        );
    }

    #[test]
    fn truncated_address_rejected() {
        let addr = encode_address(0x7AD4, &sample_keys());
        let truncated = &addr[..addr.len() - 1];
        assert!(matches!(
            validate_address(truncated, &mainnet()),
            Err(AddressError::WrongLength { .. }) | Err(AddressError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn wrong_network_rejected() {
        let keys = sample_keys();
        let addr = encode_address(0x7AD4, &keys);
        let testnet = CurrencyParams {
            address_prefix: 0x3E,
            ..CurrencyParams::default()
        };
        assert_eq!(
            validate_address(&addr, &testnet),
            Err(AddressError::WrongNetwork {
                expected: 0x3E,
                found: 0x7AD4
            })
        );
    }

    #[test]
    fn garbage_rejected_without_panic() {
        let overflow = "z".repeat(11);
        let too_long = "1".repeat(500);
        for text in ["", "ccx", "0OIl", "ccx_abc", overflow.as_str(), too_long.as_str()] {
            assert!(validate_address(text, &mainnet()).is_err(), "{text:?}");
        }
    }

    #[test]
    fn out_of_alphabet_character_is_malformed() {
        let addr = encode_address(0x7AD4, &sample_keys());
        assert!(is_valid_address(&addr, &mainnet()));
        for (position, bad) in [(10, '0'), (50, 'O'), (97, 'l')] {
            let mut text: Vec<char> = addr.chars().collect();
            text[position] = bad;
            let text: String = text.into_iter().collect();
            assert_eq!(text.len(), 98);
            assert_eq!(
                validate_address(&text, &mainnet()),
                Err(AddressError::MalformedEncoding(Base58Error::InvalidCharacter {
                    position
                }))
            );
            assert!(!is_valid_address(&text, &mainnet()));
        }
    }

    #[test]
    fn empty_text_is_wrong_length() {
        assert_eq!(
            decode_address(""),
            Err(AddressError::WrongLength { actual: 0 })
        );
    }

    #[test]
    fn unterminated_prefix_is_wrong_length() {
        let addr = base58::encode(&[0x80; 9]);
        assert_eq!(
            decode_address(&addr),
            Err(AddressError::WrongLength { actual: 9 })
        );
    }

    #[test]
    fn error_messages_are_actionable() {
        assert_eq!(
            AddressError::ChecksumMismatch.to_string(),
            "address checksum mismatch"
        );
        assert_eq!(
            AddressError::WrongNetwork {
                expected: 0x7AD4,
                found: 0x3E
            }
            .to_string(),
            "address is for another network: expected prefix 0x7ad4, found 0x3e"
        );
    }
}
