//! Unsigned LEB128 varints as used for address prefixes.

use thiserror::Error;

/// Longest encoding of a `u64` (ceil(64 / 7)).
pub const MAX_VARINT_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum VarintError {
    #[error("varint is truncated")]
    Truncated,

    #[error("varint overflows 64 bits")]
    Overflow,

    #[error("varint has a redundant trailing zero byte")]
    NonCanonical,
}

/// Append the varint encoding of `value` to `out`.
pub fn write(mut value: u64, out: &mut Vec<u8>) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7F) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

pub fn encode(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_LEN);
    write(value, &mut out);
    out
}

/// Read a varint from the front of `bytes`, returning the value and the
/// number of bytes consumed. Only the canonical (shortest) form is accepted.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize), VarintError> {
    let mut value: u64 = 0;
    for (i, &byte) in bytes.iter().enumerate().take(MAX_VARINT_LEN) {
        let part = u64::from(byte & 0x7F);
        if i == MAX_VARINT_LEN - 1 && part > 1 {
            return Err(VarintError::Overflow);
        }
        value |= part << (7 * i);
        if byte & 0x80 == 0 {
            if byte == 0 && i > 0 {
                return Err(VarintError::NonCanonical);
            }
            return Ok((value, i + 1));
        }
    }
    if bytes.len() >= MAX_VARINT_LEN {
        Err(VarintError::Overflow)
    } else {
        Err(VarintError::Truncated)
    }
}
