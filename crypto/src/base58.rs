//! CryptoNote base58.
//!
//! Unlike Bitcoin's base58 this codec works on 8-byte blocks, each encoded
//! independently as exactly 11 characters (left-padded with `1`). A trailing
//! partial block of `n` bytes encodes to `ENCODED_BLOCK_SIZES[n]` characters,
//! so the text length alone determines the decoded length.

use thiserror::Error;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup table: ASCII byte → digit value (0xFF = invalid).
const DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

const FULL_BLOCK_SIZE: usize = 8;
const FULL_ENCODED_BLOCK_SIZE: usize = 11;
/// Encoded length of a block of `i` bytes.
const ENCODED_BLOCK_SIZES: [usize; FULL_BLOCK_SIZE + 1] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Base58Error {
    #[error("invalid base58 character at position {position}")]
    InvalidCharacter { position: usize },

    #[error("invalid base58 length {len}")]
    InvalidLength { len: usize },

    #[error("base58 block at position {position} overflows its byte size")]
    Overflow { position: usize },
}

/// Encoded length for `len` input bytes.
pub fn encoded_len(len: usize) -> usize {
    (len / FULL_BLOCK_SIZE) * FULL_ENCODED_BLOCK_SIZE + ENCODED_BLOCK_SIZES[len % FULL_BLOCK_SIZE]
}

/// Decoded length for `len` encoded characters, if `len` is reachable.
pub fn decoded_len(len: usize) -> Option<usize> {
    let tail = len % FULL_ENCODED_BLOCK_SIZE;
    let tail_bytes = ENCODED_BLOCK_SIZES.iter().position(|&size| size == tail)?;
    Some((len / FULL_ENCODED_BLOCK_SIZE) * FULL_BLOCK_SIZE + tail_bytes)
}

fn encode_block(block: &[u8], out: &mut [u8]) {
    let mut num = block
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte));
    let mut i = out.len();
    while num > 0 {
        i -= 1;
        out[i] = ALPHABET[(num % 58) as usize];
        num /= 58;
    }
}

/// Encode bytes as CryptoNote base58.
pub fn encode(data: &[u8]) -> String {
    let mut out = vec![ALPHABET[0]; encoded_len(data.len())];
    for (block, chunk) in data
        .chunks(FULL_BLOCK_SIZE)
        .zip(out.chunks_mut(FULL_ENCODED_BLOCK_SIZE))
    {
        encode_block(block, chunk);
    }
    out.into_iter().map(char::from).collect()
}

fn decode_block(block: &[u8], offset: usize, out: &mut [u8]) -> Result<(), Base58Error> {
    // 58^11 fits in u128, so a full block cannot wrap before the range check.
    let mut num: u128 = 0;
    for (i, &c) in block.iter().enumerate() {
        let digit = DECODE
            .get(c as usize)
            .copied()
            .filter(|&d| d != 0xFF)
            .ok_or(Base58Error::InvalidCharacter {
                position: offset + i,
            })?;
        num = num * 58 + u128::from(digit);
    }
    if num >> (8 * out.len()) != 0 {
        return Err(Base58Error::Overflow { position: offset });
    }
    for byte in out.iter_mut().rev() {
        *byte = num as u8;
        num >>= 8;
    }
    Ok(())
}

/// Decode CryptoNote base58 text.
///
/// Output size is derived from the input length up front, so allocation is
/// bounded by the text the caller already holds.
pub fn decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    let bytes = text.as_bytes();
    let len = decoded_len(bytes.len()).ok_or(Base58Error::InvalidLength { len: bytes.len() })?;
    let mut out = vec![0u8; len];
    for (i, (block, chunk)) in bytes
        .chunks(FULL_ENCODED_BLOCK_SIZE)
        .zip(out.chunks_mut(FULL_BLOCK_SIZE))
        .enumerate()
    {
        decode_block(block, i * FULL_ENCODED_BLOCK_SIZE, chunk)?;
    }
    Ok(out)
}
