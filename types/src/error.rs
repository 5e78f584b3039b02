//! Error types shared across crates.

use thiserror::Error;

/// A numeric code that names no member of a wallet vocabulary enum.
///
/// Produced when the wallet engine hands over a code this build does not know,
/// which means the two sides disagree on the vocabulary version.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownEnumValueError {
    pub kind: &'static str,
    pub value: u32,
}

/// Failure to parse a decimal amount string into minor units.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid character {0:?} in amount")]
    InvalidCharacter(char),

    #[error("grouping separator {0:?} is not at a thousands boundary")]
    MisplacedSeparator(char),

    #[error("amount has more than {max} decimal places")]
    TooManyDecimals { max: u8 },

    #[error("amount does not fit in 64 bits of minor units")]
    Overflow,
}
