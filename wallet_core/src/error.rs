use ccx_crypto::{AddressError, KeyMismatchError};
use ccx_types::{AmountError, UnknownEnumValueError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("invalid address in order {index}: {source}")]
    InvalidOrderAddress {
        index: usize,
        #[source]
        source: AddressError,
    },

    #[error(transparent)]
    KeyMismatch(#[from] KeyMismatchError),

    #[error(transparent)]
    UnknownEnumValue(#[from] UnknownEnumValueError),

    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
}
