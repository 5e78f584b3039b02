//! Fundamental types for CCX wallet utilities.
//!
//! This crate defines the types shared between the validators, the report
//! formatters and the external wallet engine: keys, the wallet vocabulary
//! enums, currency parameters, amount formatting, and read-only ledger records.

pub mod amount;
pub mod error;
pub mod keys;
pub mod ledger;
pub mod params;
pub mod state;
pub mod time;

pub use amount::AmountFormat;
pub use error::{AmountError, UnknownEnumValueError};
pub use keys::{AddressKeys, KeyPair, PublicKey, SecretKey};
pub use ledger::{PaymentOrder, TransferRecord};
pub use params::CurrencyParams;
pub use state::{
    render, render_code, TrackingMode, TransactionState, TransferType, Vocabulary,
    WalletLifecycleState, VOCABULARY_VERSION,
};
pub use time::Timestamp;
