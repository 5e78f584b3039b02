//! Wallet core utilities for CCX.
//!
//! Everything a wallet front end needs around a ledger it does not own:
//! - Address validation against the configured network
//! - Secret/public key correspondence checks before keys are trusted
//! - Transfer history and payment order reports
//!
//! All functions are pure and borrow their inputs only for the duration of
//! the call.

pub mod checks;
pub mod error;
pub mod report;

pub use checks::{check_address, ensure_keys_match, parse_order, validate_orders};
pub use error::WalletError;
pub use report::{order_report, transfer_report, UNKNOWN_ADDRESS};
