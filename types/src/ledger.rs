//! Read-only views of ledger entries owned by the wallet engine.

use crate::state::{TransactionState, TransferType};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// One transfer as recorded by the wallet engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub timestamp: Timestamp,
    /// Signed minor units; negative for outgoing.
    pub amount: i64,
    /// Counterparty address. Absent for coinbase and other keyless transfers.
    #[serde(default)]
    pub address: Option<String>,
    pub state: TransactionState,
    pub transfer_type: TransferType,
}

/// A destination/amount pair for a transfer not yet committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub address: String,
    /// Minor units.
    pub amount: u64,
}

impl TransferRecord {
    /// The address if present and non-empty.
    pub fn counterparty(&self) -> Option<&str> {
        self.address.as_deref().filter(|a| !a.is_empty())
    }
}
