//! Currency parameters the validators and formatters read.

use crate::amount::AmountFormat;
use serde::{Deserialize, Serialize};

/// Base58 address prefix of the Conceal main network (`ccx7...` addresses).
pub const MAINNET_ADDRESS_PREFIX: u64 = 0x7AD4;

/// Network and presentation parameters of one currency deployment.
///
/// Owned by the caller; the core only reads it for the duration of a call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyParams {
    /// Varint prefix every address on this network starts with.
    pub address_prefix: u64,
    /// Rendering rule for amounts.
    pub amount: AmountFormat,
}

impl Default for CurrencyParams {
    fn default() -> Self {
        Self {
            address_prefix: MAINNET_ADDRESS_PREFIX,
            amount: AmountFormat::default(),
        }
    }
}
