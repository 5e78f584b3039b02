//! Wallet vocabulary: the state enums shared with the wallet engine.
//!
//! Each enum carries a fixed numeric code (the engine's encoding) and a fixed
//! label. The tables below are the single definition both sides build against;
//! any change to a member set or code must bump [`VOCABULARY_VERSION`].

use crate::error::UnknownEnumValueError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the code/label tables in this module.
pub const VOCABULARY_VERSION: u32 = 1;

/// Common surface of every vocabulary enum.
pub trait Vocabulary: Copy + TryFrom<u32, Error = UnknownEnumValueError> + 'static {
    /// Name used in error messages.
    const KIND: &'static str;
    /// Every member, in code order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn code(self) -> u32;
}

/// Render a vocabulary tag to its label.
pub fn render<T: Vocabulary>(tag: T) -> &'static str {
    tag.label()
}

/// Render a raw engine code, failing loudly on codes outside the table.
pub fn render_code<T: Vocabulary>(code: u32) -> Result<&'static str, UnknownEnumValueError> {
    T::try_from(code).map(T::label)
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[repr(u32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code, )+
        }

        impl Vocabulary for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            fn code(self) -> u32 {
                self as u32
            }
        }

        impl $name {
            pub fn label(self) -> &'static str {
                Vocabulary::label(self)
            }

            pub fn code(self) -> u32 {
                Vocabulary::code(self)
            }
        }

        impl TryFrom<u32> for $name {
            type Error = UnknownEnumValueError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $( $code => Ok(Self::$variant), )+
                    _ => Err(UnknownEnumValueError { kind: $kind, value }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

vocabulary! {
    /// Lifecycle of a wallet container as reported by the engine.
    pub enum WalletLifecycleState ("wallet state") {
        NotInitialized = 0 => "NOT_INITIALIZED",
        Initialized = 1 => "INITIALIZED",
        /// Container is being read from disk.
        Loading = 2 => "LOADING",
        /// Container is being written to disk.
        Saving = 3 => "SAVING",
        Closed = 4 => "CLOSED",
    }
}

vocabulary! {
    /// Whether the wallet can spend or only watch.
    pub enum TrackingMode ("tracking mode") {
        /// View key only; the spend secret is the null key.
        Tracking = 0 => "TRACKING",
        /// Spend secret held; outgoing transfers can be signed.
        NotTracking = 1 => "NOT_TRACKING",
        /// Container holds no addresses yet.
        NoAddresses = 2 => "NO_ADDRESSES",
    }
}

vocabulary! {
    /// State of a ledger transaction.
    pub enum TransactionState ("transaction state") {
        Confirmed = 0 => "CONFIRMED",
        Failed = 1 => "FAILED",
        Cancelled = 2 => "CANCELLED",
        /// Built but not yet relayed.
        Created = 3 => "CREATED",
        Deleted = 4 => "DELETED",
    }
}

vocabulary! {
    /// Direction of a transfer relative to the wallet.
    pub enum TransferType ("transfer type") {
        Input = 0 => "INPUT",
        Output = 1 => "OUTPUT",
    }
}
