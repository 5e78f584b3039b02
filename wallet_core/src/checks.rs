//! Input checks a wallet runs before trusting externally supplied data.

use crate::error::WalletError;
use ccx_crypto::{validate_address, verify_key_correspondence};
use ccx_types::{AddressKeys, CurrencyParams, PaymentOrder, PublicKey, SecretKey};

/// Refuse to continue with a secret key that does not produce `expected`.
///
/// `context` names the key for the user, e.g. `"spend key"`.
pub fn ensure_keys_match(
    secret: &SecretKey,
    expected: &PublicKey,
    context: &str,
) -> Result<(), WalletError> {
    verify_key_correspondence(secret, expected, context)?;
    Ok(())
}

/// [`validate_address`] lifted into [`WalletError`].
pub fn check_address(text: &str, currency: &CurrencyParams) -> Result<AddressKeys, WalletError> {
    Ok(validate_address(text, currency)?)
}

/// Build an order from user input: the amount is decimal text in the
/// currency's display unit. The address is checked later by
/// [`validate_orders`] so the caller learns its position in the list.
pub fn parse_order(
    address: String,
    amount: &str,
    currency: &CurrencyParams,
) -> Result<PaymentOrder, WalletError> {
    let amount = currency.amount.parse(amount)?;
    Ok(PaymentOrder { address, amount })
}

/// Validate every destination of a payment order list against the network.
///
/// Stops at the first bad address and reports its position in the list.
pub fn validate_orders(
    orders: &[PaymentOrder],
    currency: &CurrencyParams,
) -> Result<(), WalletError> {
    for (index, order) in orders.iter().enumerate() {
        validate_address(&order.address, currency)
            .map_err(|source| WalletError::InvalidOrderAddress { index, source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccx_crypto::{encode_address, generate_keypair, AddressError};
    use ccx_types::{AmountError, TransactionState};

    fn valid_address(currency: &CurrencyParams) -> String {
        let keys = AddressKeys {
            spend: generate_keypair().public,
            view: generate_keypair().public,
        };
        encode_address(currency.address_prefix, &keys)
    }

    #[test]
    fn matching_keys_pass() {
        let kp = generate_keypair();
        assert!(ensure_keys_match(&kp.secret, &kp.public, "spend key").is_ok());
    }

    #[test]
    fn mismatched_keys_surface_context() {
        let kp = generate_keypair();
        let other = generate_keypair();
        let err = ensure_keys_match(&kp.secret, &other.public, "view key").unwrap_err();
        assert!(matches!(err, WalletError::KeyMismatch(ref e) if e.context == "view key"));
        assert!(err.to_string().ends_with(": view key"));
    }

    #[test]
    fn valid_orders_pass() {
        let currency = CurrencyParams::default();
        let orders = vec![
            PaymentOrder {
                address: valid_address(&currency),
                amount: 1,
            },
            PaymentOrder {
                address: valid_address(&currency),
                amount: 2,
            },
        ];
        assert!(validate_orders(&orders, &currency).is_ok());
        assert!(validate_orders(&[], &currency).is_ok());
    }

    #[test]
    fn bad_order_reports_index() {
        let currency = CurrencyParams::default();
        let orders = vec![
            PaymentOrder {
                address: valid_address(&currency),
                amount: 1,
            },
            PaymentOrder {
                address: "ccx7notanaddress".to_string(),
                amount: 2,
            },
        ];
        let err = validate_orders(&orders, &currency).unwrap_err();
        assert!(matches!(err, WalletError::InvalidOrderAddress { index: 1, .. }));
    }

    #[test]
    fn order_for_other_network_rejected() {
        let mainnet = CurrencyParams::default();
        let other = CurrencyParams {
            address_prefix: 0x3E,
            ..CurrencyParams::default()
        };
        let orders = vec![PaymentOrder {
            address: valid_address(&other),
            amount: 5,
        }];
        let err = validate_orders(&orders, &mainnet).unwrap_err();
        assert!(matches!(
            err,
            WalletError::InvalidOrderAddress {
                index: 0,
                source: AddressError::WrongNetwork { .. }
            }
        ));
    }

    #[test]
    fn check_address_wraps_rejection() {
        let currency = CurrencyParams::default();
        let addr = valid_address(&currency);
        assert!(check_address(&addr, &currency).is_ok());
        let err = check_address("", &currency).unwrap_err();
        assert!(matches!(err, WalletError::InvalidAddress(_)));
        assert!(err.to_string().starts_with("invalid address: "));
    }

    #[test]
    fn parse_order_uses_display_unit() {
        let currency = CurrencyParams::default();
        let order = parse_order("dest".to_string(), "1.5", &currency).unwrap();
        assert_eq!(order.amount, 1_500_000);
        assert_eq!(order.address, "dest");

        let err = parse_order("dest".to_string(), "1.2.3", &currency).unwrap_err();
        assert!(matches!(err, WalletError::InvalidAmount(_)));
        let err = parse_order("dest".to_string(), "", &currency).unwrap_err();
        assert!(matches!(err, WalletError::InvalidAmount(AmountError::Empty)));
    }

    #[test]
    fn unknown_engine_code_converts() {
        fn state(code: u32) -> Result<TransactionState, WalletError> {
            Ok(TransactionState::try_from(code)?)
        }
        assert_eq!(state(0).unwrap(), TransactionState::Confirmed);
        let err = state(9).unwrap_err();
        assert!(matches!(err, WalletError::UnknownEnumValue(_)));
        assert!(err.to_string().contains('9'));
    }
}
