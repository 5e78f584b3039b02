use proptest::prelude::*;

use ccx_types::{
    render_code, AmountFormat, Timestamp, TrackingMode, TransactionState, TransferType,
    WalletLifecycleState,
};

proptest! {
    /// parse is the inverse of format_unsigned for every amount and precision.
    #[test]
    fn amount_parse_inverts_format(raw in any::<u64>(), places in 0u8..=12, grouped in any::<bool>()) {
        let mut fmt = AmountFormat::new(places, "CCX");
        if grouped {
            fmt = fmt.with_grouping(',');
        }
        let text = fmt.format_unsigned(raw);
        prop_assert_eq!(fmt.parse(&text), Ok(raw));
    }

    /// Signed and unsigned formatting differ only by the leading minus.
    #[test]
    fn signed_format_mirrors_unsigned(raw in any::<i64>()) {
        let fmt = AmountFormat::new(5, "CCX");
        let signed = fmt.format_signed(raw);
        let unsigned = fmt.format_unsigned(raw.unsigned_abs());
        if raw < 0 {
            prop_assert_eq!(signed, format!("-{unsigned}"));
        } else {
            prop_assert_eq!(signed, unsigned);
        }
    }

    /// Formatting keeps exactly `decimal_places` digits after the point.
    #[test]
    fn fraction_width_is_fixed(raw in any::<u64>(), places in 1u8..=12) {
        let text = AmountFormat::new(places, "").format_unsigned(raw);
        let (_, fraction) = text.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), places as usize);
    }

    /// Codes past the end of every table are rejected, never rendered.
    #[test]
    fn out_of_domain_codes_fail(code in 5u32..) {
        prop_assert!(render_code::<WalletLifecycleState>(code).is_err());
        prop_assert!(render_code::<TrackingMode>(code).is_err());
        prop_assert!(render_code::<TransactionState>(code).is_err());
        prop_assert!(render_code::<TransferType>(code).is_err());
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in any::<u64>(), b in any::<u64>()) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }
}
