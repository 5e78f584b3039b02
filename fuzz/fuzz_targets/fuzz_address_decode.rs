#![no_main]

use ccx_types::CurrencyParams;
use libfuzzer_sys::fuzz_target;

// Arbitrary text must be rejected with a typed error or accepted, never panic.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let currency = CurrencyParams::default();

    match ccx_crypto::decode_address(text) {
        Ok(decoded) => {
            // Anything that decodes must re-encode to the same text.
            let encoded = ccx_crypto::encode_address(decoded.prefix, &decoded.keys);
            assert_eq!(encoded, text);
            let validated = ccx_crypto::validate_address(text, &currency);
            assert_eq!(validated.is_ok(), decoded.prefix == currency.address_prefix);
        }
        Err(_) => {
            assert!(ccx_crypto::validate_address(text, &currency).is_err());
        }
    }
});
