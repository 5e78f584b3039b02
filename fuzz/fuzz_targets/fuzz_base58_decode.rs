#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // 1. Encoding arbitrary bytes then decoding must roundtrip.
    let text = ccx_crypto::base58::encode(data);
    assert_eq!(ccx_crypto::base58::decode(&text).as_deref(), Ok(data));

    // 2. Decoding arbitrary text must never panic.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = ccx_crypto::base58::decode(s);
    }
});
