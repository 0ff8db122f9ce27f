#![no_main]

use libfuzzer_sys::fuzz_target;
use splice_drum::{decode, encode};

fuzz_target!(|data: &[u8]| {
    let Ok(pattern) = decode(data) else {
        return;
    };
    let bytes = encode(&pattern).expect("decoded pattern must re-encode");
    assert_eq!(bytes.len(), 14 + data[13] as usize);
    let again = decode(&bytes).expect("encoded pattern must decode");
    assert!(again.bitwise_eq(&pattern));
});
