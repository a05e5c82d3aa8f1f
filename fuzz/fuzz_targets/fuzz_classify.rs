#![no_main]

use libfuzzer_sys::fuzz_target;
use wavscan_header::{classify, Outcome, WavHeader, HEADER_LEN};

fuzz_target!(|data: &[u8]| {
    match WavHeader::from_bytes(data) {
        Ok(header) => {
            let outcome = classify(&header);
            assert!(!matches!(outcome, Outcome::Truncated | Outcome::Unreadable));
        }
        Err(_) => assert!(data.len() < HEADER_LEN),
    }
});
