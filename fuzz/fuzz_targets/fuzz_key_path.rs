#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Key path parsing should never panic
        let _ = json_replace::KeyPath::parse(raw);
    }
});
