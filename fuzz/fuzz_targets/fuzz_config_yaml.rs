#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz YAML config parsing and validation - this should never panic
        let _ = json_replace::Config::from_yaml_str(content, std::path::Path::new("fuzz.yaml"));
    }
});
