#![no_main]

use libfuzzer_sys::fuzz_target;

use json_replace::domain::services::SerializeOptions;
use json_replace::{to_json_string, transform, Direction, KeyPath, SubstitutionRule};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = serde_json::from_str::<serde_json::Value>(content) else {
        return;
    };

    let rules: Vec<SubstitutionRule> = ["a", "a.b", "a.b.c", "name"]
        .iter()
        .filter_map(|raw| KeyPath::parse(raw).ok())
        .map(|key| SubstitutionRule::new(key, "x", "y"))
        .collect();

    for direction in Direction::ALL {
        let result = transform(document.clone(), &rules, direction);
        let rendered = to_json_string(&result.document, &SerializeOptions::default())
            .expect("parsed documents always serialize");
        let reparsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("serialized output always parses");
        assert_eq!(reparsed, result.document);
    }
});
