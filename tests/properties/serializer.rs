//! Property tests for re-serialization.

use proptest::prelude::*;
use serde_json::Value;

use json_replace::domain::services::SerializeOptions;
use json_replace::to_json_string;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[ -~é漢]{0,10}".prop_map(Value::String),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Serialized output parses back to the same document at any
    /// indent, with a single line ending style throughout.
    #[test]
    fn property_output_reparses(
        doc in document(),
        indent in 0usize..=8,
        newline in any::<bool>(),
        crlf in any::<bool>(),
    ) {
        let options = SerializeOptions { indent, trailing_newline: newline, crlf };
        let text = to_json_string(&doc, &options).unwrap();

        prop_assert_eq!(text.ends_with('\n'), newline);
        if crlf {
            prop_assert!(!text.replace("\r\n", "").contains('\n'));
        } else {
            prop_assert!(!text.contains('\r'));
        }
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(reparsed, doc);
    }
}
