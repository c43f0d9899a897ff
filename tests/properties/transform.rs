//! Property tests for the substitution engine.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use json_replace::{transform, Direction, KeyPath, SubstitutionRule};

fn value_text() -> impl Strategy<Value = String> {
    "[a-z0-9:/\\.]{0,12}"
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::ToCommitted), Just(Direction::ToWorking)]
}

/// Distinct two-level paths so rules never alias each other
fn rules() -> impl Strategy<Value = Vec<SubstitutionRule>> {
    proptest::collection::btree_map(
        ("[a-c]{1,2}", "[x-z]{1,2}"),
        (value_text(), value_text()),
        1..=5,
    )
    .prop_map(|map| {
        map.into_iter()
            .map(|((parent, leaf), (working, committed))| {
                let key = KeyPath::parse(&format!("{}.{}", parent, leaf)).unwrap();
                SubstitutionRule::new(key, working, committed)
            })
            .collect()
    })
}

/// Document holding every rule's source value, plus an unrelated member
fn source_document(rules: &[SubstitutionRule], direction: Direction) -> Value {
    let mut root = Map::new();
    for rule in rules {
        let segments = rule.key.segments();
        let parent = root
            .entry(segments[0].clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(members) = parent {
            members.insert(segments[1].clone(), json!(rule.source(direction)));
        }
    }
    root.insert("untouched".to_string(), json!({"n": 1, "s": "keep"}));
    Value::Object(root)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A second run in the same direction never changes anything.
    #[test]
    fn property_idempotent(rules in rules(), dir in direction()) {
        let once = transform(source_document(&rules, dir), &rules, dir);
        let twice = transform(once.document.clone(), &rules, dir);

        prop_assert!(!twice.changed);
        prop_assert_eq!(twice.document, once.document);
    }

    /// PROPERTY: Running one direction then the other restores the document.
    #[test]
    fn property_round_trip(rules in rules(), dir in direction()) {
        let original = source_document(&rules, dir);
        let forward = transform(original.clone(), &rules, dir);
        let back = transform(forward.document, &rules, dir.reverse());

        prop_assert_eq!(back.document, original);
    }

    /// PROPERTY: Members no rule addresses are never touched.
    #[test]
    fn property_untouched_members_survive(rules in rules(), dir in direction()) {
        let result = transform(source_document(&rules, dir), &rules, dir);

        prop_assert_eq!(&result.document["untouched"], &json!({"n": 1, "s": "keep"}));
    }

    /// PROPERTY: Values equal to neither side are left as they are.
    #[test]
    fn property_foreign_values_are_kept(rules in rules(), dir in direction()) {
        let mut document = source_document(&rules, dir);
        for rule in &rules {
            let segments = rule.key.segments();
            document[&segments[0]][&segments[1]] = json!(format!("~{}~", rule.source(dir)));
        }

        let result = transform(document.clone(), &rules, dir);

        prop_assert!(!result.changed);
        prop_assert_eq!(result.document, document);
    }

    /// PROPERTY: Rules against a document missing every key change nothing.
    #[test]
    fn property_missing_keys_are_noops(rules in rules(), dir in direction()) {
        let document = json!({"other": {"x": "y"}, "list": [1, 2, 3]});
        let result = transform(document.clone(), &rules, dir);

        prop_assert!(!result.changed);
        prop_assert_eq!(result.document, document);
    }
}
