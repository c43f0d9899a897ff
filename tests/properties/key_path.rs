//! Property tests for key path parsing.

use proptest::prelude::*;

use json_replace::KeyPath;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(raw in ".{0,64}") {
        let _ = KeyPath::parse(&raw);
    }

    /// PROPERTY: Joined non-empty segments parse back to the same segments.
    #[test]
    fn property_segments_round_trip(
        segments in proptest::collection::vec("[A-Za-z0-9_\\- ]{1,12}", 1..=6),
    ) {
        let raw = segments.join(".");
        let path = KeyPath::parse(&raw).unwrap();

        prop_assert_eq!(path.segments(), segments.as_slice());
        prop_assert_eq!(path.to_string(), raw);
    }

    /// PROPERTY: Any empty segment is rejected.
    #[test]
    fn property_empty_segment_rejected(
        head in "[a-z]{0,8}",
        tail in "[a-z]{0,8}",
    ) {
        let raw = format!("{}..{}", head, tail);
        prop_assert!(KeyPath::parse(&raw).is_err());
    }
}
