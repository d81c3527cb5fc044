//! Property tests for region code extraction.

use proptest::prelude::*;

use installconfig::Region;

fn region_code() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{2}-[a-z]{4,9}-[1-9]").unwrap()
}

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z. -]{1,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a labeled catalog entry reduces to its code.
    #[test]
    fn property_label_is_discarded(code in region_code(), label in label()) {
        let entry = format!("{} ({})", code, label);
        let region = Region::parse(&entry).unwrap();
        prop_assert_eq!(region.as_str(), code.as_str());
    }

    /// PROPERTY: extraction is idempotent on bare codes.
    #[test]
    fn property_bare_code_is_fixed_point(code in region_code()) {
        let once = Region::parse(&code).unwrap();
        let twice = Region::parse(once.as_str()).unwrap();
        prop_assert_eq!(once.as_str(), code.as_str());
        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(input in ".*") {
        let _ = Region::parse(&input);
    }
}
