//! Property tests for the content model.

use proptest::prelude::*;

use installconfig::State;

proptest! {
    /// PROPERTY: positions 0..n of `State::from_strings(v)` read back `v` in order.
    #[test]
    fn property_from_strings_preserves_positions(values in proptest::collection::vec(".*", 0..8)) {
        let state = State::from_strings(&values);

        prop_assert_eq!(state.len(), values.len());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(state.str_at(i), Some(value.as_str()));
            prop_assert_eq!(state.get(i).and_then(|c| c.name()), None);
        }
        prop_assert!(state.get(values.len()).is_none());
    }
}
