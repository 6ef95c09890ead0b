//! Property tests for binding site validation.

use proptest::prelude::*;

use bindigo::domain::value_objects::MAX_BOX_SIZE;
use bindigo::validation::{parse_center, validate_binding_site};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every size in (0, MAX_BOX_SIZE] is accepted.
    #[test]
    fn property_size_in_range_is_accepted(size in 0.001f64..=MAX_BOX_SIZE) {
        prop_assert!(validate_binding_site(None, size).is_ok());
    }

    /// PROPERTY: Sizes above the ceiling are rejected.
    #[test]
    fn property_size_above_max_is_rejected(size in (MAX_BOX_SIZE + 0.001)..1.0e6) {
        prop_assert!(validate_binding_site(None, size).is_err());
    }

    /// PROPERTY: Zero and negative sizes are rejected.
    #[test]
    fn property_non_positive_size_is_rejected(size in -1.0e6f64..=0.0) {
        prop_assert!(validate_binding_site(None, size).is_err());
    }

    /// PROPERTY: Formatted finite coordinates parse back to the same values.
    #[test]
    fn property_center_tokens_round_trip(
        x in -1.0e4f64..1.0e4,
        y in -1.0e4f64..1.0e4,
        z in -1.0e4f64..1.0e4,
    ) {
        let tokens = vec![x.to_string(), y.to_string(), z.to_string()];
        let center = parse_center(&tokens).unwrap();
        prop_assert_eq!(center, vec![x, y, z]);
        prop_assert!(validate_binding_site(Some([x, y, z].as_slice()), 20.0).is_ok());
    }

    /// PROPERTY: Any center that is not exactly three values is rejected.
    #[test]
    fn property_center_arity_is_three(values in proptest::collection::vec(-100.0f64..100.0, 0..8)) {
        prop_assume!(values.len() != 3);
        prop_assert!(validate_binding_site(Some(values.as_slice()), 20.0).is_err());
    }
}
