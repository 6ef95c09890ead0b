//! Property tests for output path normalisation.

use proptest::prelude::*;
use tempfile::TempDir;

use bindigo::validation::validate_output_path;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A report name without an extension always gets `.csv`.
    #[test]
    fn property_missing_extension_defaults_to_csv(stem in "[A-Za-z0-9_-]{1,24}") {
        let dir = TempDir::new().unwrap();
        let raw = dir.path().join(&stem);

        let target = validate_output_path(raw.to_str().unwrap()).unwrap();
        let expected = dir.path().join(format!("{}.csv", stem));
        prop_assert_eq!(target.path(), expected.as_path());
    }

    /// PROPERTY: Only `.csv` is accepted as an explicit extension, in any case.
    #[test]
    fn property_only_csv_extension_is_accepted(
        stem in "[A-Za-z0-9_]{1,12}",
        ext in "[a-z]{1,4}",
        upper in any::<bool>(),
    ) {
        let dir = TempDir::new().unwrap();
        let ext = if upper { ext.to_uppercase() } else { ext };
        let raw = dir.path().join(format!("{}.{}", stem, ext));

        let result = validate_output_path(raw.to_str().unwrap());
        prop_assert_eq!(result.is_ok(), ext.eq_ignore_ascii_case("csv"));
    }
}
