//! Property tests for protein and ligand classification.

use proptest::prelude::*;

use bindigo::domain::value_objects::ProteinKind;
use bindigo::validation::{classify_ligand, classify_protein, is_pdb_id, is_smiles};

fn pdb_id() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9][A-Za-z0-9]{3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Anything shaped like a PDB ID classifies as one, upper-cased.
    #[test]
    fn property_pdb_id_shape_always_classifies(id in pdb_id()) {
        let protein = classify_protein(&id).unwrap();
        prop_assert_eq!(protein.kind, ProteinKind::PdbId);
        prop_assert_eq!(&protein.value, &id.to_uppercase());

        let again = classify_protein(&protein.value).unwrap();
        prop_assert_eq!(again, protein);
    }

    /// PROPERTY: Identifiers of any other length are never PDB IDs.
    #[test]
    fn property_wrong_length_is_not_pdb_id(
        s in proptest::string::string_regex("[0-9][A-Za-z0-9]{0,2}|[0-9][A-Za-z0-9]{4,8}").unwrap()
    ) {
        prop_assert!(!is_pdb_id(&s));
    }

    /// PROPERTY: Classification never panics on arbitrary input.
    #[test]
    fn property_classification_never_panics(s in "(?s).{0,128}") {
        let _ = classify_protein(&s);
        let _ = classify_ligand(&s);
        let _ = is_smiles(&s);
    }

    /// PROPERTY: One organic-subset character is enough for the SMILES heuristic.
    #[test]
    fn property_smiles_alphabet_char_is_smiles(
        prefix in "[xyzXYZ]{0,6}",
        atom in prop::sample::select(vec!['C', 'N', 'O', 'c', 'n', '(', '=', '#', '1']),
        suffix in "[xyzXYZ]{0,6}",
    ) {
        let raw = format!("{}{}{}", prefix, atom, suffix);
        prop_assert!(is_smiles(&raw));
    }

    /// PROPERTY: Strings built only from non-chemistry letters are rejected.
    #[test]
    fn property_no_alphabet_char_is_not_smiles(s in "[xyzXYZqQ]{1,16}") {
        prop_assert!(!is_smiles(&s));
    }

    /// PROPERTY: Names ending in a ligand file extension are never SMILES.
    #[test]
    fn property_ligand_filenames_are_not_smiles(
        stem in "[A-Za-z0-9_]{1,12}",
        ext in prop::sample::select(vec![".sdf", ".mol2", ".mol", ".pdb"]),
    ) {
        let name = format!("{}{}", stem, ext);
        prop_assert!(!is_smiles(&name));
    }
}
