#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(protein) = bindigo::validation::classify_protein(raw) {
            if bindigo::validation::is_pdb_id(raw) {
                assert_eq!(protein.value, raw.to_uppercase());
            }
        }
    }
});
