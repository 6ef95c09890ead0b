#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let smiles = bindigo::validation::is_smiles(raw);
        let _ = bindigo::validation::classify_ligand(raw);
        if raw.ends_with(".sdf") || raw.ends_with(".mol2") {
            assert!(!smiles);
        }
    }
});
