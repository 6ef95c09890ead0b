#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        let tokens: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if let Ok(center) = bindigo::validation::parse_center(&tokens) {
            let _ = bindigo::validation::validate_binding_site(Some(center.as_slice()), 20.0);
        }
    }
});
