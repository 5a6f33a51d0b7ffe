#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine, panics are bugs.
        let _ = brdoc::cpf::validate_cpf(s);
        let _ = brdoc::cnpj::validate_cnpj(s);
        let _ = brdoc::Document::parse(s);
    }
});
