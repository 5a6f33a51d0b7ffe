#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(doc) = brdoc::Document::parse(s) {
            let formatted = doc.to_string();
            let reparsed =
                brdoc::Document::parse(&formatted).expect("formatted document must reparse");
            assert_eq!(reparsed, doc);
            assert_eq!(brdoc::clean(&formatted), doc.raw());
        }
    }
});
