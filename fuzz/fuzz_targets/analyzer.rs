#![no_main]

use libfuzzer_sys::fuzz_target;

use adaudit::analyzer::analyze;

fuzz_target!(|data: &[u8]| {
    let markup = String::from_utf8_lossy(data);

    // Never panics, and length always tracks the raw input
    let audit = analyze(&markup, None);
    assert_eq!(audit.page.length, markup.chars().count());
});
