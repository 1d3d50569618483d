#![no_main]

use libfuzzer_sys::fuzz_target;
use pharma_papers::parser::parse_efetch;

fuzz_target!(|data: &[u8]| {
    // Malformed documents must surface as errors, never panics
    let body = String::from_utf8_lossy(data);
    let _ = parse_efetch(&body);
});
