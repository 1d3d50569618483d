#![no_main]

use libfuzzer_sys::fuzz_target;
use pharma_papers::classifier::{classify, extract_company_name};

fuzz_target!(|data: &str| {
    let classification = classify(data);
    let _ = classification.is_non_academic();

    let label = extract_company_name(data);
    assert!(!label.contains([',', ';']));
    assert_eq!(label, label.trim());
});
