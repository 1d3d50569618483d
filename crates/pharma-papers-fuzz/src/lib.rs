//! Fuzzing library for pharma-papers.
//!
//! Targets exercise the eFetch XML parser and the affiliation
//! classifier with arbitrary input.
//!
//! # Usage
//!
//! ```bash
//! cd crates/pharma-papers-fuzz
//! cargo +nightly fuzz run fuzz_efetch_parse -- -max_total_time=60
//! ```

pub use pharma_papers::{classifier, parser};
