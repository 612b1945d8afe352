//! Fuzz target for runtime adapters.
//!
//! Goal: extraction should **never panic** on any text, with or without source.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_trace_extract
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pfem_domain::AdapterRegistry;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    raw: &'a str,
    code: Option<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let registry = AdapterRegistry::builtin();
    let trace = registry.extract(input.raw, input.code);
    assert_eq!(trace.raw, input.raw);
});
