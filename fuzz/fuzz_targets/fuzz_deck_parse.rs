//! Fuzz target for copy deck parsing and linting.
//!
//! Goal: parsing may reject input, linting a parsed deck must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(deck) = pfem_deck::parse_copy_deck_json(text)
    {
        let _ = pfem_deck::lint_deck(&deck);
    }
});
