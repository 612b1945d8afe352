//! Fuzz target for the whole explain pipeline against a fixed deck.
//!
//! Goal: any error text and source must produce a result, never a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pfem_domain::{Engine, ExplainOptions};
use std::sync::LazyLock;

const DECK: &str = r#"{
  "meta": { "language": "en", "version": 1 },
  "glossary": { "kid": { "variable": "name box" } },
  "errors": {
    "NameError": { "variants": [{ "title": "t", "summary": "{{name}} at {{loc}}", "steps": ["{{codeLine}}"] }] },
    "SyntaxError": { "variants": [{ "if": { "match_code": ["^(if|for|while)\\b"] }, "title": "colon", "summary": "{{codeLine}}" }] },
    "Other": { "variants": [{ "title": "other", "summary": "s" }] }
  }
}"#;

static ENGINE: LazyLock<Option<Engine>> = LazyLock::new(|| {
    let deck = pfem_deck::parse_copy_deck_json(DECK).ok()?;
    let mut engine = Engine::new();
    engine.load_copy_deck(deck);
    Some(engine)
});

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    raw: &'a str,
    code: Option<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let Some(engine) = ENGINE.as_ref() else {
        return;
    };
    let mut options = ExplainOptions::new(input.raw);
    if let Some(code) = input.code {
        options = options.code(code);
    }
    assert!(engine.explain(options).is_ok());
});
