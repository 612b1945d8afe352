//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Template rendering never leaving placeholders behind
//! - Patch synthesis staying silent outside its gates
//! - Brief verbosity trimming every explanation shape
//! - Extraction never panicking on arbitrary text

use crate::patches::synthesize;
use crate::registry::AdapterRegistry;
use crate::template::{render, TemplateContext};
use crate::test_support::{deck_from_json, trace};
use crate::{Engine, ExplainOptions};
use pfem_types::Verbosity;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Template text mixing prose, known and unknown placeholders, and stray braces.
fn arb_template() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z .,:()]{0,12}",
        Just("{{loc}}".to_string()),
        Just("{{ name }}".to_string()),
        Just("{{codeLine}}".to_string()),
        Just("{{{{loc}}}}".to_string()),
        Just("{{ {{name}} }}".to_string()),
        "\\{\\{ ?[a-zA-Z_]{0,8} ?\\}\\}",
        Just("{".to_string()),
        Just("}".to_string()),
    ];
    prop::collection::vec(piece, 0..8).prop_map(|pieces| pieces.concat())
}

/// Code lines that no patch gate accepts: no `.push`, no block keyword, no `+`.
fn arb_inert_code_line() -> impl Strategy<Value = String> {
    "[a-z_ =0-9()\\[\\]\"',]{0,30}".prop_filter("no block keyword prefix", |s| {
        let first = s.trim_start().split(|c: char| !c.is_alphanumeric() && c != '_').next();
        !matches!(
            first,
            Some(
                "if" | "for" | "while" | "def" | "class" | "elif" | "else" | "try" | "except"
                    | "finally" | "with"
            )
        )
    })
}

fn arb_kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("NameError".to_string()),
        Just("SyntaxError".to_string()),
        Just("AttributeError".to_string()),
        Just("TypeError".to_string()),
        Just("ValueError".to_string()),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn render_never_leaves_a_placeholder(template in arb_template(), name in "[a-z]{0,6}") {
        let ctx = TemplateContext {
            loc: "line 1".to_string(),
            name,
            code_line: "x = 1".to_string(),
        };
        let out = render(&template, &ctx);
        let leftover = regex::Regex::new(r"\{\{[^{}]*\}\}").unwrap();
        prop_assert!(!leftover.is_match(&out), "{template:?} -> {out:?}");
    }

    #[test]
    fn patches_stay_silent_outside_their_gates(kind in arb_kind(), line in arb_inert_code_line()) {
        // No extracted name, so the NameError rule is gated off too.
        let t = trace(&kind, "something went wrong", Some(&line));
        prop_assert_eq!(synthesize(&t), None);
    }

    #[test]
    fn brief_trims_every_variant_shape(
        why in proptest::option::of("[a-z ]{1,20}"),
        steps in prop::collection::vec("[a-z ]{1,10}", 0..5),
    ) {
        let variant = serde_json::json!({
            "title": "t",
            "summary": "s",
            "why": why,
            "steps": steps,
        });
        let deck = serde_json::json!({
            "meta": { "language": "en", "version": 1 },
            "errors": { "NameError": { "variants": [variant] } }
        });
        let mut engine = Engine::new();
        engine.load_copy_deck(deck_from_json(&deck.to_string()));

        let result = engine
            .explain(ExplainOptions::new("NameError: name 'x' is not defined").verbosity(Verbosity::Brief))
            .unwrap();
        prop_assert_eq!(result.why, None);
        prop_assert!(result.steps.len() <= 1);
    }

    #[test]
    fn extraction_never_panics(raw in "\\PC{0,200}", code in proptest::option::of("\\PC{0,80}")) {
        let registry = AdapterRegistry::builtin();
        let trace = registry.extract(&raw, code.as_deref());
        prop_assert_eq!(trace.raw, raw);
    }
}
