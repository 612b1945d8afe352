//! Copy deck parsing, linting and locale resolution.
//!
//! This crate is intentionally IO-free: it parses decks provided as strings, and locale
//! resolution pulls text through the [`DeckSource`] trait so callers decide where decks live.

#![forbid(unsafe_code)]

mod lint;
mod locale;
mod model;
pub mod pattern;

pub use lint::{lint_deck, DeckLint, LintLevel};
pub use locale::{load_for_locale, locale_candidates, DeckSource, LoadedDeck, DEFAULT_LOCALE};
pub use model::{Condition, CopyDeck, DeckMeta, Glossary, GlossaryRules, KindEntry, UiStrings, Variant};

use anyhow::Context;

/// Parse a copy deck from JSON. Only the structural shape is checked; see [`lint_deck`] for
/// authoring problems.
pub fn parse_copy_deck_json(input: &str) -> anyhow::Result<CopyDeck> {
    let deck: CopyDeck = serde_json::from_str(input).context("parse copy deck json")?;
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_deck() {
        let deck = parse_copy_deck_json(
            r#"{
                "meta": { "language": "en", "version": 1 },
                "errors": { "Other": { "variants": [{ "title": "Python error", "summary": "Look at the last line." }] } }
            }"#,
        )
        .unwrap();
        assert_eq!(deck.meta.language, "en");
        assert_eq!(deck.errors.len(), 1);
        assert!(deck.glossary.is_empty());
    }

    #[test]
    fn missing_errors_table_is_a_shape_error() {
        let err = parse_copy_deck_json(r#"{ "meta": { "language": "en", "version": 1 } }"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("parse copy deck json"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_copy_deck_json("not json").is_err());
    }
}
