use crate::model::CopyDeck;
use crate::pattern;
use pfem_types::ids;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LintLevel {
    Error,
    Warning,
}

impl LintLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LintLevel::Error => "error",
            LintLevel::Warning => "warning",
        }
    }
}

/// An authoring problem in a copy deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckLint {
    pub level: LintLevel,
    /// Dotted path into the deck, e.g. `errors.NameError.variants[1]`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for DeckLint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level.as_str(), self.path, self.message)
    }
}

/// Report authoring problems. The engine tolerates all of them at runtime (bad patterns never
/// match, missing kinds fall back), so these exist to catch copy that can never be shown.
pub fn lint_deck(deck: &CopyDeck) -> Vec<DeckLint> {
    let mut out = Vec::new();

    if deck.meta.language.trim().is_empty() {
        out.push(DeckLint {
            level: LintLevel::Error,
            path: "meta.language".to_string(),
            message: "language tag is empty".to_string(),
        });
    }

    if !deck.has_kind(ids::KIND_FALLBACK) {
        out.push(DeckLint {
            level: LintLevel::Warning,
            path: "errors".to_string(),
            message: format!(
                "no '{}' entry; unmatched errors will use the built-in fallback copy",
                ids::KIND_FALLBACK
            ),
        });
    }

    for (kind, entry) in &deck.errors {
        if entry.variants.is_empty() {
            out.push(DeckLint {
                level: LintLevel::Warning,
                path: format!("errors.{kind}"),
                message: "kind has no variants".to_string(),
            });
        }

        let last = entry.variants.len().saturating_sub(1);
        for (i, variant) in entry.variants.iter().enumerate() {
            let path = format!("errors.{kind}.variants[{i}]");

            if variant.title.trim().is_empty() {
                out.push(DeckLint {
                    level: LintLevel::Error,
                    path: path.clone(),
                    message: "title is empty".to_string(),
                });
            }

            if variant.is_unconditional() && i < last {
                out.push(DeckLint {
                    level: LintLevel::Warning,
                    path: path.clone(),
                    message: format!(
                        "unconditional variant shadows {} later variant(s)",
                        last - i
                    ),
                });
            }

            if let Some(cond) = &variant.condition {
                for (filter, p) in cond.patterns() {
                    if let Err(err) = pattern::compile(p) {
                        out.push(DeckLint {
                            level: LintLevel::Error,
                            path: format!("{path}.if.{filter}"),
                            message: format!("pattern {p:?} does not compile: {err}"),
                        });
                    }
                }
            }
        }
    }

    for (audience, rules) in &deck.glossary {
        for (term, _) in rules.iter() {
            if let Err(err) = pattern::compile(term) {
                out.push(DeckLint {
                    level: LintLevel::Error,
                    path: format!("glossary.{audience}"),
                    message: format!("term {term:?} does not compile: {err}"),
                });
            }
        }
    }

    out
}
