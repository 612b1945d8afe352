//! Typed error-kind keys.
//!
//! Copy decks are keyed by the exception name Python prints. `DeckKey` makes the reserved
//! fallback entry a distinguished variant instead of a magic string; `KnownKind` is the closed
//! set of kinds the patch catalog understands.

use crate::ids;
use std::fmt;

/// Lookup key into a copy deck's `errors` table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeckKey {
    /// A concrete kind the deck knows about, e.g. `NameError`.
    Kind(String),
    /// The reserved catch-all entry (`Other`).
    Fallback,
}

impl DeckKey {
    /// Pick the key for `kind`: the kind itself when `is_known` accepts it, the fallback
    /// otherwise.
    pub fn resolve(kind: Option<&str>, is_known: impl Fn(&str) -> bool) -> Self {
        match kind {
            Some(k) if is_known(k) => DeckKey::Kind(k.to_string()),
            _ => DeckKey::Fallback,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DeckKey::Kind(k) => k,
            DeckKey::Fallback => ids::KIND_FALLBACK,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DeckKey::Fallback)
    }
}

impl fmt::Display for DeckKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error kinds with dedicated patch heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownKind {
    AttributeError,
    NameError,
    SyntaxError,
    TypeError,
}

impl KnownKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            ids::KIND_ATTRIBUTE_ERROR => Some(KnownKind::AttributeError),
            ids::KIND_NAME_ERROR => Some(KnownKind::NameError),
            ids::KIND_SYNTAX_ERROR => Some(KnownKind::SyntaxError),
            ids::KIND_TYPE_ERROR => Some(KnownKind::TypeError),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KnownKind::AttributeError => ids::KIND_ATTRIBUTE_ERROR,
            KnownKind::NameError => ids::KIND_NAME_ERROR,
            KnownKind::SyntaxError => ids::KIND_SYNTAX_ERROR,
            KnownKind::TypeError => ids::KIND_TYPE_ERROR,
        }
    }
}
