//! Variant selection: first passing variant of the trace's kind wins.

use crate::condition;
use pfem_deck::{CopyDeck, Variant};
use pfem_types::{DeckKey, Trace, VariantId};
use tracing::debug;

/// Outcome of looking a trace up in a deck.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'d> {
    Matched {
        key: DeckKey,
        index: usize,
        variant: &'d Variant,
    },
    /// Neither the kind nor the fallback kind has an entry.
    NoEntry { key: DeckKey },
    /// The entry exists but no variant's condition passed.
    NoMatch { key: DeckKey },
}

impl Selection<'_> {
    pub fn variant_id(&self) -> Option<VariantId> {
        match self {
            Selection::Matched { key, index, .. } => Some(VariantId::new(key, *index)),
            _ => None,
        }
    }
}

pub fn select<'d>(deck: &'d CopyDeck, trace: &Trace) -> Selection<'d> {
    let key = deck.key_for(trace.kind());
    let Some(entry) = deck.entry(&key) else {
        debug!(key = %key, "no deck entry for kind");
        return Selection::NoEntry { key };
    };

    let message = trace.message.as_str();
    let code_line = trace.code_line();

    match entry
        .variants
        .iter()
        .position(|v| condition::evaluate(v.condition.as_ref(), message, code_line))
    {
        Some(index) => {
            debug!(key = %key, index, "variant selected");
            Selection::Matched {
                variant: &entry.variants[index],
                key,
                index,
            }
        }
        None => {
            debug!(key = %key, "no variant condition passed");
            Selection::NoMatch { key }
        }
    }
}
