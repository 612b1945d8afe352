//! Patch synthesis: a conservative, ordered catalog of single-line fixes.
//!
//! Every rule is gated on the error kind and the shape of the offending line. The first rule
//! whose gate accepts the trace produces the patch; at most one patch is ever returned.

use pfem_types::{ids, KnownKind, Trace};
use tracing::debug;

mod block_colon;
mod define_name;
mod list_append;
mod str_concat;

/// One heuristic in the catalog.
pub struct PatchRule {
    pub id: &'static str,
    pub applies: fn(&Trace) -> bool,
    pub apply: fn(&Trace) -> Option<String>,
}

pub static CATALOG: &[PatchRule] = &[
    PatchRule {
        id: ids::PATCH_LIST_APPEND,
        applies: list_append::applies,
        apply: list_append::apply,
    },
    PatchRule {
        id: ids::PATCH_DEFINE_NAME,
        applies: define_name::applies,
        apply: define_name::apply,
    },
    PatchRule {
        id: ids::PATCH_BLOCK_COLON,
        applies: block_colon::applies,
        apply: block_colon::apply,
    },
    PatchRule {
        id: ids::PATCH_STR_CONCAT,
        applies: str_concat::applies,
        apply: str_concat::apply,
    },
];

pub(crate) fn known_kind(trace: &Trace) -> Option<KnownKind> {
    trace.kind().and_then(KnownKind::parse)
}

/// First accepted rule's output, if any.
pub fn synthesize(trace: &Trace) -> Option<String> {
    let rule = CATALOG.iter().find(|rule| (rule.applies)(trace))?;
    let patch = (rule.apply)(trace);
    debug!(rule = rule.id, produced = patch.is_some(), "patch rule accepted trace");
    patch
}
