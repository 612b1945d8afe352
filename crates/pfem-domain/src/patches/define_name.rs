use super::known_kind;
use pfem_types::{KnownKind, Trace};

pub fn applies(trace: &Trace) -> bool {
    known_kind(trace) == Some(KnownKind::NameError)
        && trace.name.as_deref().is_some_and(|n| !n.is_empty())
}

/// Define the missing name before the offending line.
pub fn apply(trace: &Trace) -> Option<String> {
    let name = trace.name.as_deref().filter(|n| !n.is_empty())?;
    Some(format!("{name} = 0\n{}", trace.code_line()))
}
