use super::known_kind;
use pfem_types::{KnownKind, Trace};
use regex::Regex;
use std::sync::LazyLock;

static PUSH_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.push\s*\(").expect("static regex"));

pub fn applies(trace: &Trace) -> bool {
    known_kind(trace) == Some(KnownKind::AttributeError) && PUSH_CALL.is_match(trace.code_line())
}

/// `xs.push(v)` -> `xs.append(v)`, first call only.
pub fn apply(trace: &Trace) -> Option<String> {
    let line = trace.code_line();
    let m = PUSH_CALL.find(line)?;
    Some(format!("{}.append({}", &line[..m.start()], &line[m.end()..]))
}
