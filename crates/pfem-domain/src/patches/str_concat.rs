use super::known_kind;
use pfem_types::{KnownKind, Trace};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static PLUS_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\s*([A-Za-z_]\w*)").expect("static regex"));

/// Span of the first `+ ident` whose identifier is not a call, attribute access or index.
fn bare_operand(line: &str) -> Option<(Range<usize>, &str)> {
    PLUS_IDENT.captures_iter(line).find_map(|caps| {
        let whole = caps.get(0)?;
        let ident = caps.get(1)?;
        match line[whole.end()..].chars().next() {
            Some('(' | '.' | '[') => None,
            _ => Some((whole.range(), ident.as_str())),
        }
    })
}

pub fn applies(trace: &Trace) -> bool {
    known_kind(trace) == Some(KnownKind::TypeError) && bare_operand(trace.code_line()).is_some()
}

/// `"age: " + age` -> `"age: " + str(age)`.
pub fn apply(trace: &Trace) -> Option<String> {
    let line = trace.code_line();
    let (span, ident) = bare_operand(line)?;
    Some(format!(
        "{}+ str({ident}){}",
        &line[..span.start],
        &line[span.end..]
    ))
}
