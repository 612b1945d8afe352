use super::known_kind;
use pfem_types::{KnownKind, Trace};
use regex::Regex;
use std::sync::LazyLock;

static BLOCK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(if|for|while|def|class|elif|else|try|except|finally|with)\b")
        .expect("static regex")
});

pub fn applies(trace: &Trace) -> bool {
    let line = trace.code_line().trim_end();
    known_kind(trace) == Some(KnownKind::SyntaxError)
        && BLOCK_HEADER.is_match(line)
        && !line.ends_with(':')
}

pub fn apply(trace: &Trace) -> Option<String> {
    let line = trace.code_line().trim_end();
    if line.is_empty() || line.ends_with(':') {
        return None;
    }
    Some(format!("{line}:"))
}
