use super::{extract_with, FamilyPatterns, LocationRule, Scope};
use pfem_types::{Runtime, Trace};
use regex::Regex;
use std::sync::LazyLock;

/// Skulpt reports locations as `... on line 3 of main.py` (sometimes `at line N in F`).
static ON_LINE_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:on|at)\s+line\s+(?P<line>\d+)\s+(?:of|in)\s+(?P<file>[^\s:]+)\b")
        .expect("static regex")
});

static ERROR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Error\b").expect("static regex"));
static TRACEBACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Traceback").expect("static regex"));
static SKULPT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)skulpt|\bon\s+line\s+\d+").expect("static regex"));
/// Pyodide frames and exception types; such text belongs to the `pyodide` adapter.
static PYODIDE_FINGERPRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pyodide").expect("static regex"));

pub static SKULPT: FamilyPatterns = FamilyPatterns {
    runtime: Runtime::Skulpt,
    column: None,
    fallback_location: Some(LocationRule {
        scope: Scope::Tail,
        pattern: &ON_LINE_OF,
    }),
    snippet: None,
    markers: &[&ERROR_TOKEN, &TRACEBACK, &SKULPT_MARKER],
    rejects: &[&PYODIDE_FINGERPRINT],
};

/// Adapter for Skulpt (Python-in-JavaScript) output.
pub fn skulpt(raw: &str, code: Option<&str>) -> Option<Trace> {
    extract_with(&SKULPT, raw, code)
}
