use super::{extract_with, FamilyPatterns, LocationRule, Scope};
use pfem_types::{Runtime, Trace};
use regex::Regex;
use std::sync::LazyLock;

static COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)column\s+(\d+)").expect("static regex"));

static ON_LINE_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)on\s+line\s+(?P<line>\d+)\s+of\s+(?P<file>[^\s:]+)").expect("static regex")
});

static SNIPPET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\s+line\s+\d+\s+of\s+[^\s:]+:").expect("static regex"));

static ERROR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Error\b").expect("static regex"));
static TRACEBACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Traceback").expect("static regex"));
static PYODIDE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pyodide").expect("static regex"));

pub static PYODIDE: FamilyPatterns = FamilyPatterns {
    runtime: Runtime::Pyodide,
    column: Some(&COLUMN),
    fallback_location: Some(LocationRule {
        scope: Scope::Raw,
        pattern: &ON_LINE_OF,
    }),
    snippet: Some(&SNIPPET),
    markers: &[&ERROR_TOKEN, &TRACEBACK, &PYODIDE_MARKER],
    rejects: &[],
};

/// Adapter for Pyodide (CPython compiled to WebAssembly) output.
pub fn pyodide(raw: &str, code: Option<&str>) -> Option<Trace> {
    extract_with(&PYODIDE, raw, code)
}
