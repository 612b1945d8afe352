//! Runtime adapters: raw diagnostic text -> [`Trace`].
//!
//! Every runtime family shares one extraction algorithm; what differs is a table of patterns
//! ([`FamilyPatterns`]). Adding a family is a new table plus a thin entry point.

use crate::source;
use pfem_types::{Frame, Runtime, Trace};
use regex::Regex;
use std::sync::LazyLock;

mod generic;
mod pyodide;
mod skulpt;

pub use generic::generic;
pub use pyodide::pyodide;
pub use skulpt::skulpt;

/// `Kind: message` on the last line of a traceback.
static TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+Error)\s*:\s*(.*)$").expect("static regex"));

/// First quoted substring of a message.
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']([^"']+)["']"#).expect("static regex"));

/// CPython-style frame marker, shared by every family.
static FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)File\s+"(?P<file>[^"]+)",\s+line\s+(?P<line>\d+)(?:,\s+in\s+(?P<func>\S+))?"#)
        .expect("static regex")
});

/// Text a secondary location rule is matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// The last non-empty line only.
    Tail,
    /// The whole raw text.
    Raw,
}

/// Secondary location convention with `line` and `file` named groups.
pub struct LocationRule {
    pub scope: Scope,
    pub pattern: &'static LazyLock<Regex>,
}

/// Per-family extraction table.
pub struct FamilyPatterns {
    pub runtime: Runtime,
    /// Column marker with one capture group, scanned per line; the last match wins.
    pub column: Option<&'static LazyLock<Regex>>,
    /// Tried only when no frame marker yielded a line number.
    pub fallback_location: Option<LocationRule>,
    /// Without usable source, the first non-blank, non-caret line after a match of this
    /// pattern becomes the code line.
    pub snippet: Option<&'static LazyLock<Regex>>,
    /// The text is only accepted when one of these matches somewhere.
    pub markers: &'static [&'static LazyLock<Regex>],
    /// Another family's fingerprint: text matching any of these is declined.
    pub rejects: &'static [&'static LazyLock<Regex>],
}

/// Last line split into `(kind, message)`, plus the non-empty lines of `raw`.
pub(crate) fn split_tail(raw: &str) -> (Option<String>, String, Vec<&str>) {
    let lines: Vec<&str> = raw.trim().lines().filter(|l| !l.is_empty()).collect();
    let tail = lines.last().copied().unwrap_or("");
    match TAIL.captures(tail) {
        Some(caps) => (Some(caps[1].to_string()), caps[2].to_string(), lines),
        None => (None, tail.to_string(), lines),
    }
}

pub(crate) fn quoted_name(message: &str) -> Option<String> {
    QUOTED.captures(message).map(|caps| caps[1].to_string())
}

fn parse_line(s: &str) -> Option<u32> {
    s.parse::<u32>().ok()
}

fn looks_like_error(family: &FamilyPatterns, raw: &str) -> bool {
    if family.rejects.iter().any(|re| re.is_match(raw)) {
        return false;
    }
    family.markers.is_empty() || family.markers.iter().any(|re| re.is_match(raw))
}

/// Run the shared extraction algorithm for one family.
pub fn extract_with(family: &FamilyPatterns, raw: &str, code: Option<&str>) -> Option<Trace> {
    if !looks_like_error(family, raw) {
        return None;
    }

    let (kind, message, lines) = split_tail(raw);
    let mut trace = Trace {
        kind,
        name: quoted_name(&message),
        message,
        raw: raw.to_string(),
        runtime: family.runtime,
        ..Trace::default()
    };

    for l in &lines {
        if let Some(caps) = FRAME.captures(l) {
            let frame = Frame {
                file: Some(caps["file"].to_string()),
                line: parse_line(&caps["line"]),
                func: caps.name("func").map(|m| m.as_str().to_string()),
            };
            // Tracebacks list the causing frame last.
            trace.file = frame.file.clone();
            trace.line = frame.line;
            trace.frames.push(frame);
        }
        if let Some(column) = family.column
            && let Some(caps) = column.captures(l)
        {
            trace.col = parse_line(&caps[1]);
        }
    }

    if trace.line.is_none()
        && let Some(rule) = &family.fallback_location
    {
        let haystack = match rule.scope {
            Scope::Tail => lines.last().copied().unwrap_or(""),
            Scope::Raw => raw,
        };
        if let Some(caps) = rule.pattern.captures(haystack) {
            trace.line = parse_line(&caps["line"]);
            trace.file = Some(caps["file"].to_string());
        }
    }

    match (code, trace.line) {
        (Some(code), Some(line)) => {
            let window = source::window(code, line);
            trace.code_line = window.code_line;
            trace.code_before = window.before;
            trace.code_after = window.after;
        }
        _ => {
            if let Some(snippet) = family.snippet {
                trace.code_line = snippet_line(snippet, raw);
            }
        }
    }

    Some(trace)
}

fn snippet_line(pattern: &Regex, raw: &str) -> Option<String> {
    let m = pattern.find(raw)?;
    raw[m.end()..]
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.chars().all(|c| c == '^'))
        .map(str::to_string)
}
