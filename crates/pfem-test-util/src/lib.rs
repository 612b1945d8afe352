//! Shared test utilities for the pfem workspace.
//!
//! This crate exists because `xtask` walks the fixture decks at runtime (not behind
//! `#[cfg(test)]`), so a test-only module inside one crate would not suffice.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::fs;

/// Workspace-level `tests/fixtures`.
pub fn fixtures_dir() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures")
}

/// Root of the locale-keyed deck tree: `<root>/<lang>/copydeck.json`.
pub fn copydecks_dir() -> Utf8PathBuf {
    fixtures_dir().join("copydecks")
}

pub fn deck_path(locale: &str) -> Utf8PathBuf {
    copydecks_dir().join(locale).join("copydeck.json")
}

/// English fixture deck as JSON text.
pub fn sample_deck_json() -> String {
    read(&deck_path("en"))
}

/// Raw interpreter output stored as `tests/fixtures/traces/<name>.txt`.
pub fn raw_trace(name: &str) -> String {
    read(&fixtures_dir().join("traces").join(format!("{name}.txt")))
}

/// Learner source stored as `tests/fixtures/traces/<name>.py`.
pub fn source(name: &str) -> String {
    read(&fixtures_dir().join("traces").join(format!("{name}.py")))
}

/// Every fixture deck, sorted by locale.
pub fn fixture_decks() -> std::io::Result<Vec<(String, Utf8PathBuf)>> {
    let mut decks = Vec::new();
    for entry in fs::read_dir(copydecks_dir())? {
        let entry = entry?;
        let Ok(locale) = entry.file_name().into_string() else {
            continue;
        };
        let path = deck_path(&locale);
        if path.is_file() {
            decks.push((locale, path));
        }
    }
    decks.sort();
    Ok(decks)
}

/// Expected JSON output stored as `tests/fixtures/golden/<name>.json`.
pub fn golden(name: &str) -> Value {
    let path = fixtures_dir().join("golden").join(format!("{name}.json"));
    serde_json::from_str(&read(&path)).unwrap_or_else(|e| panic!("parse golden {path}: {e}"))
}

/// Replace the pre-rendered `html` field so JSON goldens stay readable.
pub fn strip_html(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut()
        && obj.contains_key("html")
    {
        obj.insert("html".to_string(), Value::String("__HTML__".to_string()));
    }
    value
}

fn read(path: &Utf8Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read fixture {path}: {e}"))
}
