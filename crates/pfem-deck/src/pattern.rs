//! Pattern compilation shared by condition evaluation, glossary rules and deck linting.

use regex::{Regex, RegexBuilder};

/// Compile a deck-authored pattern. Matching is always case-insensitive.
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
