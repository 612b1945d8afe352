//! Variant conditions: substring/regex filters over the message and the offending line.

use pfem_deck::{pattern, Condition};
use tracing::debug;

/// Case-insensitive match. A pattern that does not compile never matches.
pub fn pattern_matches(pat: &str, input: &str) -> bool {
    match pattern::compile(pat) {
        Ok(re) => re.is_match(input),
        Err(err) => {
            debug!(pattern = pat, error = %err, "ignoring malformed pattern");
            false
        }
    }
}

fn any_match(patterns: &[String], input: &str) -> bool {
    patterns.iter().any(|p| pattern_matches(p, input))
}

/// Whether a variant gated by `condition` applies. An absent condition always passes.
pub fn evaluate(condition: Option<&Condition>, message: &str, code_line: &str) -> bool {
    let Some(cond) = condition else {
        return true;
    };

    if !cond.match_message.is_empty() && !any_match(&cond.match_message, message) {
        return false;
    }
    if any_match(&cond.not_message, message) {
        return false;
    }
    if !cond.match_code.is_empty() && !any_match(&cond.match_code, code_line) {
        return false;
    }
    if any_match(&cond.not_code, code_line) {
        return false;
    }
    true
}
