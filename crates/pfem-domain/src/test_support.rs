use pfem_deck::{parse_copy_deck_json, CopyDeck};
use pfem_types::Trace;

pub fn deck_from_json(json: &str) -> CopyDeck {
    parse_copy_deck_json(json).expect("test deck json")
}

/// The English fixture deck shared with the app and CLI tests.
pub fn sample_deck() -> CopyDeck {
    deck_from_json(&pfem_test_util::sample_deck_json())
}

pub fn trace(kind: &str, message: &str, code_line: Option<&str>) -> Trace {
    Trace {
        kind: Some(kind.to_string()),
        message: message.to_string(),
        code_line: code_line.map(str::to_string),
        ..Trace::from_raw(format!("{kind}: {message}"))
    }
}
