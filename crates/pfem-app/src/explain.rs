//! The `explain` use case: raw error text in, rendered explanation out.

use anyhow::Context;
use pfem_deck::CopyDeck;
use pfem_domain::{Engine, ErrorInput, ExplainOptions};
use pfem_types::{Audience, ExplainResult, Trace, Verbosity};
use serde_json::Value;
use tracing::debug;

/// Input for the explain use case.
#[derive(Clone, Debug)]
pub struct ExplainInput<'a> {
    pub deck: CopyDeck,
    /// Interpreter output, or a JSON trace object (anything with a `raw` key).
    pub error_text: &'a str,
    pub code: Option<&'a str>,
    pub audience: Audience,
    pub verbosity: Verbosity,
    pub locale: Option<&'a str>,
}

/// Treat JSON objects carrying a `raw` key as pre-built traces; everything else is raw text.
pub fn parse_error_input(text: &str) -> anyhow::Result<ErrorInput> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('{') {
        return Ok(ErrorInput::Text(text.to_string()));
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) if value.get("raw").is_some() => {
            let trace: Trace = serde_json::from_value(value).context("parse trace json")?;
            debug!("error input is a pre-built trace");
            Ok(ErrorInput::Trace(trace))
        }
        _ => Ok(ErrorInput::Text(text.to_string())),
    }
}

pub fn run_explain(input: ExplainInput<'_>) -> anyhow::Result<ExplainResult> {
    let error = parse_error_input(input.error_text)?;

    let mut engine = Engine::new();
    engine.load_copy_deck(input.deck);

    let mut options = ExplainOptions::new(error)
        .audience(input.audience)
        .verbosity(input.verbosity);
    if let Some(code) = input.code {
        options = options.code(code);
    }
    if let Some(locale) = input.locale {
        options = options.locale(locale);
    }

    let result = engine.explain(options).context("explain error")?;
    debug!(variant = %result.variant_id, patch = result.patch.is_some(), "explained");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfem_deck::parse_copy_deck_json;
    use pfem_test_util::{raw_trace, sample_deck_json, source};
    use pfem_types::Runtime;

    fn input<'a>(error_text: &'a str, code: Option<&'a str>) -> ExplainInput<'a> {
        ExplainInput {
            deck: parse_copy_deck_json(&sample_deck_json()).unwrap(),
            error_text,
            code,
            audience: Audience::Beginner,
            verbosity: Verbosity::Standard,
            locale: None,
        }
    }

    #[test]
    fn explains_fixture_traces() {
        let cases = [
            ("name_error_skulpt", "name_error", Runtime::Skulpt, "NameError/variants/0", "kittens = 0\nprint(kittens)"),
            ("syntax_error_pyodide", "syntax_error", Runtime::Pyodide, "SyntaxError/variants/0", "for i in range(3):"),
            ("attribute_error_skulpt", "attribute_error", Runtime::Skulpt, "AttributeError/variants/0", "items.append(3)"),
            ("type_error_pyodide", "type_error", Runtime::Pyodide, "TypeError/variants/0", "print(\"age: \" + str(age))"),
        ];
        for (trace_name, source_name, runtime, variant, patch) in cases {
            let raw = raw_trace(trace_name);
            let code = source(source_name);
            let result = run_explain(input(&raw, Some(&code))).unwrap();
            assert_eq!(result.trace.runtime, runtime, "{trace_name}");
            assert_eq!(result.trace.col, None, "{trace_name}");
            assert_eq!(result.variant_id.to_string(), variant, "{trace_name}");
            assert_eq!(result.patch.as_deref(), Some(patch), "{trace_name}");
        }
    }

    #[test]
    fn json_trace_input_is_not_reparsed() {
        let text = r#"{ "type": "NameError", "message": "name 'zz' is not defined", "name": "zz", "raw": "whatever" }"#;
        let result = run_explain(input(text, None)).unwrap();
        assert_eq!(result.trace.raw, "whatever");
        assert_eq!(result.patch.as_deref(), Some("zz = 0\n"));
    }

    #[test]
    fn json_without_raw_is_plain_text() {
        match parse_error_input(r#"{ "message": "hi" }"#).unwrap() {
            ErrorInput::Text(t) => assert!(t.contains("hi")),
            other => panic!("expected text, got {other:?}"),
        }
        assert!(parse_error_input(r#"{ "raw": 5 }"#).is_err());
    }
}
