use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime family that produced a trace.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Skulpt,
    Pyodide,
    #[default]
    Unknown,
}

impl Runtime {
    pub fn as_str(self) -> &'static str {
        match self {
            Runtime::Skulpt => "skulpt",
            Runtime::Pyodide => "pyodide",
            Runtime::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `File "...", line N, in F` entry of a traceback, outermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub func: Option<String>,
}

/// Normalized, best-effort description of one error occurrence.
///
/// Only `raw` is guaranteed; every other field is whatever the extractor could recover.
/// A value that deserializes with a `raw` key is treated as already normalized and is never
/// re-parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    /// Error-kind token, e.g. `NameError`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub message: String,

    /// Original diagnostic text, verbatim.
    pub raw: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,

    /// Identifier quoted in the message (undefined name, missing attribute, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Offending source line, trimmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_line: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_before: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_after: Vec<String>,

    #[serde(default)]
    pub runtime: Runtime,
}

impl Trace {
    /// A trace carrying only the raw text.
    pub fn from_raw<S: Into<String>>(raw: S) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn code_line(&self) -> &str {
        self.code_line.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_kind_as_type_and_camel_case_fields() {
        let trace = Trace {
            kind: Some("NameError".to_string()),
            message: "name 'x' is not defined".to_string(),
            raw: "NameError: name 'x' is not defined".to_string(),
            line: Some(3),
            code_line: Some("print(x)".to_string()),
            runtime: Runtime::Skulpt,
            ..Trace::default()
        };

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], "NameError");
        assert_eq!(value["codeLine"], "print(x)");
        assert_eq!(value["runtime"], "skulpt");
        assert!(value.get("file").is_none());
        assert!(value.get("frames").is_none());
    }

    #[test]
    fn deserializes_minimal_trace() {
        let trace: Trace = serde_json::from_value(json!({ "raw": "boom" })).unwrap();
        assert_eq!(trace.raw, "boom");
        assert_eq!(trace.kind, None);
        assert_eq!(trace.runtime, Runtime::Unknown);
        assert_eq!(trace.code_line(), "");
    }

    #[test]
    fn trace_without_raw_is_rejected() {
        let err = serde_json::from_value::<Trace>(json!({ "type": "NameError" }));
        assert!(err.is_err());
    }
}
