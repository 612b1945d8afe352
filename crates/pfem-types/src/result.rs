use crate::kind::DeckKey;
use crate::trace::Trace;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of the variant that produced an explanation: `<kind>/variants/<index>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariantId {
    pub kind: String,
    pub index: usize,
}

impl VariantId {
    pub fn new(key: &DeckKey, index: usize) -> Self {
        Self {
            kind: key.as_str().to_string(),
            index,
        }
    }

    /// The generic zero-th fallback variant.
    pub fn fallback() -> Self {
        Self::new(&DeckKey::Fallback, 0)
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/variants/{}", self.kind, self.index)
    }
}

impl TryFrom<String> for VariantId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (kind, index) = value
            .rsplit_once("/variants/")
            .ok_or_else(|| format!("invalid variant id: {value}"))?;
        if kind.is_empty() {
            return Err(format!("invalid variant id: {value}"));
        }
        let index = index
            .parse::<usize>()
            .map_err(|_| format!("invalid variant index in: {value}"))?;
        Ok(Self {
            kind: kind.to_string(),
            index,
        })
    }
}

impl From<VariantId> for String {
    fn from(value: VariantId) -> Self {
        value.to_string()
    }
}

/// Rendered explanation handed back to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResult {
    pub trace: Trace,

    #[schemars(with = "String")]
    pub variant_id: VariantId,

    pub title: String,
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,

    /// Corrected version of the offending line(s), when a heuristic recognized the shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,

    /// Pre-rendered display fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl ExplainResult {
    /// Drop the rationale and keep at most the first step.
    pub fn trim_brief(&mut self) {
        self.why = None;
        self.steps.truncate(1);
    }
}
