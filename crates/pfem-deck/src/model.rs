use indexmap::IndexMap;
use pfem_types::DeckKey;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Versioned, localized catalog of explanations.
///
/// Key order of `glossary` and `errors` is preserved from the source document: glossary rules
/// are applied in that order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CopyDeck {
    pub meta: DeckMeta,

    /// Short UI strings used for locations and the generic fallback explanation.
    #[serde(default, skip_serializing_if = "UiStrings::is_empty")]
    pub ui: UiStrings,

    /// Audience tag -> ordered vocabulary rules.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub glossary: Glossary,

    /// Error kind -> ordered variants. `Other` is the reserved catch-all.
    pub errors: IndexMap<String, KindEntry>,
}

pub type Glossary = IndexMap<String, GlossaryRules>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeckMeta {
    pub language: String,
    /// Any JSON number; authors use `1`, `1.5` and the like.
    pub version: f64,
}

/// Ordered `term -> replacement` rules for one audience.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct GlossaryRules(IndexMap<String, String>);

impl GlossaryRules {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for GlossaryRules {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KindEntry {
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// One candidate explanation. Templates may use `{{loc}}`, `{{name}}` and `{{codeLine}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Variant {
    #[serde(rename = "if", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,

    pub title: String,
    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
}

impl Variant {
    /// True when the variant has no filter at all, i.e. it always applies.
    pub fn is_unconditional(&self) -> bool {
        self.condition.as_ref().is_none_or(Condition::is_empty)
    }
}

/// Four independent filters; an empty list imposes no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    /// At least one must match the message.
    #[serde(default, alias = "matchMessage", skip_serializing_if = "Vec::is_empty")]
    pub match_message: Vec<String>,

    /// None may match the message.
    #[serde(default, alias = "notMessage", skip_serializing_if = "Vec::is_empty")]
    pub not_message: Vec<String>,

    /// At least one must match the offending code line.
    #[serde(default, alias = "matchCode", skip_serializing_if = "Vec::is_empty")]
    pub match_code: Vec<String>,

    /// None may match the offending code line.
    #[serde(default, alias = "notCode", skip_serializing_if = "Vec::is_empty")]
    pub not_code: Vec<String>,
}

impl Condition {
    pub fn is_empty(&self) -> bool {
        self.match_message.is_empty()
            && self.not_message.is_empty()
            && self.match_code.is_empty()
            && self.not_code.is_empty()
    }

    /// Every pattern with the filter it belongs to.
    pub fn patterns(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("match_message", &self.match_message),
            ("not_message", &self.not_message),
            ("match_code", &self.match_code),
            ("not_code", &self.not_code),
        ]
        .into_iter()
        .flat_map(|(filter, list)| list.iter().map(move |p| (filter, p.as_str())))
    }
}

/// Deck-supplied UI strings. Missing or empty entries fall back to English defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UiStrings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub in_word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub this_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_why: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_step: Option<String>,
}

fn or_default<'a>(value: &'a Option<String>, default: &'static str) -> &'a str {
    value.as_deref().filter(|s| !s.is_empty()).unwrap_or(default)
}

impl UiStrings {
    pub fn is_empty(&self) -> bool {
        *self == UiStrings::default()
    }

    pub fn line(&self) -> &str {
        or_default(&self.line, "line")
    }

    pub fn in_word(&self) -> &str {
        or_default(&self.in_word, "in")
    }

    pub fn this_file(&self) -> &str {
        or_default(&self.this_file, "this file")
    }

    pub fn error_details(&self) -> &str {
        or_default(&self.error_details, "Error details")
    }

    pub fn error(&self) -> &str {
        or_default(&self.error, "Error")
    }

    pub fn python_error(&self) -> &str {
        or_default(&self.python_error, "Python error")
    }

    pub fn fallback_summary(&self) -> &str {
        or_default(
            &self.fallback_summary,
            "Start with the last line of the message and the highlighted code line.",
        )
    }

    pub fn fallback_why(&self) -> &str {
        or_default(
            &self.fallback_why,
            "The last line of the traceback tells you the error type and main cause.",
        )
    }

    pub fn fallback_step(&self) -> &str {
        or_default(&self.fallback_step, "Fix one small thing and run again.")
    }
}

impl CopyDeck {
    pub fn entry(&self, key: &DeckKey) -> Option<&KindEntry> {
        self.errors.get(key.as_str())
    }

    pub fn has_kind(&self, kind: &str) -> bool {
        self.errors.contains_key(kind)
    }

    /// Resolve the lookup key for an extracted kind.
    pub fn key_for(&self, kind: Option<&str>) -> DeckKey {
        DeckKey::resolve(kind, |k| self.has_kind(k))
    }

    pub fn glossary_for(&self, audience: &str) -> Option<&GlossaryRules> {
        self.glossary.get(audience).filter(|rules| !rules.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn glossary_rules_keep_document_order() {
        let deck: CopyDeck = serde_json::from_value(json!({
            "meta": { "language": "en", "version": 1 },
            "glossary": { "kid": { "variable": "name", "function": "recipe", "object": "thing" } },
            "errors": {}
        }))
        .unwrap();

        let rules: Vec<_> = deck.glossary_for("kid").unwrap().iter().collect();
        assert_eq!(
            rules,
            vec![("variable", "name"), ("function", "recipe"), ("object", "thing")]
        );
        assert!(deck.glossary_for("intermediate").is_none());
    }

    #[test]
    fn version_accepts_any_json_number() {
        for (raw, expected) in [(json!(1), 1.0), (json!(1.5), 1.5), (json!(-1), -1.0)] {
            let meta: DeckMeta =
                serde_json::from_value(json!({ "language": "en", "version": raw })).unwrap();
            assert_eq!(meta.version, expected);
        }
        assert!(serde_json::from_value::<DeckMeta>(json!({ "language": "en", "version": "1" })).is_err());
    }

    #[test]
    fn condition_accepts_snake_and_camel_keys() {
        let v: Variant = serde_json::from_value(json!({
            "if": { "match_message": ["a"], "notCode": ["b"] },
            "title": "t",
            "summary": "s"
        }))
        .unwrap();
        let cond = v.condition.as_ref().unwrap();
        assert_eq!(cond.match_message, vec!["a"]);
        assert_eq!(cond.not_code, vec!["b"]);
        assert!(!v.is_unconditional());
    }

    #[test]
    fn empty_condition_counts_as_unconditional() {
        let v: Variant = serde_json::from_value(json!({
            "if": {},
            "title": "t",
            "summary": "s"
        }))
        .unwrap();
        assert!(v.is_unconditional());
    }

    #[test]
    fn ui_strings_fall_back_to_english() {
        let ui = UiStrings {
            line: Some("ligne".to_string()),
            in_word: Some(String::new()),
            ..UiStrings::default()
        };
        assert_eq!(ui.line(), "ligne");
        assert_eq!(ui.in_word(), "in");
        assert_eq!(ui.this_file(), "this file");
        assert_eq!(ui.python_error(), "Python error");
    }

    #[test]
    fn key_for_resolves_against_errors_table() {
        let deck: CopyDeck = serde_json::from_value(json!({
            "meta": { "language": "en", "version": 1 },
            "errors": { "NameError": { "variants": [] } }
        }))
        .unwrap();
        assert_eq!(
            deck.key_for(Some("NameError")),
            DeckKey::Kind("NameError".to_string())
        );
        assert_eq!(deck.key_for(Some("KeyError")), DeckKey::Fallback);
        assert!(deck.entry(&DeckKey::Fallback).is_none());
    }
}
