//! `{{ placeholder }}` interpolation and audience glossary substitution.

use pfem_deck::{pattern, GlossaryRules, UiStrings};
use pfem_render::escape_html;
use pfem_types::Trace;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;
use tracing::debug;

/// From the leftmost `{{` to the nearest `}}`, absorbing the rest of the closing brace run.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}+").expect("static regex"));

/// Values available to deck templates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateContext {
    pub loc: String,
    pub name: String,
    pub code_line: String,
}

impl TemplateContext {
    pub fn from_trace(trace: &Trace, ui: &UiStrings) -> Self {
        Self {
            loc: location_string(trace, ui),
            name: trace.name.clone().unwrap_or_default(),
            code_line: trace.code_line().to_string(),
        }
    }

    /// Same context with every value HTML-escaped, for the display fragment.
    pub fn escaped(&self) -> Self {
        Self {
            loc: escape_html(&self.loc),
            name: escape_html(&self.name),
            code_line: escape_html(&self.code_line),
        }
    }

    fn get(&self, key: &str) -> &str {
        match key {
            "loc" => &self.loc,
            "name" => &self.name,
            "codeLine" => &self.code_line,
            _ => "",
        }
    }
}

/// Human-readable location: `line N in FILE`, `line N`, `FILE`, or the deck's "this file".
pub fn location_string(trace: &Trace, ui: &UiStrings) -> String {
    match (trace.line, trace.file.as_deref()) {
        (Some(line), Some(file)) => format!("{} {line} {} {file}", ui.line(), ui.in_word()),
        (Some(line), None) => format!("{} {line}", ui.line()),
        (None, Some(file)) => file.to_string(),
        (None, None) => ui.this_file().to_string(),
    }
}

/// Replace every placeholder; unknown keys render as empty text.
///
/// Extra braces around a key belong to the placeholder, so `{{{{name}}}}` renders like
/// `{{name}}`. Substituted values are never rescanned.
pub fn render(template: &str, ctx: &TemplateContext) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let key = caps[1].trim_matches(|c: char| c == '{' || c == '}' || c.is_whitespace());
            ctx.get(key).to_string()
        })
        .into_owned()
}

/// Apply glossary rules in order. Each term is a case-insensitive pattern replaced everywhere
/// by its literal replacement; later rules see earlier output.
pub fn apply_glossary(text: &str, rules: Option<&GlossaryRules>) -> String {
    let Some(rules) = rules else {
        return text.to_string();
    };

    let mut out = text.to_string();
    for (term, replacement) in rules.iter() {
        match pattern::compile(term) {
            Ok(re) => out = re.replace_all(&out, NoExpand(replacement)).into_owned(),
            Err(err) => debug!(term, error = %err, "skipping malformed glossary term"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> TemplateContext {
        TemplateContext {
            loc: "line 2".to_string(),
            name: "kittens".to_string(),
            code_line: "print(kittens)".to_string(),
        }
    }

    #[test]
    fn renders_known_placeholders_with_inner_whitespace() {
        assert_eq!(
            render("Check {{loc}}: `{{ name }}` in {{  codeLine }}", &ctx()),
            "Check line 2: `kittens` in print(kittens)"
        );
    }

    #[test]
    fn unknown_placeholders_render_empty() {
        assert_eq!(render("a{{nope}}b{{ }}c", &ctx()), "abc");
        assert_eq!(render("no tokens", &ctx()), "no tokens");
    }

    #[test]
    fn surrounding_braces_are_absorbed_by_the_placeholder() {
        assert_eq!(render("{{{{name}}}}", &ctx()), "kittens");
        assert_eq!(render("{{{loc}}}", &ctx()), "line 2");
        assert_eq!(render("{{ {{name}} }}", &ctx()), "kittens }}");
        assert_eq!(render("a{{{nope}}{b}}", &ctx()), "a{b}}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let c = TemplateContext {
            code_line: "d = {{name}}".to_string(),
            ..ctx()
        };
        assert_eq!(render("{{codeLine}}", &c), "d = {{name}}");
    }

    #[test]
    fn location_covers_every_combination() {
        let ui = UiStrings::default();
        let mut t = Trace::from_raw("x");
        assert_eq!(location_string(&t, &ui), "this file");

        t.file = Some("main.py".to_string());
        assert_eq!(location_string(&t, &ui), "main.py");

        t.line = Some(4);
        assert_eq!(location_string(&t, &ui), "line 4 in main.py");

        t.file = None;
        assert_eq!(location_string(&t, &ui), "line 4");
    }

    #[test]
    fn escaped_context_neutralizes_markup() {
        let c = TemplateContext {
            code_line: "if a < b:".to_string(),
            ..ctx()
        };
        assert_eq!(render("{{codeLine}}", &c.escaped()), "if a &lt; b:");
    }

    #[test]
    fn glossary_applies_sequentially_and_case_insensitively() {
        let rules: GlossaryRules = [("variable", "name box"), ("box", "container")]
            .into_iter()
            .collect();
        assert_eq!(
            apply_glossary("A Variable is missing", Some(&rules)),
            "A name container is missing"
        );
    }

    #[test]
    fn glossary_replacement_is_literal_and_bad_terms_are_skipped() {
        let rules: GlossaryRules = [("(broken", "x"), ("cost", "$1 each")].into_iter().collect();
        assert_eq!(apply_glossary("cost (broken", Some(&rules)), "$1 each (broken");
        assert_eq!(apply_glossary("unchanged", None), "unchanged");
    }
}
