//! Output formatting for explain results.

use anyhow::Context;
use pfem_deck::UiStrings;
use pfem_render::{render_html, render_markdown, render_text, HtmlFragment};
use pfem_types::ExplainResult;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Html,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            other => anyhow::bail!("unknown output format: {other}"),
        }
    }
}

/// Render `result`. `ui` labels the HTML fragment built for results that carry none.
pub fn render_result(
    result: &ExplainResult,
    ui: &UiStrings,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Markdown => render_markdown(result),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result).context("serialize explain result")?;
            json.push('\n');
            json
        }
        OutputFormat::Html => match &result.html {
            Some(html) => format!("{html}\n"),
            // Fallback results carry no fragment; build one from plain copy.
            None => {
                let details = format!(
                    "{}: {}",
                    result.trace.kind().unwrap_or_else(|| ui.error()),
                    result.trace.message
                );
                let escape = |s: &str| pfem_render::escape_html(s);
                let summary = escape(&result.summary);
                let why = result.why.as_deref().map(escape);
                let steps: Vec<String> = result.steps.iter().map(|s| escape(s)).collect();
                let html = render_html(&HtmlFragment {
                    title: &result.title,
                    summary: &summary,
                    why: why.as_deref(),
                    steps: &steps,
                    patch: result.patch.as_deref(),
                    details_label: ui.error_details(),
                    details: &details,
                });
                format!("{html}\n")
            }
        },
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfem_types::{Trace, VariantId};

    fn result(html: Option<&str>) -> ExplainResult {
        ExplainResult {
            trace: Trace {
                kind: Some("NameError".to_string()),
                message: "name 'x' is not defined".to_string(),
                ..Trace::from_raw("NameError: name 'x' is not defined")
            },
            variant_id: VariantId::fallback(),
            title: "Python error".to_string(),
            summary: "a < b".to_string(),
            why: None,
            steps: vec!["retry".to_string()],
            badges: Vec::new(),
            patch: None,
            html: html.map(str::to_string),
        }
    }

    #[test]
    fn parses_format_names() {
        for f in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Html] {
            assert_eq!(f.as_str().parse::<OutputFormat>().unwrap(), f);
        }
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn json_uses_camel_case_and_variant_id_string() {
        let out = render_result(&result(None), &UiStrings::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["variantId"], "Other/variants/0");
        assert_eq!(value["trace"]["type"], "NameError");
    }

    #[test]
    fn html_prefers_engine_fragment() {
        let out = render_result(&result(Some("<div>pre</div>")), &UiStrings::default(), OutputFormat::Html).unwrap();
        assert_eq!(out, "<div>pre</div>\n");

        let built = render_result(&result(None), &UiStrings::default(), OutputFormat::Html).unwrap();
        assert!(built.contains("a &lt; b"));
        assert!(built.contains("pfem__details"));
        assert!(built.contains("Error details"));
    }

    #[test]
    fn html_fallback_uses_deck_labels() {
        let ui = UiStrings {
            error_details: Some("Détails de l'erreur".to_string()),
            error: Some("Erreur".to_string()),
            ..UiStrings::default()
        };
        let mut untyped = result(None);
        untyped.trace.kind = None;

        let built = render_result(&untyped, &ui, OutputFormat::Html).unwrap();
        assert!(built.contains("<summary>Détails de l&#39;erreur</summary>"));
        assert!(built.contains("Erreur: name"));
        assert!(!built.contains("Error details"));
    }
}
