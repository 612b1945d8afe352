use crate::input::ErrorInput;
use crate::patches;
use crate::registry::{Adapter, AdapterRegistry};
use crate::select::{select, Selection};
use crate::source;
use crate::template::{apply_glossary, render, TemplateContext};
use pfem_deck::{CopyDeck, GlossaryRules, UiStrings, Variant};
use pfem_render::{render_html, HtmlFragment};
use pfem_types::{Audience, DeckKey, ExplainResult, Trace, VariantId, Verbosity};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ExplainError {
    #[error("copy deck not loaded")]
    DeckNotLoaded,
}

/// One explain request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplainOptions {
    pub error: ErrorInput,
    pub code: Option<String>,
    pub audience: Audience,
    pub verbosity: Verbosity,
    /// Carried for callers that resolve decks per locale; the engine does not interpret it.
    pub locale: Option<String>,
}

impl ExplainOptions {
    pub fn new(error: impl Into<ErrorInput>) -> Self {
        Self {
            error: error.into(),
            code: None,
            audience: Audience::default(),
            verbosity: Verbosity::default(),
            locale: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn audience(mut self, audience: Audience) -> Self {
        self.audience = audience;
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Explanation engine: the loaded copy deck plus the adapters used to read raw errors.
///
/// Engines are independent values; two sessions with different decks use two engines.
#[derive(Clone, Debug)]
pub struct Engine {
    deck: Option<Arc<CopyDeck>>,
    adapters: AdapterRegistry,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// No deck yet, built-in adapters registered.
    pub fn new() -> Self {
        Self::with_adapters(AdapterRegistry::builtin())
    }

    pub fn with_adapters(adapters: AdapterRegistry) -> Self {
        Self {
            deck: None,
            adapters,
        }
    }

    /// Replace the active deck.
    pub fn load_copy_deck(&mut self, deck: impl Into<Arc<CopyDeck>>) {
        let deck = deck.into();
        debug!(
            language = %deck.meta.language,
            version = deck.meta.version,
            kinds = deck.errors.len(),
            "copy deck loaded"
        );
        self.deck = Some(deck);
    }

    pub fn register_adapter<A: Adapter + 'static>(&mut self, name: impl Into<String>, adapter: A) {
        self.adapters.register(name, adapter);
    }

    pub fn deck(&self) -> Option<&CopyDeck> {
        self.deck.as_deref()
    }

    pub fn adapters(&self) -> &AdapterRegistry {
        &self.adapters
    }

    pub fn explain(&self, options: ExplainOptions) -> Result<ExplainResult, ExplainError> {
        let deck = self.deck.as_deref().ok_or(ExplainError::DeckNotLoaded)?;
        let ExplainOptions {
            error,
            code,
            audience,
            verbosity,
            ..
        } = options;

        let mut trace = self.adapters.coerce(error, code.as_deref());
        if trace.code_line.is_none()
            && let (Some(code), Some(line)) = (code.as_deref(), trace.line)
        {
            trace.code_line = source::code_line(code, line);
        }

        let mut result = match select(deck, &trace) {
            Selection::Matched {
                key,
                index,
                variant,
            } => build_result(deck, trace, &key, index, variant, audience, verbosity),
            Selection::NoEntry { key } | Selection::NoMatch { key } => {
                debug!(key = %key, "using built-in fallback explanation");
                fallback_result(&deck.ui, trace)
            }
        };

        if verbosity == Verbosity::Brief {
            result.trim_brief();
        }
        Ok(result)
    }
}

struct RenderedCopy {
    title: String,
    summary: String,
    why: Option<String>,
    steps: Vec<String>,
}

impl RenderedCopy {
    fn new(variant: &Variant, ctx: &TemplateContext, glossary: Option<&GlossaryRules>) -> Self {
        let text = |template: &str| apply_glossary(&render(template, ctx), glossary);
        Self {
            title: text(&variant.title),
            summary: text(&variant.summary),
            why: variant.why.as_deref().map(|w| text(w)),
            steps: variant.steps.iter().map(|s| text(s)).collect(),
        }
    }

    fn trim_brief(&mut self) {
        self.why = None;
        self.steps.truncate(1);
    }
}

fn build_result(
    deck: &CopyDeck,
    trace: Trace,
    key: &DeckKey,
    index: usize,
    variant: &Variant,
    audience: Audience,
    verbosity: Verbosity,
) -> ExplainResult {
    let glossary = deck.glossary_for(audience.as_str());
    let ctx = TemplateContext::from_trace(&trace, &deck.ui);

    let plain = RenderedCopy::new(variant, &ctx, glossary);
    let mut markup = RenderedCopy::new(variant, &ctx.escaped(), glossary);
    if verbosity == Verbosity::Brief {
        markup.trim_brief();
    }

    let patch = patches::synthesize(&trace);
    let details = format!(
        "{}: {}",
        trace.kind().unwrap_or_else(|| deck.ui.error()),
        trace.message
    );
    let html = render_html(&HtmlFragment {
        title: &plain.title,
        summary: &markup.summary,
        why: markup.why.as_deref(),
        steps: &markup.steps,
        patch: patch.as_deref(),
        details_label: deck.ui.error_details(),
        details: &details,
    });

    ExplainResult {
        trace,
        variant_id: VariantId::new(key, index),
        title: plain.title,
        summary: plain.summary,
        why: plain.why,
        steps: plain.steps,
        badges: variant.badges.clone(),
        patch,
        html: Some(html),
    }
}

fn fallback_result(ui: &UiStrings, trace: Trace) -> ExplainResult {
    ExplainResult {
        trace,
        variant_id: VariantId::fallback(),
        title: ui.python_error().to_string(),
        summary: ui.fallback_summary().to_string(),
        why: Some(ui.fallback_why().to_string()),
        steps: vec![ui.fallback_step().to_string()],
        badges: Vec::new(),
        patch: None,
        html: None,
    }
}
