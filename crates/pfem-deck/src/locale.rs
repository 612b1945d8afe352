use crate::model::CopyDeck;
use crate::parse_copy_deck_json;

/// Locale tried last when neither the requested locale nor its base language has a deck.
pub const DEFAULT_LOCALE: &str = "en";

/// Where deck text comes from (a directory tree, an embedded bundle, a test map...).
pub trait DeckSource {
    /// Deck text for `locale`, or `Ok(None)` when this source has no deck for it.
    fn fetch(&self, locale: &str) -> anyhow::Result<Option<String>>;
}

/// A deck together with the locale it was actually loaded for.
#[derive(Clone, Debug)]
pub struct LoadedDeck {
    pub locale: String,
    pub deck: CopyDeck,
}

/// Locales to try, in order: the requested one, its base language, then [`DEFAULT_LOCALE`].
pub fn locale_candidates(locale: &str) -> Vec<String> {
    let locale = locale.trim();
    let mut out: Vec<String> = Vec::new();
    if !locale.is_empty() {
        out.push(locale.to_string());
        if let Some((base, _)) = locale.split_once('-')
            && !base.is_empty()
        {
            out.push(base.to_string());
        }
    }
    if !out.iter().any(|l| l == DEFAULT_LOCALE) {
        out.push(DEFAULT_LOCALE.to_string());
    }
    out
}

/// Load the first deck available for the locale candidates of `locale`.
///
/// Fetch or parse failures for one candidate move on to the next; the error lists every
/// candidate tried.
pub fn load_for_locale(source: &dyn DeckSource, locale: &str) -> anyhow::Result<LoadedDeck> {
    let candidates = locale_candidates(locale);
    let mut failures = Vec::new();

    for candidate in &candidates {
        let text = match source.fetch(candidate) {
            Ok(Some(text)) => text,
            Ok(None) => continue,
            Err(err) => {
                failures.push(format!("{candidate}: {err:#}"));
                continue;
            }
        };
        match parse_copy_deck_json(&text) {
            Ok(deck) => {
                return Ok(LoadedDeck {
                    locale: candidate.clone(),
                    deck,
                });
            }
            Err(err) => failures.push(format!("{candidate}: {err:#}")),
        }
    }

    if failures.is_empty() {
        anyhow::bail!("no copy deck found for {}", candidates.join(", "))
    }
    anyhow::bail!(
        "no copy deck found for {} ({})",
        candidates.join(", "),
        failures.join("; ")
    )
}
