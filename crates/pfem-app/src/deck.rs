//! Copy deck loading from the filesystem.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use pfem_deck::{load_for_locale, parse_copy_deck_json, CopyDeck, DeckSource, LoadedDeck};
use std::io;
use tracing::{debug, info, warn};

/// File name of a deck inside its locale directory.
pub const DECK_FILE_NAME: &str = "copydeck.json";

/// Decks laid out as `<root>/<locale>/copydeck.json`.
#[derive(Clone, Debug)]
pub struct FsDeckSource {
    root: Utf8PathBuf,
}

impl FsDeckSource {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, locale: &str) -> Utf8PathBuf {
        self.root.join(locale).join(DECK_FILE_NAME)
    }
}

impl DeckSource for FsDeckSource {
    fn fetch(&self, locale: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(locale);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(%path, "no copy deck for locale");
                Ok(None)
            }
            Err(err) => Err(err).with_context(|| format!("read {path}")),
        }
    }
}

/// Where the CLI was told to find a deck.
#[derive(Clone, Debug)]
pub enum DeckLocation {
    File(Utf8PathBuf),
    Tree { root: Utf8PathBuf, locale: String },
}

pub fn load_deck_file(path: &Utf8Path) -> anyhow::Result<CopyDeck> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    parse_copy_deck_json(&text).with_context(|| format!("load copy deck {path}"))
}

pub fn load_deck(location: &DeckLocation) -> anyhow::Result<LoadedDeck> {
    let loaded = match location {
        DeckLocation::File(path) => {
            let deck = load_deck_file(path)?;
            LoadedDeck {
                locale: deck.meta.language.clone(),
                deck,
            }
        }
        DeckLocation::Tree { root, locale } => {
            let loaded = load_for_locale(&FsDeckSource::new(root.clone()), locale)
                .with_context(|| format!("load copy deck from {root}"))?;
            if loaded.locale != *locale {
                warn!(requested = %locale, using = %loaded.locale, "no copy deck for requested locale");
            }
            loaded
        }
    };
    info!(
        locale = %loaded.locale,
        version = loaded.deck.meta.version,
        "copy deck loaded"
    );
    Ok(loaded)
}
