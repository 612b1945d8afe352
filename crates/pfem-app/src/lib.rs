//! Use case orchestration for pfem.
//!
//! This crate provides the application layer: use cases that coordinate deck loading, the
//! explanation engine and the renderers. It is intentionally thin and delegates heavy lifting to
//! the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check_deck;
mod deck;
mod explain;
mod render;

pub use check_deck::{format_lints, run_deck_check, DeckCheckOutput};
pub use deck::{load_deck, load_deck_file, DeckLocation, FsDeckSource, DECK_FILE_NAME};
pub use explain::{parse_error_input, run_explain, ExplainInput};
pub use render::{render_result, OutputFormat};
