//! Rendering for explanation surfaces (HTML fragment, terminal text, Markdown).

#![forbid(unsafe_code)]

mod html;
mod markdown;
mod text;

pub use html::{escape_html, render_html, HtmlFragment};
pub use markdown::render_markdown;
pub use text::render_text;
