//! Pure explanation engine (no IO).
//!
//! Input: raw interpreter output (or a pre-built trace), optional source, and a copy deck
//! loaded elsewhere.
//! Output: a rendered explanation with an optional patch.

#![forbid(unsafe_code)]

pub mod adapters;
pub mod condition;
pub mod patches;
pub mod registry;
pub mod select;
pub mod template;

mod engine;
mod input;
mod source;

pub use engine::{Engine, ExplainError, ExplainOptions};
pub use input::ErrorInput;
pub use registry::{Adapter, AdapterRegistry};
pub use select::{select, Selection};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
