//! Stable DTOs and IDs used across the pfem workspace.
//!
//! This crate is intentionally boring:
//! - the normalized `Trace` produced by runtime adapters
//! - the `ExplainResult` handed back to callers
//! - typed error-kind keys, audiences and verbosity levels
//! - stable string IDs

#![forbid(unsafe_code)]

pub mod ids;
pub mod kind;
pub mod options;
pub mod result;
pub mod trace;

pub use kind::{DeckKey, KnownKind};
pub use options::{Audience, Verbosity};
pub use result::{ExplainResult, VariantId};
pub use trace::{Frame, Runtime, Trace};
