//! Ordered adapter registry and dispatch.

use crate::adapters;
use crate::input::ErrorInput;
use indexmap::IndexMap;
use pfem_types::{ids, Trace};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Translates one runtime family's diagnostic text into a [`Trace`], or declines with `None`.
pub trait Adapter: Send + Sync {
    fn extract(&self, raw: &str, code: Option<&str>) -> Option<Trace>;
}

impl<F> Adapter for F
where
    F: Fn(&str, Option<&str>) -> Option<Trace> + Send + Sync,
{
    fn extract(&self, raw: &str, code: Option<&str>) -> Option<Trace> {
        self(raw, code)
    }
}

/// Adapters keyed by name, tried in registration order.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: IndexMap<String, Arc<dyn Adapter>>,
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the bundled adapters: `skulpt`, then `pyodide`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(ids::ADAPTER_SKULPT, adapters::skulpt);
        registry.register(ids::ADAPTER_PYODIDE, adapters::pyodide);
        registry
    }

    /// Store `adapter` under `name`. Re-registering a name replaces the adapter in place and
    /// keeps its original position in the dispatch order.
    pub fn register<A: Adapter + 'static>(&mut self, name: impl Into<String>, adapter: A) {
        self.adapters.insert(name.into(), Arc::new(adapter));
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.adapters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Normalize raw text: first adapter that accepts it wins, the generic extractor otherwise.
    pub fn extract(&self, raw: &str, code: Option<&str>) -> Trace {
        for (name, adapter) in &self.adapters {
            if let Some(trace) = adapter.extract(raw, code) {
                debug!(adapter = %name, kind = ?trace.kind, "adapter recognized error text");
                return trace;
            }
        }
        debug!("no adapter recognized error text; using generic extractor");
        adapters::generic(raw)
    }

    /// Turn any accepted input into a trace. Pre-built traces pass through untouched.
    pub fn coerce(&self, input: ErrorInput, code: Option<&str>) -> Trace {
        match input {
            ErrorInput::Trace(trace) => trace,
            ErrorInput::Text(raw) => self.extract(&raw, code),
        }
    }
}
