use pfem_types::Trace;
use std::error::Error;

/// What callers can hand to the engine as "the error".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorInput {
    /// Raw interpreter output.
    Text(String),
    /// Already normalized; never re-parsed.
    Trace(Trace),
}

impl ErrorInput {
    /// Use an error value's `Display` text as the raw diagnostic.
    pub fn from_error(err: &dyn Error) -> Self {
        ErrorInput::Text(err.to_string())
    }
}

impl From<&str> for ErrorInput {
    fn from(value: &str) -> Self {
        ErrorInput::Text(value.to_string())
    }
}

impl From<String> for ErrorInput {
    fn from(value: String) -> Self {
        ErrorInput::Text(value)
    }
}

impl From<Trace> for ErrorInput {
    fn from(value: Trace) -> Self {
        ErrorInput::Trace(value)
    }
}
