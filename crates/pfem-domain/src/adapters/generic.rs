use super::split_tail;
use pfem_types::{Runtime, Trace};

/// Last-resort extractor: `Kind: message` from the last line, no location or source context.
pub fn generic(raw: &str) -> Trace {
    let (kind, message, _) = split_tail(raw);
    Trace {
        kind,
        message,
        raw: raw.to_string(),
        runtime: Runtime::Unknown,
        ..Trace::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_kind_and_message_only() {
        let trace = generic("File \"main.py\", line 2\nValueError: bad 'x'");
        assert_eq!(trace.kind.as_deref(), Some("ValueError"));
        assert_eq!(trace.message, "bad 'x'");
        assert_eq!(trace.line, None);
        assert_eq!(trace.name, None);
        assert_eq!(trace.runtime, Runtime::Unknown);
    }

    #[test]
    fn anything_goes() {
        let trace = generic("something odd happened");
        assert_eq!(trace.kind, None);
        assert_eq!(trace.message, "something odd happened");
        assert_eq!(trace.raw, "something odd happened");
    }
}
