//! Slicing of the learner's source around a reported line.

/// Lines of context captured on each side of the offending line.
const CONTEXT_LINES: usize = 2;

fn split_lines(code: &str) -> Vec<&str> {
    code.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect()
}

/// The 1-based `line` of `code`, trimmed.
pub(crate) fn code_line(code: &str, line: u32) -> Option<String> {
    let idx = (line as usize).checked_sub(1)?;
    split_lines(code).get(idx).map(|l| l.trim().to_string())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SourceWindow {
    pub code_line: Option<String>,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// The offending line plus up to two lines on each side, clipped at the source boundaries.
pub(crate) fn window(code: &str, line: u32) -> SourceWindow {
    let Some(idx) = (line as usize).checked_sub(1) else {
        return SourceWindow::default();
    };
    let lines = split_lines(code);
    let len = lines.len();

    let start = idx.saturating_sub(CONTEXT_LINES).min(len);
    let end = idx.min(len);
    let after_start = (idx + 1).min(len);
    let after_end = (idx + 1 + CONTEXT_LINES).min(len);

    SourceWindow {
        code_line: lines.get(idx).map(|l| l.trim().to_string()),
        before: lines[start..end].iter().map(|l| l.to_string()).collect(),
        after: lines[after_start..after_end]
            .iter()
            .map(|l| l.to_string())
            .collect(),
    }
}
