//! The `check-deck` use case: parse a deck and report authoring problems.

use pfem_deck::{lint_deck, parse_copy_deck_json, DeckLint, LintLevel};

#[derive(Clone, Debug)]
pub struct DeckCheckOutput {
    pub lints: Vec<DeckLint>,
}

impl DeckCheckOutput {
    pub fn has_errors(&self) -> bool {
        self.lints.iter().any(|l| l.level == LintLevel::Error)
    }

    /// 0 when clean or warnings only, 1 when any lint is an error.
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() { 1 } else { 0 }
    }
}

pub fn run_deck_check(text: &str) -> anyhow::Result<DeckCheckOutput> {
    let deck = parse_copy_deck_json(text)?;
    let mut lints = lint_deck(&deck);
    lints.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.path.cmp(&b.path)));
    Ok(DeckCheckOutput { lints })
}

/// Format lints for terminal display.
pub fn format_lints(output: &DeckCheckOutput) -> String {
    if output.lints.is_empty() {
        return "copy deck OK\n".to_string();
    }

    let mut out = String::new();
    for lint in &output.lints {
        out.push_str(&lint.to_string());
        out.push('\n');
    }
    let errors = output
        .lints
        .iter()
        .filter(|l| l.level == LintLevel::Error)
        .count();
    out.push_str(&format!(
        "\n{} error(s), {} warning(s)\n",
        errors,
        output.lints.len() - errors
    ));
    out
}
