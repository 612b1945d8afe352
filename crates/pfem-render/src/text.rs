use pfem_types::ExplainResult;

/// Format an explanation for terminal display.
pub fn render_text(result: &ExplainResult) -> String {
    let mut out = String::new();

    out.push_str(&result.title);
    out.push('\n');
    out.push_str(&"=".repeat(result.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(&result.summary);
    out.push('\n');

    if let Some(why) = &result.why {
        out.push('\n');
        out.push_str(why);
        out.push('\n');
    }

    if !result.steps.is_empty() {
        out.push('\n');
        for (i, step) in result.steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
    }

    if let Some(patch) = &result.patch {
        out.push_str("\nTry:\n");
        for line in patch.lines() {
            out.push_str(&format!("    {}\n", line));
        }
    }

    if !result.badges.is_empty() {
        out.push_str(&format!("\n[{}]\n", result.badges.join("] [")));
    }

    out
}
