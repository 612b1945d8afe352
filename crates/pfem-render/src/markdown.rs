use pfem_types::ExplainResult;

pub fn render_markdown(result: &ExplainResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("### {}\n\n", result.title));
    out.push_str(&result.summary);
    out.push_str("\n\n");

    if let Some(why) = &result.why {
        out.push_str(&format!("> {}\n\n", why));
    }

    for step in &result.steps {
        out.push_str(&format!("- {}\n", step));
    }
    if !result.steps.is_empty() {
        out.push('\n');
    }

    if let Some(patch) = &result.patch {
        out.push_str("```python\n");
        out.push_str(patch);
        out.push_str("\n```\n\n");
    }

    let kind = result.trace.kind().unwrap_or("Error");
    out.push_str(&format!(
        "<sub>`{}` · {}: {}</sub>\n",
        result.variant_id, kind, result.trace.message
    ));

    out
}
