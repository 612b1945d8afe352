/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Pieces of the display fragment.
///
/// `summary`, `why` and `steps` are already HTML: deck copy may carry markup, and the caller
/// escapes every interpolated runtime value before it reaches them. Everything else is plain
/// text and is escaped here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlFragment<'a> {
    pub title: &'a str,
    pub summary: &'a str,
    pub why: Option<&'a str>,
    pub steps: &'a [String],
    pub patch: Option<&'a str>,
    pub details_label: &'a str,
    pub details: &'a str,
}

pub fn render_html(fragment: &HtmlFragment<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "<div class=\"pfem__title\">{}</div>",
        escape_html(fragment.title)
    ));
    parts.push(format!("<div class=\"pfem__summary\">{}</div>", fragment.summary));
    if let Some(why) = fragment.why {
        parts.push(format!("<div class=\"pfem__why\">{why}</div>"));
    }
    if !fragment.steps.is_empty() {
        let items: String = fragment
            .steps
            .iter()
            .map(|s| format!("<li>{s}</li>"))
            .collect();
        parts.push(format!("<ul class=\"pfem__steps\">{items}</ul>"));
    }
    if let Some(patch) = fragment.patch {
        parts.push(format!(
            "<pre class=\"pfem__patch\">{}</pre>",
            escape_html(patch)
        ));
    }
    parts.push(format!(
        "<details class=\"pfem__details\"><summary>{}</summary><pre>{}</pre></details>",
        escape_html(fragment.details_label),
        escape_html(fragment.details)
    ));

    parts.join("\n")
}
