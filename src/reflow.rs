//! HTML item text to wrapped plain-text lines.

use std::borrow::Cow;

/// Convert HN item HTML into plain text.
///
/// Paragraphs become blank-line separated blocks, inline formatting turns
/// into markdown-style markers, links keep only their text, and entities are
/// decoded. Runs of blank lines collapse to one.
pub fn to_plain(html: &str) -> String {
    let marked = html
        .replace("<p>", "\n\n")
        .replace("</p>", "")
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("<i>", "_")
        .replace("</i>", "_")
        .replace("<b>", "*")
        .replace("</b>", "*")
        .replace("<code>", "`")
        .replace("</code>", "`")
        .replace("<pre>", "\n")
        .replace("</pre>", "\n");
    let stripped = strip_tags(&marked);
    let decoded = html_escape::decode_html_entities(&stripped);

    let mut out: Vec<&str> = Vec::new();
    for line in decoded.lines().map(str::trim) {
        if line.is_empty() && out.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Word-wrap plain text to `width` columns. Blank lines are kept as
/// paragraph separators; words longer than the width are split.
pub fn reflow(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(textwrap::wrap(line, width).into_iter().map(Cow::into_owned));
    }
    lines
}

/// Number of terminal rows `html` occupies once reflowed to `width`.
pub fn line_count(html: &str, width: usize) -> usize {
    reflow(&to_plain(html), width).len()
}
