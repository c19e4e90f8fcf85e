use crate::highlight::{highlight, HighlightMode};
use crate::result::{SearchResult, Span};
use std::fmt::Write;

/// Render one result as a numbered title followed by its matching lines.
pub fn render_result(
    result: &SearchResult,
    idx: usize,
    total: usize,
    mode: Option<HighlightMode>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}/{}] {}", idx, total, paint(&result.title, &result.title_spans, mode));
    for lm in &result.line_matches {
        let _ = writeln!(out, "  [{:2}] {}", lm.line_no, paint(&lm.text, &lm.spans, mode));
    }
    out
}

fn paint(text: &str, spans: &[Span], mode: Option<HighlightMode>) -> String {
    match mode {
        Some(mode) => highlight(text, spans, mode),
        None => text.to_string(),
    }
}

/// Render a whole result list, preceded by a summary line.
pub fn render_results(results: &[SearchResult], mode: Option<HighlightMode>) -> String {
    let total = results.len();
    let mut out = format!(
        "Found {} result{}\n",
        total,
        if total == 1 { "" } else { "s" }
    );
    for (i, result) in results.iter().enumerate() {
        out.push('\n');
        out.push_str(&render_result(result, i + 1, total, mode));
    }
    out
}
