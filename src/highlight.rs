//! Wrapping matched spans of a text in highlight markers.

use crate::error::{Result, SearchError};
use crate::result::Span;
use std::str::FromStr;

const RESET: &str = "\x1b[0m";

/// Highlight style for matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightMode {
    /// Black text on a yellow background.
    #[default]
    Default,
    /// Bold bright green text.
    Green,
}

impl HighlightMode {
    /// The opening and closing marker for this mode.
    pub fn markers(&self) -> (&'static str, &'static str) {
        match self {
            HighlightMode::Default => ("\x1b[43m\x1b[30m", RESET),
            HighlightMode::Green => ("\x1b[1;92m", RESET),
        }
    }
}

impl FromStr for HighlightMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(HighlightMode::Default),
            "green" => Ok(HighlightMode::Green),
            other => Err(SearchError::invalid_argument(format!(
                "unknown highlight mode '{}'",
                other
            ))),
        }
    }
}

/// Sort spans and merge those that overlap or touch.
pub fn merge_spans(spans: &[Span]) -> Vec<Span> {
    let mut sorted = spans.to_vec();
    sorted.sort();

    let mut merged: Vec<Span> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(current) if span.start <= current.end => {
                current.end = current.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Wrap every merged span of `text` in the markers of `mode`.
pub fn highlight(text: &str, spans: &[Span], mode: HighlightMode) -> String {
    let (open, close) = mode.markers();
    highlight_with(text, spans, open, close)
}

/// Wrap every merged span of `text` in `open` / `close`.
///
/// Span offsets are in characters; spans past the end of the text are clamped.
pub fn highlight_with(text: &str, spans: &[Span], open: &str, close: &str) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    // byte offset of every char boundary, including the end of the text
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = boundaries.len() - 1;
    let byte_at = |c: usize| boundaries[c.min(char_count)];

    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut pos = 0;
    for span in merge_spans(spans) {
        let start = byte_at(span.start).max(pos);
        let end = byte_at(span.end);
        if start >= end {
            continue;
        }
        out.push_str(&text[pos..start]);
        out.push_str(open);
        out.push_str(&text[start..end]);
        out.push_str(close);
        pos = end;
    }
    out.push_str(&text[pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(text: &str, spans: &[(usize, usize)]) -> String {
        let spans: Vec<Span> = spans.iter().map(|&(s, e)| Span::new(s, e)).collect();
        highlight_with(text, &spans, "[", "]")
    }

    #[test]
    fn test_merge_overlapping() {
        assert_eq!(
            merge_spans(&[Span::new(0, 3), Span::new(2, 5)]),
            vec![Span::new(0, 5)]
        );
        assert_eq!(mark("abcdefghij", &[(0, 3), (2, 5)]), "[abcde]fghij");
    }

    #[test]
    fn test_merge_adjacent() {
        assert_eq!(mark("abcdefghij", &[(3, 5), (0, 3)]), "[abcde]fghij");
    }

    #[test]
    fn test_disjoint_spans_stay_separate() {
        assert_eq!(mark("abcdefghij", &[(6, 8), (0, 2)]), "[ab]cdef[gh]ij");
    }

    #[test]
    fn test_contained_span() {
        assert_eq!(mark("abcdefghij", &[(1, 9), (2, 4), (1, 9)]), "a[bcdefghi]j");
    }

    #[test]
    fn test_no_spans() {
        assert_eq!(highlight("rose", &[], HighlightMode::Green), "rose");
    }

    #[test]
    fn test_ansi_markers() {
        assert_eq!(
            highlight("thy rose", &[Span::new(4, 8)], HighlightMode::Default),
            "thy \x1b[43m\x1b[30mrose\x1b[0m"
        );
        assert_eq!(
            highlight("thy rose", &[Span::new(0, 3)], HighlightMode::Green),
            "\x1b[1;92mthy\x1b[0m rose"
        );
    }

    #[test]
    fn test_multibyte_and_clamping() {
        assert_eq!(mark("Ô thou", &[(0, 1)]), "[Ô] thou");
        assert_eq!(mark("Ô thou", &[(2, 40)]), "Ô [thou]");
        assert_eq!(mark("rose", &[(10, 12)]), "rose");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("GREEN".parse::<HighlightMode>().unwrap(), HighlightMode::Green);
        assert!("blue".parse::<HighlightMode>().is_err());
    }
}
