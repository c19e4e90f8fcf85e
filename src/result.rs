use crate::document::DocId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Half-open character interval `[start, end)` over a title or line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// All matched spans on one line of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    pub line_no: usize,
    pub text: String,
    /// Not necessarily sorted; may contain duplicates.
    pub spans: Vec<Span>,
}

impl LineMatch {
    pub fn new(line_no: usize, text: impl Into<String>, spans: Vec<Span>) -> Self {
        Self {
            line_no,
            text: text.into(),
            spans,
        }
    }
}

/// The aggregated matches of a query within a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub title: String,
    pub title_spans: Vec<Span>,
    /// Sorted by line number, at most one entry per line.
    pub line_matches: Vec<LineMatch>,
    /// Number of occurrences contributed, summed across combinations.
    pub matches: usize,
}

impl SearchResult {
    /// A result for one occurrence in the title.
    pub fn title_hit(doc_id: DocId, title: impl Into<String>, span: Span) -> Self {
        Self {
            doc_id,
            title: title.into(),
            title_spans: vec![span],
            line_matches: Vec::new(),
            matches: 1,
        }
    }

    /// A result for one occurrence on a line.
    pub fn line_hit(
        doc_id: DocId,
        title: impl Into<String>,
        line_no: usize,
        line_text: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            doc_id,
            title: title.into(),
            title_spans: Vec::new(),
            line_matches: vec![LineMatch::new(line_no, line_text, vec![span])],
            matches: 1,
        }
    }

    /// Merge two partial results for the same document into a new one.
    ///
    /// Match counts add up, title spans are pooled and sorted, and line
    /// matches are joined per line number with their spans concatenated.
    pub fn combine(&self, other: &SearchResult) -> SearchResult {
        debug_assert_eq!(self.doc_id, other.doc_id, "combining results of different documents");

        let mut title_spans: Vec<Span> = self
            .title_spans
            .iter()
            .chain(other.title_spans.iter())
            .copied()
            .collect();
        title_spans.sort();

        let mut lines: BTreeMap<usize, LineMatch> = BTreeMap::new();
        for lm in self.line_matches.iter().chain(other.line_matches.iter()) {
            lines
                .entry(lm.line_no)
                .and_modify(|existing| existing.spans.extend_from_slice(&lm.spans))
                .or_insert_with(|| lm.clone());
        }

        SearchResult {
            doc_id: self.doc_id,
            title: self.title.clone(),
            title_spans,
            line_matches: lines.into_values().collect(),
            matches: self.matches + other.matches,
        }
    }

    /// Every (line number, span) pair of this result; title spans use `None`.
    pub fn span_set(&self) -> Vec<(Option<usize>, Span)> {
        let mut pairs: Vec<(Option<usize>, Span)> = self
            .title_spans
            .iter()
            .map(|s| (None, *s))
            .chain(
                self.line_matches
                    .iter()
                    .flat_map(|lm| lm.spans.iter().map(move |s| (Some(lm.line_no), *s))),
            )
            .collect();
        pairs.sort();
        pairs
    }
}
