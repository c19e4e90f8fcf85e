use crate::document::{DocId, Document};
use crate::error::{Result, SearchError};
use crate::index::{IndexStats, InvertedIndex};
use crate::result::SearchResult;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Match all query terms (AND)
    #[default]
    And,
    /// Match any query term (OR)
    Or,
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(SearchMode::And),
            "or" => Ok(SearchMode::Or),
            other => Err(SearchError::invalid_argument(format!(
                "unknown search mode '{}', expected AND or OR",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::And => f.write_str("AND"),
            SearchMode::Or => f.write_str("OR"),
        }
    }
}

/// Answers multi-word queries over an immutable index.
#[derive(Debug, Clone)]
pub struct Searcher {
    index: InvertedIndex,
}

impl Searcher {
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        Ok(Self {
            index: InvertedIndex::build(documents)?,
        })
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Search for every whitespace-separated word of `query`.
    ///
    /// Results are aggregated per document and sorted by title.
    pub fn search(&self, query: &str, mode: SearchMode) -> Vec<SearchResult> {
        let mut words = query.split_whitespace();

        let Some(first) = words.next() else {
            return Vec::new();
        };
        let mut combined = self.index.search_for(first);

        for word in words {
            let results = self.index.search_for(word);
            combined = match mode {
                SearchMode::And => intersect(combined, &results),
                SearchMode::Or => union(combined, results),
            };
        }

        let mut results: Vec<SearchResult> = combined.into_values().collect();
        // stable, so equal titles keep document id order
        results.sort_by(|a, b| a.title.cmp(&b.title));

        tracing::debug!(query, %mode, results = results.len(), "Search finished");
        results
    }

    /// Like [`Searcher::search`], with the mode given as a string.
    pub fn search_with_mode(&self, query: &str, mode: &str) -> Result<Vec<SearchResult>> {
        let mode: SearchMode = mode.parse()?;
        Ok(self.search(query, mode))
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}

/// Keep documents present on both sides, combining their partial results.
fn intersect(
    running: BTreeMap<DocId, SearchResult>,
    results: &BTreeMap<DocId, SearchResult>,
) -> BTreeMap<DocId, SearchResult> {
    running
        .into_iter()
        .filter_map(|(doc_id, acc)| results.get(&doc_id).map(|r| (doc_id, acc.combine(r))))
        .collect()
}

/// Keep documents present on either side, combining those on both.
fn union(
    mut running: BTreeMap<DocId, SearchResult>,
    results: BTreeMap<DocId, SearchResult>,
) -> BTreeMap<DocId, SearchResult> {
    for (doc_id, result) in results {
        let merged = match running.remove(&doc_id) {
            Some(acc) => acc.combine(&result),
            None => result,
        };
        running.insert(doc_id, merged);
    }
    running
}
