use crate::document::{validate_all, DocId, Document};
use crate::error::Result;
use crate::result::{SearchResult, Span};
use crate::stemmer::stem;
use crate::tokenizer::tokenize;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Where in a document a token occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    Title,
    /// 1-based line number.
    Line(usize),
}

/// One occurrence of a stemmed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Posting {
    pub location: Location,
    /// Character offset of the surface token.
    pub offset: usize,
    /// Length of the original, unstemmed token, in characters.
    pub length: usize,
}

impl Posting {
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.length)
    }
}

/// Inverted index: stem -> document -> postings in scan order
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    documents: BTreeMap<DocId, Document>,
    dictionary: HashMap<String, BTreeMap<DocId, Vec<Posting>>>,
}

impl InvertedIndex {
    /// Build the index over all documents, or fail without building anything.
    pub fn build(documents: Vec<Document>) -> Result<Self> {
        validate_all(&documents)?;

        let start = Instant::now();
        let mut index = Self::default();

        for doc in &documents {
            for token in tokenize(&doc.title) {
                index.add_token(doc.id, stem(token.text), Location::Title, token.offset, token.char_len());
            }

            for (line_idx, line) in doc.lines.iter().enumerate() {
                for token in tokenize(line) {
                    index.add_token(
                        doc.id,
                        stem(token.text),
                        Location::Line(line_idx + 1),
                        token.offset,
                        token.char_len(),
                    );
                }
            }
        }

        index.documents = documents.into_iter().map(|d| (d.id, d)).collect();

        tracing::info!(
            documents = index.documents.len(),
            tokens = index.dictionary.len(),
            elapsed = ?start.elapsed(),
            "Built inverted index"
        );

        Ok(index)
    }

    fn add_token(&mut self, doc_id: DocId, token: String, location: Location, offset: usize, length: usize) {
        self.dictionary
            .entry(token)
            .or_default()
            .entry(doc_id)
            .or_default()
            .push(Posting {
                location,
                offset,
                length,
            });
    }

    /// Find every occurrence of a token, aggregated per document.
    ///
    /// The token is stemmed first; unknown tokens yield an empty map.
    pub fn search_for(&self, token: &str) -> BTreeMap<DocId, SearchResult> {
        let mut results: BTreeMap<DocId, SearchResult> = BTreeMap::new();

        let Some(postings_list) = self.postings(&stem(token)) else {
            return results;
        };

        for (&doc_id, postings) in postings_list {
            let Some(doc) = self.documents.get(&doc_id) else {
                continue;
            };

            for posting in postings {
                let hit = match posting.location {
                    Location::Title => SearchResult::title_hit(doc_id, doc.title.as_str(), posting.span()),
                    Location::Line(line_no) => {
                        let text = doc.line(line_no).unwrap_or_default();
                        SearchResult::line_hit(doc_id, doc.title.as_str(), line_no, text, posting.span())
                    }
                };

                let combined = match results.remove(&doc_id) {
                    Some(existing) => existing.combine(&hit),
                    None => hit,
                };
                results.insert(doc_id, combined);
            }
        }

        results
    }

    /// Get the per-document postings of an already stemmed token
    pub fn postings(&self, stemmed: &str) -> Option<&BTreeMap<DocId, Vec<Posting>>> {
        self.dictionary.get(stemmed)
    }

    /// Get index statistics
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_documents: self.documents.len(),
            total_tokens: self.dictionary.len(),
            total_postings: self
                .dictionary
                .values()
                .flat_map(|per_doc| per_doc.values())
                .map(Vec::len)
                .sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub total_tokens: usize,
    pub total_postings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::result::LineMatch;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new(
                1,
                "Sonnet 1: Test",
                vec![
                    "From fairest creatures we desire increase,".to_string(),
                    "That thereby beauty's rose might never die,".to_string(),
                ],
            ),
            Document::new(
                2,
                "Sonnet 2: Other",
                vec!["Thy beauty's image dost thou rose increase".to_string()],
            ),
        ]
    }

    #[test]
    fn test_postings_keep_surface_length() {
        let index = InvertedIndex::build(corpus()).unwrap();
        let postings = index.postings("creature").unwrap();
        assert_eq!(
            postings[&1],
            vec![Posting {
                location: Location::Line(1),
                offset: 13,
                length: 9,
            }]
        );
    }

    #[test]
    fn test_title_postings() {
        let index = InvertedIndex::build(corpus()).unwrap();
        let postings = index.postings("sonnet").unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[&2][0].location, Location::Title);
        assert_eq!(postings[&2][0].span(), Span::new(0, 6));
    }

    #[test]
    fn test_search_for_combines_occurrences() {
        let index = InvertedIndex::build(corpus()).unwrap();
        let results = index.search_for("Beauty");

        assert_eq!(results.len(), 2);
        let first = &results[&1];
        assert_eq!(first.matches, 1);
        assert_eq!(
            first.line_matches,
            vec![LineMatch::new(
                2,
                "That thereby beauty's rose might never die,",
                vec![Span::new(13, 21)]
            )]
        );

        let results = index.search_for("increases");
        assert_eq!(results[&1].line_matches[0].spans, vec![Span::new(33, 42)]);
        assert_eq!(results[&2].line_matches[0].spans, vec![Span::new(34, 42)]);
    }

    #[test]
    fn test_search_for_multiple_hits_in_document() {
        let doc = Document::new(
            7,
            "Sonnet 7: Rose",
            vec!["rose after rose".to_string(), "no roses".to_string()],
        );
        let index = InvertedIndex::build(vec![doc]).unwrap();
        let result = &index.search_for("rose")[&7];

        assert_eq!(result.matches, 4);
        assert_eq!(result.title_spans, vec![Span::new(10, 14)]);
        assert_eq!(result.line_matches.len(), 2);
        assert_eq!(result.line_matches[0].spans, vec![Span::new(0, 4), Span::new(11, 15)]);
        assert_eq!(result.line_matches[1].spans, vec![Span::new(3, 8)]);
    }

    #[test]
    fn test_search_for_unknown_token() {
        let index = InvertedIndex::build(corpus()).unwrap();
        assert!(index.search_for("nightingale").is_empty());
        assert!(index.search_for("").is_empty());
    }

    #[test]
    fn test_every_token_is_findable() {
        let docs = corpus();
        let index = InvertedIndex::build(docs.clone()).unwrap();

        for doc in &docs {
            let texts = std::iter::once(&doc.title).chain(doc.lines.iter());
            for text in texts {
                for token in tokenize(text) {
                    let results = index.search_for(&stem(token.text));
                    let result = results.get(&doc.id).expect("document missing from results");
                    assert!(result.matches >= 1);
                }
            }
        }
    }

    #[test]
    fn test_build_rejects_invalid_documents() {
        let mut docs = corpus();
        docs.push(Document::new(1, "Sonnet 1: Again", vec![]));
        assert!(matches!(
            InvertedIndex::build(docs),
            Err(SearchError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_stats() {
        let index = InvertedIndex::build(corpus()).unwrap();
        let stats = index.stats();
        assert_eq!(stats.total_documents, 2);
        // 3 + 3 title tokens, 6 + 7 + 7 line tokens
        assert_eq!(stats.total_postings, 26);
        assert!(stats.total_tokens < stats.total_postings);
    }
}
