use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type DocId = u32;

/// A poem: a unique id, a title and its numbered lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub lines: Vec<String>,
}

impl Document {
    pub fn new(id: DocId, title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            lines,
        }
    }

    /// Get a line by its 1-based number.
    pub fn line(&self, line_no: usize) -> Option<&str> {
        line_no
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SearchError::invalid_document(format!(
                "document {} has an empty title",
                self.id
            )));
        }
        Ok(())
    }
}

/// Validate a whole collection: every document on its own, and unique ids.
pub fn validate_all(documents: &[Document]) -> Result<()> {
    let mut seen = HashSet::new();
    for doc in documents {
        doc.validate()?;
        if !seen.insert(doc.id) {
            return Err(SearchError::invalid_document(format!(
                "duplicate document id {}",
                doc.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sonnet(id: DocId, title: &str) -> Document {
        Document::new(id, title, vec!["first line".to_string(), "second line".to_string()])
    }

    #[test]
    fn test_line_is_one_based() {
        let doc = sonnet(1, "Sonnet 1");
        assert_eq!(doc.line(1), Some("first line"));
        assert_eq!(doc.line(2), Some("second line"));
        assert_eq!(doc.line(0), None);
        assert_eq!(doc.line(3), None);
    }

    #[test]
    fn test_validate_all() {
        assert!(validate_all(&[sonnet(1, "Sonnet 1"), sonnet(2, "Sonnet 2")]).is_ok());

        let err = validate_all(&[sonnet(1, "Sonnet 1"), sonnet(1, "Sonnet 1 again")]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidDocument(_)));

        let err = validate_all(&[sonnet(3, "   ")]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidDocument(_)));
    }

    #[test]
    fn test_deserialize_requires_fields() {
        let doc: Document =
            serde_json::from_str(r#"{"id": 18, "title": "Sonnet 18", "lines": ["Shall I"]}"#).unwrap();
        assert_eq!(doc.id, 18);

        assert!(serde_json::from_str::<Document>(r#"{"id": 18, "lines": []}"#).is_err());
    }
}
