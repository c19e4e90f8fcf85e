use crate::document::{DocId, Document};
use crate::error::{Result, SearchError};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A document as stored on disk; the id may be left to the title.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    id: Option<DocId>,
    title: Option<String>,
    lines: Option<Vec<String>>,
}

impl RawDocument {
    fn into_document(self, position: usize) -> Result<Document> {
        let title = self.title.ok_or_else(|| {
            SearchError::invalid_document(format!("record {} is missing 'title'", position))
        })?;
        let lines = self.lines.ok_or_else(|| {
            SearchError::invalid_document(format!("record {} is missing 'lines'", position))
        })?;

        let id = match self.id {
            Some(id) => id,
            None => id_from_title(&title).ok_or_else(|| {
                SearchError::invalid_document(format!(
                    "record {} has no 'id' and none can be read from title '{}'",
                    position, title
                ))
            })?,
        };

        Ok(Document::new(id, title, lines))
    }
}

/// Read the number out of a title like "Sonnet 18: Shall I compare thee".
pub fn id_from_title(title: &str) -> Option<DocId> {
    title
        .split_whitespace()
        .nth(1)
        .map(|part| part.trim_end_matches(':'))
        .and_then(|number| number.parse().ok())
}

/// Load documents from a JSON array, gzip-compressed if the path ends in `.gz`.
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let docs = parse_documents(BufReader::new(reader))?;
    tracing::info!(path = %path.display(), documents = docs.len(), "Loaded documents");
    Ok(docs)
}

/// Parse a JSON array of document records.
pub fn parse_documents<R: Read>(reader: R) -> Result<Vec<Document>> {
    let raw: Vec<RawDocument> = serde_json::from_reader(reader)?;
    raw.into_iter()
        .enumerate()
        .map(|(position, doc)| doc.into_document(position))
        .collect()
}
