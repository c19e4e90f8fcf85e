// Re-export main components
pub mod api;
pub mod document;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod index;
pub mod loader;
pub mod render;
pub mod result;
pub mod stemmer;
pub mod tokenizer;

// Re-export commonly used types
pub use document::{DocId, Document};
pub use engine::{SearchMode, Searcher};
pub use error::{Result, SearchError};
pub use highlight::{highlight, HighlightMode};
pub use index::InvertedIndex;
pub use result::{LineMatch, SearchResult, Span};
pub use stemmer::{normalize, stem};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
