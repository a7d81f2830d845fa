//! Documents and document loading.
//!
//! A [`Document`] is immutable once created. The index takes ownership of
//! every document it is given; loaders only produce them.

use serde::{Deserialize, Serialize};

pub mod csv;

/// Identifier of a document inside an index.
pub type DocId = i64;

/// A single document: integer ID, title, opaque date string and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    /// Free-form date; never parsed or validated.
    pub date: String,
    pub content: String,
}

impl Document {
    /// Create a new document.
    pub fn new<T, D, C>(id: DocId, title: T, date: D, content: C) -> Self
    where
        T: Into<String>,
        D: Into<String>,
        C: Into<String>,
    {
        Document {
            id,
            title: title.into(),
            date: date.into(),
            content: content.into(),
        }
    }

    /// Text that is tokenized for indexing: title, a separator, then content.
    pub fn indexed_text(&self) -> String {
        format!("{} {}", self.title, self.content)
    }
}
