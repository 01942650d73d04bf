//! Snapshot of the documents known to the caller.

use indexmap::IndexMap;

use super::document::Document;
use crate::parser::SyntaxError;

/// An insertion-ordered snapshot `uri → Document`.
///
/// This is the explicit workspace context handed to every cross-file
/// operation. Iteration order is insertion order, so multi-document results
/// are deterministic for a given snapshot.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    documents: IndexMap<String, Document>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content of a document, parsing it and storing the result.
    ///
    /// Returns parse errors if any.
    pub fn set_file_content(&mut self, uri: &str, content: &str) -> Vec<SyntaxError> {
        let document = Document::new(uri, content);
        let errors = document.syntax_errors().to_vec();
        self.documents.insert(uri.to_string(), document);
        errors
    }

    /// Insert a pre-built document, replacing any previous one with its URI.
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.uri().to_string(), document)
    }

    pub fn remove(&mut self, uri: &str) -> Option<Document> {
        self.documents.shift_remove(uri)
    }

    pub fn get(&self, uri: &str) -> Option<&Document> {
        self.documents.get(uri)
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.documents.contains_key(uri)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut set = Self::new();
        for document in iter {
            set.insert(document);
        }
        set
    }
}
