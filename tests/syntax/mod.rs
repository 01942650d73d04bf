//! Document and document-set tests

pub mod tests_documents;
