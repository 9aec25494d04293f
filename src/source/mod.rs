// Document source collaborators
//
// This module materializes glossary documents from their storage location so
// the pure parser never touches I/O itself.

pub mod fetcher;

pub use fetcher::{fetch_document, load_glossary};
