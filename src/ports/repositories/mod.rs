mod document_collection;

pub use document_collection::{Document, DocumentCollection};
