//! Port traits (interfaces) for dependency injection

pub mod document_store;
pub mod record_store;

pub use document_store::{BatchWrite, Document, DocumentStore};
pub use record_store::RecordStore;
