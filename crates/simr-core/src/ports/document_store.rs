//! Collection-level operations of a schemaless document database

use crate::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A stored document: its key within the collection plus its fields
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

/// One operation inside an atomic commit
#[derive(Debug, Clone, PartialEq)]
pub enum BatchWrite {
    /// Create or overwrite the whole document
    Set {
        collection: String,
        id: String,
        fields: Map<String, Value>,
    },
    Delete {
        collection: String,
        id: String,
    },
}

/// Remote document store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document of a collection, in whatever order the store yields them
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>>;

    /// Ids of every document of a collection, including documents that only
    /// exist as parents of subcollections
    async fn list_document_ids(&self, collection: &str) -> Result<Vec<String>>;

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Overwrite (or create) a document with exactly `fields`
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<()>;

    /// Apply all writes atomically: either every write lands or none does
    async fn commit(&self, writes: Vec<BatchWrite>) -> Result<()>;
}
