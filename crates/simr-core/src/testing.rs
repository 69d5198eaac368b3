//! In-memory `DocumentStore` for tests
//!
//! Reads and writes can be switched to fail independently, which lets tests
//! exercise every fallback path of `RemoteStore` without a network.

use crate::ports::{BatchWrite, Document, DocumentStore};
use crate::{Result, SimrError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

type Collections = BTreeMap<String, BTreeMap<String, Map<String, Value>>>;

/// Documents are listed in key order, like Firestore does.
#[derive(Default)]
pub struct ScriptedDocumentStore {
    collections: RwLock<Collections>,
    batches: RwLock<Vec<Vec<BatchWrite>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl ScriptedDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every list/get call fail until switched back
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every set/commit call fail until switched back
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Seed a document directly, bypassing the failure switches
    pub async fn insert(&self, collection: &str, id: &str, fields: Map<String, Value>) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
    }

    /// Current contents of a collection, bypassing the failure switches
    pub async fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every batch that was committed successfully, in order
    pub async fn committed_batches(&self) -> Vec<Vec<BatchWrite>> {
        self.batches.read().await.clone()
    }

    fn check_reads(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(SimrError::Transport("scripted read failure".to_string()));
        }
        Ok(())
    }

    fn check_writes(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SimrError::Remote("scripted write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for ScriptedDocumentStore {
    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>> {
        self.check_reads()?;
        Ok(self.documents(collection).await)
    }

    async fn list_document_ids(&self, collection: &str) -> Result<Vec<String>> {
        self.check_reads()?;
        Ok(self
            .documents(collection)
            .await
            .into_iter()
            .map(|doc| doc.id)
            .collect())
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        self.check_reads()?;
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document {
                id: id.to_string(),
                fields: fields.clone(),
            }))
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<()> {
        self.check_writes()?;
        self.insert(collection, id, fields.clone()).await;
        Ok(())
    }

    async fn commit(&self, writes: Vec<BatchWrite>) -> Result<()> {
        self.check_writes()?;

        let mut collections = self.collections.write().await;
        for write in &writes {
            match write {
                BatchWrite::Set {
                    collection,
                    id,
                    fields,
                } => {
                    collections
                        .entry(collection.clone())
                        .or_default()
                        .insert(id.clone(), fields.clone());
                }
                BatchWrite::Delete { collection, id } => {
                    if let Some(docs) = collections.get_mut(collection) {
                        docs.remove(id);
                    }
                }
            }
        }
        drop(collections);

        self.batches.write().await.push(writes);
        Ok(())
    }
}
