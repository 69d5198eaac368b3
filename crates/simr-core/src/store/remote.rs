//! Record store backed by a remote document store
//!
//! Reads that fail fall back to memory (config, slides) or to the seed
//! dataset (works). Config and slide writes always land in memory first so
//! a later read still sees them if the remote write fails. Work writes have
//! no fallback and report the remote error to the caller.

use crate::ports::{BatchWrite, Document, DocumentStore, RecordStore};
use crate::{
    ConfigDocument, HeroSlide, Result, SaveOutcome, SimrError, StoreMode, Work, WorkWrite,
    GLOBAL_CONFIG_DOCUMENT, HERO_SLIDES_COLLECTION, SETTINGS_COLLECTION, WORKS_COLLECTION,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::seed::seed_works;
use super::MemoryState;

pub struct RemoteStore {
    documents: Arc<dyn DocumentStore>,
    memory: MemoryState,
}

impl RemoteStore {
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self {
            documents,
            memory: MemoryState::new(),
        }
    }

    async fn fetch_works(&self) -> Result<Vec<Work>> {
        self.documents
            .list_documents(WORKS_COLLECTION)
            .await?
            .into_iter()
            .map(decode_work)
            .collect()
    }

    async fn fetch_config(&self) -> Result<Option<ConfigDocument>> {
        let doc = self
            .documents
            .get_document(SETTINGS_COLLECTION, GLOBAL_CONFIG_DOCUMENT)
            .await?;
        Ok(doc.map(|d| d.fields))
    }

    async fn fetch_hero_slides(&self) -> Result<Vec<HeroSlide>> {
        let docs = self.documents.list_documents(HERO_SLIDES_COLLECTION).await?;
        Ok(docs.into_iter().map(|d| d.fields).collect())
    }

    async fn replace_hero_slides(&self, slides: &[HeroSlide]) -> Result<()> {
        let existing = self
            .documents
            .list_document_ids(HERO_SLIDES_COLLECTION)
            .await?;
        let writes = replacement_writes(existing, slides);
        debug!("Committing {} hero slide writes", writes.len());
        self.documents.commit(writes).await
    }
}

#[async_trait]
impl RecordStore for RemoteStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Remote
    }

    async fn read_works(&self) -> Vec<Work> {
        match self.fetch_works().await {
            Ok(works) => works,
            Err(e) => {
                warn!("Failed to read works from remote store, serving seed data: {}", e);
                seed_works()
            }
        }
    }

    async fn write_work(&self, work: &Work) -> Result<WorkWrite> {
        let fields = match serde_json::to_value(work)? {
            Value::Object(fields) => fields,
            other => {
                return Err(SimrError::Serialization(format!(
                    "work encoded as non-object: {}",
                    other
                )))
            }
        };

        if let Err(e) = self
            .documents
            .set_document(WORKS_COLLECTION, &work.id, &fields)
            .await
        {
            error!("Failed to write work {}: {}", work.id, e);
            return Err(e);
        }

        info!("Work {} written to remote store", work.id);
        Ok(WorkWrite::Persisted)
    }

    async fn read_config(&self) -> ConfigDocument {
        match self.fetch_config().await {
            Ok(Some(config)) => return config,
            Ok(None) => debug!("No remote config document, serving memory"),
            Err(e) => warn!("Failed to read config from remote store: {}", e),
        }
        self.memory.config().await
    }

    async fn write_config(&self, config: ConfigDocument) -> SaveOutcome {
        self.memory.set_config(config.clone()).await;

        match self
            .documents
            .set_document(SETTINGS_COLLECTION, GLOBAL_CONFIG_DOCUMENT, &config)
            .await
        {
            Ok(()) => SaveOutcome::Remote,
            Err(e) => {
                warn!("Failed to write config to remote store: {}", e);
                SaveOutcome::MemoryAfterRemoteFailure
            }
        }
    }

    async fn read_hero_slides(&self) -> Vec<HeroSlide> {
        match self.fetch_hero_slides().await {
            Ok(slides) => slides,
            Err(e) => {
                warn!("Failed to read hero slides from remote store: {}", e);
                self.memory.hero_slides().await
            }
        }
    }

    async fn write_hero_slides(&self, slides: Vec<HeroSlide>) -> SaveOutcome {
        self.memory.set_hero_slides(slides.clone()).await;

        match self.replace_hero_slides(&slides).await {
            Ok(()) => SaveOutcome::Remote,
            Err(e) => {
                warn!("Failed to replace hero slides in remote store: {}", e);
                SaveOutcome::MemoryAfterRemoteFailure
            }
        }
    }
}

/// The document id stored in the work's fields is ignored; the key wins.
fn decode_work(doc: Document) -> Result<Work> {
    let Document { id, mut fields } = doc;
    fields.insert("id".to_string(), Value::String(id.clone()));
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| SimrError::Decode(format!("{}/{}: {}", WORKS_COLLECTION, id, e)))
}

/// Document id for a slide: its own `id` when usable, else `slide_<index>`
pub fn slide_document_id(slide: &HeroSlide, index: usize) -> String {
    match slide.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("slide_{}", index),
    }
}

/// Writes that turn the collection holding `existing` into exactly `slides`.
///
/// Stale documents are deleted; documents that get re-set are not, since a
/// set already replaces them wholesale. A repeated id keeps the last slide.
pub fn replacement_writes(existing: Vec<String>, slides: &[HeroSlide]) -> Vec<BatchWrite> {
    let mut targets: Vec<(String, HeroSlide)> = Vec::with_capacity(slides.len());
    for (index, slide) in slides.iter().enumerate() {
        let id = slide_document_id(slide, index);
        match targets.iter_mut().find(|(existing_id, _)| *existing_id == id) {
            Some(target) => target.1 = slide.clone(),
            None => targets.push((id, slide.clone())),
        }
    }

    let mut writes: Vec<BatchWrite> = existing
        .into_iter()
        .filter(|id| !targets.iter().any(|(target_id, _)| target_id == id))
        .map(|id| BatchWrite::Delete {
            collection: HERO_SLIDES_COLLECTION.to_string(),
            id,
        })
        .collect();

    writes.extend(targets.into_iter().map(|(id, fields)| BatchWrite::Set {
        collection: HERO_SLIDES_COLLECTION.to_string(),
        id,
        fields,
    }));

    writes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedDocumentStore;
    use serde_json::json;

    fn object(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn remote() -> (Arc<ScriptedDocumentStore>, RemoteStore) {
        let documents = Arc::new(ScriptedDocumentStore::new());
        let store = RemoteStore::new(documents.clone());
        (documents, store)
    }

    fn sample_work() -> Work {
        Work::new("TRB-100", "Epilepsia refractaria", "Dr. Luis Soto (R3)", "Trabajo Original", "Neurología", "Aceptado")
    }

    #[tokio::test]
    async fn test_works_round_trip() {
        let (_, store) = remote();
        let work = sample_work();

        assert_eq!(store.write_work(&work).await.unwrap(), WorkWrite::Persisted);
        assert_eq!(store.read_works().await, vec![work]);
    }

    #[tokio::test]
    async fn test_document_key_overrides_id_field() {
        let (documents, store) = remote();
        let mut fields = object(serde_json::to_value(sample_work()).unwrap());
        fields.insert("id".to_string(), json!("stale"));
        documents.insert(WORKS_COLLECTION, "TRB-100", fields).await;

        let works = store.read_works().await;
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].id, "TRB-100");
    }

    #[tokio::test]
    async fn test_malformed_work_falls_back_to_seed() {
        let (documents, store) = remote();
        documents
            .insert(WORKS_COLLECTION, "broken", object(json!({"title": "only a title"})))
            .await;

        assert_eq!(store.read_works().await, seed_works());
    }

    #[tokio::test]
    async fn test_unreachable_works_fall_back_to_seed() {
        let (documents, store) = remote();
        store.write_work(&sample_work()).await.unwrap();
        documents.fail_reads(true);

        assert_eq!(store.read_works().await, seed_works());
    }

    #[tokio::test]
    async fn test_work_write_failure_is_surfaced() {
        let (documents, store) = remote();
        documents.fail_writes(true);

        let err = store.write_work(&sample_work()).await.unwrap_err();
        assert!(matches!(err, SimrError::Remote(_)));
    }

    #[tokio::test]
    async fn test_config_prefers_remote_document() {
        let (documents, store) = remote();
        documents
            .insert(SETTINGS_COLLECTION, GLOBAL_CONFIG_DOCUMENT, object(json!({"theme": "light"})))
            .await;

        assert_eq!(store.read_config().await, object(json!({"theme": "light"})));
    }

    #[tokio::test]
    async fn test_config_missing_document_serves_memory() {
        let (_, store) = remote();
        assert!(store.read_config().await.is_empty());
    }

    #[tokio::test]
    async fn test_config_write_survives_remote_failure() {
        let (documents, store) = remote();
        documents.fail_writes(true);

        let outcome = store.write_config(object(json!({"theme": "dark"}))).await;
        assert_eq!(outcome, SaveOutcome::MemoryAfterRemoteFailure);

        documents.fail_reads(true);
        assert_eq!(store.read_config().await, object(json!({"theme": "dark"})));
    }

    #[tokio::test]
    async fn test_config_write_reaches_remote() {
        let (documents, store) = remote();

        let outcome = store.write_config(object(json!({"theme": "dark"}))).await;
        assert_eq!(outcome, SaveOutcome::Remote);

        let stored = documents.documents(SETTINGS_COLLECTION).await;
        assert_eq!(stored[0].id, GLOBAL_CONFIG_DOCUMENT);
        assert_eq!(stored[0].fields, object(json!({"theme": "dark"})));
    }

    #[tokio::test]
    async fn test_slides_replace_collection_in_one_commit() {
        let (documents, store) = remote();
        documents
            .insert(HERO_SLIDES_COLLECTION, "old", object(json!({"id": "old"})))
            .await;

        let slides = vec![object(json!({"id": "a"})), object(json!({"id": "b"}))];
        assert_eq!(store.write_hero_slides(slides.clone()).await, SaveOutcome::Remote);

        assert_eq!(documents.committed_batches().await.len(), 1);
        let mut read = store.read_hero_slides().await;
        read.sort_by_key(|s| s["id"].as_str().map(str::to_string));
        assert_eq!(read, slides);
    }

    #[tokio::test]
    async fn test_empty_slide_list_clears_collection() {
        let (documents, store) = remote();
        store
            .write_hero_slides(vec![object(json!({"id": "a"}))])
            .await;

        assert_eq!(store.write_hero_slides(Vec::new()).await, SaveOutcome::Remote);
        assert!(store.read_hero_slides().await.is_empty());
        assert!(documents.documents(HERO_SLIDES_COLLECTION).await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_slide_commit_leaves_remote_untouched() {
        let (documents, store) = remote();
        documents
            .insert(HERO_SLIDES_COLLECTION, "keep", object(json!({"id": "keep"})))
            .await;
        documents.fail_writes(true);

        let slides = vec![object(json!({"title": "Nuevo"}))];
        assert_eq!(
            store.write_hero_slides(slides.clone()).await,
            SaveOutcome::MemoryAfterRemoteFailure
        );

        let remote_ids: Vec<String> = documents
            .documents(HERO_SLIDES_COLLECTION)
            .await
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(remote_ids, vec!["keep".to_string()]);

        documents.fail_reads(true);
        assert_eq!(store.read_hero_slides().await, slides);
    }

    #[test]
    fn test_replacement_writes_delete_before_set() {
        let writes = replacement_writes(
            vec!["old-1".to_string(), "old-2".to_string()],
            &[object(json!({"id": "new"}))],
        );

        let kinds: Vec<(&str, &str)> = writes
            .iter()
            .map(|write| match write {
                BatchWrite::Delete { id, .. } => ("delete", id.as_str()),
                BatchWrite::Set { id, .. } => ("set", id.as_str()),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![("delete", "old-1"), ("delete", "old-2"), ("set", "new")]
        );
    }

    #[test]
    fn test_slide_document_ids() {
        assert_eq!(slide_document_id(&object(json!({"id": "hero"})), 3), "hero");
        assert_eq!(slide_document_id(&object(json!({"id": 7})), 3), "7");
        assert_eq!(slide_document_id(&object(json!({"id": ""})), 3), "slide_3");
        assert_eq!(slide_document_id(&object(json!({"title": "x"})), 0), "slide_0");
    }

    #[test]
    fn test_replacement_writes_skip_redundant_deletes() {
        let existing = vec!["a".to_string(), "stale".to_string()];
        let slides = vec![
            object(json!({"id": "a", "v": 1})),
            object(json!({"v": 2})),
            object(json!({"id": "a", "v": 3})),
        ];

        let writes = replacement_writes(existing, &slides);

        assert_eq!(
            writes,
            vec![
                BatchWrite::Delete {
                    collection: HERO_SLIDES_COLLECTION.to_string(),
                    id: "stale".to_string(),
                },
                BatchWrite::Set {
                    collection: HERO_SLIDES_COLLECTION.to_string(),
                    id: "a".to_string(),
                    fields: object(json!({"id": "a", "v": 3})),
                },
                BatchWrite::Set {
                    collection: HERO_SLIDES_COLLECTION.to_string(),
                    id: "slide_1".to_string(),
                    fields: object(json!({"v": 2})),
                },
            ]
        );
    }
}
