//! Record store used when the remote store is unavailable

use crate::ports::RecordStore;
use crate::{ConfigDocument, HeroSlide, Result, SaveOutcome, StoreMode, Work, WorkWrite};
use async_trait::async_trait;
use tracing::debug;

use super::MemoryState;

/// Keeps everything in process memory. Writes never fail.
pub struct LocalStore {
    memory: MemoryState,
}

impl LocalStore {
    /// A store whose works list starts with the seed dataset
    pub fn new() -> Self {
        Self {
            memory: MemoryState::seeded(),
        }
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for LocalStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Local
    }

    async fn read_works(&self) -> Vec<Work> {
        self.memory.works().await
    }

    async fn write_work(&self, work: &Work) -> Result<WorkWrite> {
        debug!("Storing work {} in memory", work.id);
        self.memory.upsert_work(work.clone()).await;
        Ok(WorkWrite::Mock)
    }

    async fn read_config(&self) -> ConfigDocument {
        self.memory.config().await
    }

    async fn write_config(&self, config: ConfigDocument) -> SaveOutcome {
        self.memory.set_config(config).await;
        SaveOutcome::Memory
    }

    async fn read_hero_slides(&self) -> Vec<HeroSlide> {
        self.memory.hero_slides().await
    }

    async fn write_hero_slides(&self, slides: Vec<HeroSlide>) -> SaveOutcome {
        self.memory.set_hero_slides(slides).await;
        SaveOutcome::Memory
    }
}
