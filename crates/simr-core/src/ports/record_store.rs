//! The record store adapter seen by the HTTP handlers

use crate::{ConfigDocument, HeroSlide, Result, SaveOutcome, StoreMode, Work, WorkWrite};
use async_trait::async_trait;

/// Uniform read/write contract over the remote store and process memory.
///
/// Reads never fail: remote errors degrade to memory or seed data. Only
/// `write_work` can surface an error to the caller.
#[async_trait]
pub trait RecordStore: Send + Sync {
    fn mode(&self) -> StoreMode;

    async fn read_works(&self) -> Vec<Work>;

    async fn write_work(&self, work: &Work) -> Result<WorkWrite>;

    async fn read_config(&self) -> ConfigDocument;

    /// Memory is updated before any remote write is attempted
    async fn write_config(&self, config: ConfigDocument) -> SaveOutcome;

    async fn read_hero_slides(&self) -> Vec<HeroSlide>;

    /// Replaces the whole slide list, never appends
    async fn write_hero_slides(&self, slides: Vec<HeroSlide>) -> SaveOutcome;
}
