//! Process-local state

use crate::{ConfigDocument, HeroSlide, Work};
use tokio::sync::RwLock;

use super::seed::seed_works;

/// In-memory copy of everything the API stores.
///
/// Each field is locked independently; racing writers are not ordered
/// relative to each other, the last one to take the lock wins.
#[derive(Default)]
pub struct MemoryState {
    works: RwLock<Vec<Work>>,
    config: RwLock<ConfigDocument>,
    hero_slides: RwLock<Vec<HeroSlide>>,
}

impl MemoryState {
    /// Empty state: no works, `{}` config, no slides
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose works list starts out as the seed dataset
    pub fn seeded() -> Self {
        Self {
            works: RwLock::new(seed_works()),
            ..Self::default()
        }
    }

    pub async fn works(&self) -> Vec<Work> {
        self.works.read().await.clone()
    }

    /// Replace the work with the same id in place, or append it
    pub async fn upsert_work(&self, work: Work) {
        let mut works = self.works.write().await;
        match works.iter_mut().find(|existing| existing.id == work.id) {
            Some(existing) => *existing = work,
            None => works.push(work),
        }
    }

    pub async fn config(&self) -> ConfigDocument {
        self.config.read().await.clone()
    }

    pub async fn set_config(&self, config: ConfigDocument) {
        *self.config.write().await = config;
    }

    pub async fn hero_slides(&self) -> Vec<HeroSlide> {
        self.hero_slides.read().await.clone()
    }

    pub async fn set_hero_slides(&self, slides: Vec<HeroSlide>) {
        *self.hero_slides.write().await = slides;
    }
}
