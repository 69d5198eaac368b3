//! SIMR Core Library
//!
//! Domain logic for the SIMR 2026 API: the persistence ports, the seed
//! dataset, and the two record store variants (remote with memory fallback,
//! and purely local).

// Re-export pure types from simr-types
pub use simr_types::*;

pub mod error;
pub mod ports;
pub mod store;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use error::{Result, SimrError};
pub use ports::{BatchWrite, Document, DocumentStore, RecordStore};
pub use store::{LocalStore, MemoryState, RemoteStore};

/// Collection holding one document per work, keyed by work id
pub const WORKS_COLLECTION: &str = "works";
/// Collection holding the singleton configuration document
pub const SETTINGS_COLLECTION: &str = "settings";
/// Document id of the singleton configuration
pub const GLOBAL_CONFIG_DOCUMENT: &str = "global_config";
/// Collection holding one document per hero slide
pub const HERO_SLIDES_COLLECTION: &str = "hero_slides";
