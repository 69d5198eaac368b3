//! SIMR Types - Pure type definitions shared by the store and the HTTP layer
//!
//! Nothing in here performs I/O; the crate only depends on serde.

pub mod outcome;
pub mod response;
pub mod work;

pub use outcome::*;
pub use response::*;
pub use work::*;

use serde_json::{Map, Value};

/// The global configuration blob. Untyped; replaced wholesale on write.
pub type ConfigDocument = Map<String, Value>;

/// A single homepage slide. Untyped apart from the optional `id` field.
pub type HeroSlide = Map<String, Value>;
