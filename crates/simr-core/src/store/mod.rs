//! Record store variants
//!
//! `RemoteStore` talks to a `DocumentStore` and keeps a `MemoryState` as its
//! fallback. `LocalStore` is used when no remote store could be set up.

pub mod local;
pub mod memory;
pub mod remote;
pub mod seed;

pub use local::LocalStore;
pub use memory::MemoryState;
pub use remote::RemoteStore;
pub use seed::seed_works;
