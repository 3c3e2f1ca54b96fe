//! Persistence module - best-effort blob mirroring of store state.
//!
//! Three independently-keyed blobs (user+wallet, catalog, order history)
//! are read once at startup and overwritten wholesale after every mutation
//! to the owning entity. Writes are fire-and-forget: a failure is logged
//! and never surfaced to the store's callers, and checkout success never
//! depends on a write landing.

mod persist_errors;
mod persist_fs;
mod persist_memory;
mod persist_traits;

#[cfg(test)]
mod persist_tests;

// Re-export the public interface
pub use persist_errors::{PersistError, Result};
pub use persist_fs::FsSnapshotStore;
pub use persist_memory::MemorySnapshotStore;
pub use persist_traits::SnapshotStore;
