use std::collections::HashMap;
use std::sync::Mutex;

use super::persist_errors::Result;
use super::persist_traits::SnapshotStore;

/// In-memory snapshot store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a blob, e.g. to simulate a previous session.
    pub fn seed(&self, key: &str, payload: &str) {
        self.blobs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), payload.to_string());
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn read(&self, key: &str) -> Option<String> {
        self.blobs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.blobs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
