use std::fs;
use std::path::PathBuf;

use super::persist_errors::Result;
use super::persist_traits::SnapshotStore;

/// Filesystem-backed snapshot store: one `<key>.json` file per blob under a
/// base directory. Last write wins; there is no conflict resolution between
/// independent processes.
pub struct FsSnapshotStore {
    base_dir: PathBuf,
}

impl FsSnapshotStore {
    /// Creates the store, creating the base directory if needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.blob_path(key)).ok()
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        fs::write(self.blob_path(key), payload)?;
        Ok(())
    }
}
