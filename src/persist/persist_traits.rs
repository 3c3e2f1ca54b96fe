use super::persist_errors::Result;

/// Contract for the persistence collaborator: whole-blob reads and writes
/// keyed by fixed names.
///
/// No partial updates, no schema version field, no migration path: a
/// missing or unparseable blob is treated as "use defaults" by the caller.
pub trait SnapshotStore: Send + Sync {
    /// Reads the blob for `key`, or `None` when absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrites the blob for `key` wholesale.
    fn write(&self, key: &str, payload: &str) -> Result<()>;
}
