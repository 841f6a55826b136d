//! # Local Snapshot Store
//!
//! File-backed persistence: one JSON array per collection under a base
//! directory.
//!
//! ## Layout
//! ```text
//! <data_dir>/
//!     produtos.json
//!     vendas.json
//!     capital_giro.json
//! ```
//!
//! Writes go through a temp file + rename so a crash mid-write never
//! truncates the last good snapshot. Each snapshot is size-bounded; an
//! oversized save is refused with a typed error instead of silently
//! filling the disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::{Collection, PersistenceAdapter};
use crate::config::DEFAULT_MAX_SNAPSHOT_BYTES;
use crate::error::{PersistenceError, PersistenceResult};

/// Local JSON snapshot store.
///
/// Synchronous filesystem I/O behind the async trait: snapshots are
/// small (bounded) and the store serializes its own mutations, so there
/// is nothing to win by spawning blocking tasks here.
#[derive(Debug, Clone)]
pub struct LocalSnapshotStore {
    base_dir: PathBuf,
    max_snapshot_bytes: usize,
}

impl LocalSnapshotStore {
    /// Creates a snapshot store rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created on the
    /// first save.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        LocalSnapshotStore {
            base_dir: base_dir.into(),
            max_snapshot_bytes: DEFAULT_MAX_SNAPSHOT_BYTES,
        }
    }

    /// Overrides the per-collection size bound.
    pub fn max_snapshot_bytes(mut self, bytes: usize) -> Self {
        self.max_snapshot_bytes = bytes;
        self
    }

    /// Returns the root directory of this store.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Snapshot file path for a collection.
    fn snapshot_path(&self, collection: Collection) -> PathBuf {
        self.base_dir.join(format!("{}.json", collection.table_name()))
    }
}

#[async_trait::async_trait]
impl PersistenceAdapter for LocalSnapshotStore {
    async fn load(&self, collection: Collection) -> PersistenceResult<Vec<Value>> {
        let path = self.snapshot_path(collection);

        if !path.exists() {
            debug!(collection = %collection, "No snapshot yet, loading empty");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&path)?;
        let records: Vec<Value> = serde_json::from_slice(&bytes)?;

        debug!(collection = %collection, count = records.len(), "Loaded snapshot");
        Ok(records)
    }

    async fn save(&self, collection: Collection, records: &[Value]) -> PersistenceResult<()> {
        let payload = serde_json::to_vec(records)?;

        if payload.len() > self.max_snapshot_bytes {
            return Err(PersistenceError::SnapshotTooLarge {
                collection: collection.table_name().to_string(),
                size: payload.len(),
                limit: self.max_snapshot_bytes,
            });
        }

        fs::create_dir_all(&self.base_dir)?;

        // Temp file + rename keeps the previous snapshot intact on crash
        let path = self.snapshot_path(collection);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &payload)?;
        fs::rename(&tmp, &path)?;

        debug!(
            collection = %collection,
            count = records.len(),
            bytes = payload.len(),
            "Saved snapshot"
        );
        Ok(())
    }

    async fn probe(&self) -> bool {
        // The local filesystem counts as reachable if the base dir is
        // usable (or creatable)
        self.base_dir.exists() || fs::create_dir_all(&self.base_dir).is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_missing_collection_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalSnapshotStore::new(dir.path());

        let records = store.load(Collection::Produtos).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalSnapshotStore::new(dir.path());

        let records = vec![json!({"id": "p1", "name": "Vestido"})];
        store.save(Collection::Produtos, &records).await.unwrap();

        let loaded = store.load(Collection::Produtos).await.unwrap();
        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn test_save_refuses_oversized_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalSnapshotStore::new(dir.path()).max_snapshot_bytes(16);

        let records = vec![json!({"id": "p1", "name": "Vestido Festa Longo"})];
        let err = store.save(Collection::Produtos, &records).await.unwrap_err();
        assert!(matches!(err, PersistenceError::SnapshotTooLarge { .. }));

        // The refused write must not have clobbered anything
        let loaded = store.load(Collection::Produtos).await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalSnapshotStore::new(dir.path());

        store
            .save(Collection::Produtos, &[json!({"id": "p1"})])
            .await
            .unwrap();
        store
            .save(Collection::Vendas, &[json!({"id": "s1"}), json!({"id": "s2"})])
            .await
            .unwrap();

        assert_eq!(store.load(Collection::Produtos).await.unwrap().len(), 1);
        assert_eq!(store.load(Collection::Vendas).await.unwrap().len(), 2);
        assert!(store.load(Collection::CapitalGiro).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_probe_is_true_for_usable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalSnapshotStore::new(dir.path().join("nested"));
        assert!(store.probe().await);
    }
}
