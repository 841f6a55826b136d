//! # Fallback Adapter
//!
//! Remote-first persistence with the local snapshot store as the last
//! known good copy.
//!
//! ## Failure Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       FallbackAdapter                               │
//! │                                                                     │
//! │  load(c):  remote ──ok──► mirror into local, serve remote rows      │
//! │               │                                                     │
//! │               └─fail──► serve last local snapshot, mark DEGRADED    │
//! │                                                                     │
//! │  save(c):  local first (last known good), then remote               │
//! │               remote fail ──► Ok(()) + DEGRADED, data kept locally  │
//! │                                                                     │
//! │  No retry loop: the next successful call clears the flag.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store reads [`PersistenceAdapter::is_degraded`] after each call to
//! decide whether a degraded-mode toast is due.

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use tracing::{debug, warn};

use super::{Collection, LocalSnapshotStore, PersistenceAdapter, RemoteTableStore};
use crate::error::PersistenceResult;

/// Remote table store with local snapshot fallback.
pub struct FallbackAdapter {
    remote: RemoteTableStore,
    local: LocalSnapshotStore,
    degraded: AtomicBool,
}

impl FallbackAdapter {
    /// Wraps a remote store with a local last-known-good mirror.
    pub fn new(remote: RemoteTableStore, local: LocalSnapshotStore) -> Self {
        FallbackAdapter {
            remote,
            local,
            degraded: AtomicBool::new(false),
        }
    }

    fn set_degraded(&self, degraded: bool) {
        self.degraded.store(degraded, Ordering::Relaxed);
    }
}

#[async_trait::async_trait]
impl PersistenceAdapter for FallbackAdapter {
    async fn load(&self, collection: Collection) -> PersistenceResult<Vec<Value>> {
        match self.remote.load(collection).await {
            Ok(records) => {
                self.set_degraded(false);

                // Mirror into the local snapshot so the fallback copy is
                // as fresh as the last successful remote read
                if let Err(err) = self.local.save(collection, &records).await {
                    warn!(collection = %collection, error = %err, "Could not mirror snapshot locally");
                }

                Ok(records)
            }
            Err(err) => {
                warn!(
                    collection = %collection,
                    error = %err,
                    "Remote load failed, serving local snapshot"
                );
                self.set_degraded(true);
                self.local.load(collection).await
            }
        }
    }

    async fn save(&self, collection: Collection, records: &[Value]) -> PersistenceResult<()> {
        // Local first: whatever happens remotely, the last known good
        // snapshot reflects this mutation
        self.local.save(collection, records).await?;

        match self.remote.save(collection, records).await {
            Ok(()) => {
                self.set_degraded(false);
                Ok(())
            }
            Err(err) => {
                warn!(
                    collection = %collection,
                    error = %err,
                    "Remote save failed, data kept in local snapshot"
                );
                self.set_degraded(true);
                // Degraded, not failed: the mutation is durable locally
                Ok(())
            }
        }
    }

    async fn probe(&self) -> bool {
        let reachable = self.remote.probe().await;
        debug!(reachable, "Remote connectivity probe");
        reachable
    }

    fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
