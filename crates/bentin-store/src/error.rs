//! # Store Error Types
//!
//! Error types for store operations and persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  reqwest / std::io / serde_json errors                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  PersistenceError (this module) ← adds collection context           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError ← what callers of the store see                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  UI shows field message (Validation) or toast (NotFound /           │
//! │  degraded mode); nothing here is fatal to the process               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use bentin_core::ValidationError;
use thiserror::Error;

// =============================================================================
// Persistence Error
// =============================================================================

/// Failures of the persistence adapters.
///
/// These wrap I/O, HTTP, and serialization errors with enough context
/// for the degraded-mode log line.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Local snapshot file could not be read or written.
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Remote table service was unreachable.
    #[error("Remote request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote table service answered with a non-success status.
    #[error("Remote rejected {collection}: HTTP {status}")]
    RemoteRejected { collection: String, status: u16 },

    /// A collection snapshot outgrew the local size bound.
    ///
    /// ## When This Occurs
    /// The local store mirrors a browser-local-storage-sized budget;
    /// refusing the write keeps the last good snapshot intact.
    #[error("Snapshot for {collection} is {size} bytes, limit is {limit}")]
    SnapshotTooLarge {
        collection: String,
        size: usize,
        limit: usize,
    },

    /// Records could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

// =============================================================================
// Store Error
// =============================================================================

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found for an update or delete.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Operator input violated a business rule; no state was touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence failed in a context where it cannot be degraded away
    /// (initial load with no local snapshot to fall back on).
    #[error("Persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for persistence adapter operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

// =============================================================================
// Unit Tests
// =============================================================================
