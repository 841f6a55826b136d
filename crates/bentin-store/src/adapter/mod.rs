//! # Persistence Adapters
//!
//! The seam between the domain data store and whatever actually holds the
//! bytes.
//!
//! ## Adapter Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    PersistenceAdapter trait                         │
//! │                                                                     │
//! │   load(collection)  ─► Vec<serde_json::Value>                       │
//! │   save(collection, records)                                         │
//! │   probe()           ─► connectivity check                           │
//! │                                                                     │
//! │   ┌──────────────────┐ ┌──────────────────┐ ┌───────────────────┐   │
//! │   │LocalSnapshotStore│ │ RemoteTableStore │ │  FallbackAdapter  │   │
//! │   │ JSON file per    │ │ HTTPS table      │ │ remote first,     │   │
//! │   │ collection,      │ │ service          │ │ local snapshot on │   │
//! │   │ size-bounded     │ │ (PostgREST-style)│ │ failure (degraded)│   │
//! │   └──────────────────┘ └──────────────────┘ └───────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records cross the seam as raw `serde_json::Value`s so one adapter
//! serves every collection; the store owns the typed encode/decode.

pub mod fallback;
pub mod local;
pub mod remote;

pub use fallback::FallbackAdapter;
pub use local::LocalSnapshotStore;
pub use remote::RemoteTableStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::PersistenceResult;

// =============================================================================
// Collections
// =============================================================================

/// The persisted collections, named after the hosted backend tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Products (`produtos` table).
    Produtos,
    /// Sales (`vendas` table).
    Vendas,
    /// Working capital (`capital_giro` table).
    CapitalGiro,
}

impl Collection {
    /// Every collection, in persistence order.
    pub const ALL: [Collection; 3] = [
        Collection::Produtos,
        Collection::Vendas,
        Collection::CapitalGiro,
    ];

    /// Backend table name / snapshot file stem.
    pub const fn table_name(&self) -> &'static str {
        match self {
            Collection::Produtos => "produtos",
            Collection::Vendas => "vendas",
            Collection::CapitalGiro => "capital_giro",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

// =============================================================================
// Adapter Trait
// =============================================================================

/// Abstraction over the storage backends.
///
/// Implementations must be `Send + Sync` so the store can hold a boxed
/// adapter across await points.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Loads every record of a collection.
    ///
    /// A collection that was never saved loads as an empty vec, not an
    /// error.
    async fn load(&self, collection: Collection) -> PersistenceResult<Vec<Value>>;

    /// Replaces a collection with the given records.
    ///
    /// Whole-collection replace, last write wins; there is no version
    /// check (single-operator constraint, see DESIGN.md).
    async fn save(&self, collection: Collection, records: &[Value]) -> PersistenceResult<()>;

    /// Connectivity probe. Local backends are always reachable.
    async fn probe(&self) -> bool;

    /// Whether the adapter is currently serving fallback data.
    ///
    /// Only the fallback adapter ever reports `true`.
    fn is_degraded(&self) -> bool {
        false
    }
}

// =============================================================================
// Encode / Decode Helpers
// =============================================================================

/// Encodes typed entities into adapter records.
pub fn encode_records<T: Serialize>(items: &[T]) -> PersistenceResult<Vec<Value>> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(Into::into))
        .collect()
}

/// Decodes adapter records into typed entities.
pub fn decode_records<T: DeserializeOwned>(records: Vec<Value>) -> PersistenceResult<Vec<T>> {
    records
        .into_iter()
        .map(|record| serde_json::from_value(record).map_err(Into::into))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(Collection::Produtos.table_name(), "produtos");
        assert_eq!(Collection::Vendas.table_name(), "vendas");
        assert_eq!(Collection::CapitalGiro.table_name(), "capital_giro");
    }

    #[test]
    fn test_encode_decode_round_trip() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Row {
            id: String,
            n: i64,
        }

        let rows = vec![Row {
            id: "a".to_string(),
            n: 7,
        }];
        let encoded = encode_records(&rows).unwrap();
        let decoded: Vec<Row> = decode_records(encoded).unwrap();
        assert_eq!(decoded, rows);
    }
}
