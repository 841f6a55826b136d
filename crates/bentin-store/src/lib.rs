//! # bentin-store: Domain Data Store for Meu Bentin
//!
//! This crate owns the mutable domain state (products, sales, working
//! capital) and persists it through interchangeable adapters.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Meu Bentin Data Flow                           │
//! │                                                                     │
//! │  UI interaction (create product, checkout, ...)                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   bentin-store (THIS CRATE)                   │ │
//! │  │                                                               │ │
//! │  │   ┌────────────┐   ┌──────────────────┐   ┌───────────────┐  │ │
//! │  │   │   Store    │   │ PersistenceAdapter│  │  StoreConfig  │  │ │
//! │  │   │ (store.rs) │──►│  local / remote /│   │  (config.rs)  │  │ │
//! │  │   │            │   │  fallback        │   │               │  │ │
//! │  │   └────────────┘   └──────────────────┘   └───────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                               │                             │
//! │       ▼                               ▼                             │
//! │  JSON snapshot files          Hosted table service (HTTPS)          │
//! │  <data_dir>/produtos.json     /rest/v1/produtos, /vendas, ...       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The domain data store (validate, mutate, persist)
//! - [`adapter`] - Persistence adapter trait and implementations
//! - [`config`] - Store configuration
//! - [`error`] - Store and persistence error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bentin_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::new("./data").low_stock_threshold(3);
//! let mut store = Store::open(config).await?;
//!
//! let product = store.create_product(draft).await?;
//! let snapshot = store.analytics_now();
//! store.close().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod adapter;
pub mod config;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use adapter::{Collection, FallbackAdapter, LocalSnapshotStore, PersistenceAdapter, RemoteTableStore};
pub use config::{RemoteConfig, StoreConfig};
pub use error::{PersistenceError, StoreError};
pub use store::Store;
