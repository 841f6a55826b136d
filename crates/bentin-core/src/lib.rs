//! # bentin-core: Pure Business Logic for Meu Bentin
//!
//! This crate is the heart of the Meu Bentin retail engine. It contains all
//! business logic as pure functions and owned value types with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Meu Bentin Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  UI layer (out of scope here)                 │ │
//! │  │   Inventory screen ─► Checkout ─► Dashboard ─► Toasts        │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │                  bentin-store (Domain Data Store)             │ │
//! │  │   owns Products / Sales / WorkingCapital, persists them       │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               ★ bentin-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌───────────┐ ┌─────┐ │ │
//! │  │  │  types  │ │  money  │ │ analytics │ │ validation│ │toast│ │ │
//! │  │  │ Product │ │  Money  │ │ low stock │ │   rules   │ │queue│ │ │
//! │  │  │  Sale   │ │ R$ fmt  │ │ revenue   │ │  checks   │ │     │ │ │
//! │  │  └─────────┘ └─────────┘ └───────────┘ └───────────┘ └─────┘ │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO NETWORK • NO PERSISTENCE • PURE FUNCTIONS        │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, WorkingCapital, drafts)
//! - [`money`] - Money type with integer arithmetic and BRL formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`analytics`] - Derived metrics computed from entity collections
//! - [`toast`] - Transient notification queue
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: persistence and network access live in bentin-store
//! 3. **Integer Money**: all monetary values are centavos (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bentin_core::money::Money;
//!
//! // Create money from centavos (never from floats!)
//! let price = Money::from_centavos(1050); // R$ 10,50
//!
//! // Display formatting uses the Brazilian convention
//! assert_eq!(price.format(), "R$ 10,50");
//!
//! // Lenient parsing of operator input
//! assert_eq!(Money::parse("10,50"), price);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analytics;
pub mod error;
pub mod money;
pub mod toast;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bentin_core::Money` instead of
// `use bentin_core::money::Money`

pub use analytics::AnalyticsSnapshot;
pub use error::ValidationError;
pub use money::Money;
pub use toast::{Toast, ToastQueue, ToastVariant};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default low-stock alert threshold.
///
/// A product whose quantity drops strictly below this value shows up in the
/// low-stock analytics list. Overridable per store via `StoreConfig`.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Maximum quantity of a single product on one sale line.
///
/// ## Business Reason
/// Prevents accidental over-selling (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum distinct lines allowed on a single sale.
///
/// ## Business Reason
/// Keeps checkout sizes reasonable for a single-counter store.
pub const MAX_SALE_LINES: usize = 100;

/// How long a toast stays visible before it expires, in milliseconds.
pub const TOAST_LIFETIME_MS: i64 = 5_000;
