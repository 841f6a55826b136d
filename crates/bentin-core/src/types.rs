//! # Domain Types
//!
//! Core domain types used throughout Meu Bentin.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐  ┌────────────────┐  ┌──────────────────────┐  │
//! │  │    Product     │  │      Sale      │  │   WorkingCapital     │  │
//! │  │  ────────────  │  │  ────────────  │  │  ──────────────────  │  │
//! │  │  id (UUID)     │  │  id (UUID)     │  │  id (UUID)           │  │
//! │  │  name          │  │  lines[]       │  │  initial_centavos    │  │
//! │  │  category      │  │  subtotal      │  │  configured_at       │  │
//! │  │  price/cost    │  │  discount      │  │  history[] (append)  │  │
//! │  │  quantity      │  │  total         │  │                      │  │
//! │  └────────────────┘  └────────────────┘  └──────────────────────┘  │
//! │                                                                     │
//! │  Drafts carry operator input INTO the store; entities come OUT.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Sale lines freeze the product name and unit price at sale time, so the
//! sales history stays truthful when products are renamed or repriced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A sellable inventory item.
///
/// ## Invariants
/// - `quantity >= 0`
/// - `price_centavos > 0`
/// - `cost_centavos >= 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in inventory and on sale lines.
    pub name: String,

    /// Category used by inventory filters and analytics.
    pub category: String,

    /// Acquisition cost in centavos.
    pub cost_centavos: i64,

    /// Selling price in centavos.
    pub price_centavos: i64,

    /// Quantity on hand.
    pub quantity: i64,

    /// Optional image reference (URL or asset path).
    pub image_url: Option<String>,

    /// Optional size attribute (e.g., "P", "M", "G", "4 anos").
    pub size: Option<String>,

    /// Optional color attribute.
    pub color: Option<String>,

    /// Optional fabric attribute.
    pub fabric: Option<String>,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the selling price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_centavos(self.price_centavos)
    }

    /// Returns the acquisition cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_centavos(self.cost_centavos)
    }

    /// Checks whether the requested quantity can be sold from stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }
}

/// Operator input for creating a product.
///
/// The store assigns the id and timestamps; everything else is validated
/// against the product invariants before an entity is minted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub cost_centavos: i64,
    pub price_centavos: i64,
    pub quantity: i64,
    pub image_url: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub fabric: Option<String>,
}

/// Partial update for a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub cost_centavos: Option<i64>,
    pub price_centavos: Option<i64>,
    pub quantity: Option<i64>,
    pub image_url: Option<Option<String>>,
    pub size: Option<Option<String>>,
    pub color: Option<Option<String>>,
    pub fabric: Option<Option<String>>,
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a sale.
///
/// Uses the snapshot pattern: name and unit price are frozen at sale time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    /// Product this line references.
    pub product_id: String,

    /// Product name at time of sale (frozen).
    pub name_snapshot: String,

    /// Quantity sold.
    pub quantity: i64,

    /// Unit price in centavos at time of sale (frozen).
    pub unit_price_centavos: i64,

    /// Line total (unit price × quantity).
    pub line_total_centavos: i64,
}

impl SaleLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_centavos(self.unit_price_centavos)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_centavos(self.line_total_centavos)
    }
}

/// A completed sale transaction.
///
/// Sales are immutable once recorded: there is no update path, only
/// creation at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// When the sale was completed.
    pub created_at: DateTime<Utc>,

    /// The products sold.
    pub lines: Vec<SaleLine>,

    /// Sum of line totals before discount.
    pub subtotal_centavos: i64,

    /// Discount applied to the whole sale.
    pub discount_centavos: i64,

    /// Amount actually charged (subtotal - discount).
    pub total_centavos: i64,
}

impl Sale {
    /// Returns the charged total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_centavos(self.total_centavos)
    }

    /// Total units across all lines.
    pub fn total_units(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// One requested line at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLineDraft {
    pub product_id: String,
    pub quantity: i64,
}

/// Operator input for recording a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDraft {
    pub lines: Vec<SaleLineDraft>,
    /// Whole-sale discount in centavos. Zero when absent in the UI.
    pub discount_centavos: i64,
}

// =============================================================================
// Working Capital
// =============================================================================

/// One adjustment to the working capital baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalAdjustment {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Signed amount in centavos (negative for withdrawals).
    pub amount_centavos: i64,

    /// Operator-supplied reason, shown in the history view.
    pub reason: String,

    /// When the adjustment was appended.
    pub created_at: DateTime<Utc>,
}

/// The store's tracked operating cash baseline.
///
/// ## Invariants
/// - Configured once; later changes append to `history`
/// - `history` is monotonically ordered by `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingCapital {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Initial value in centavos at configuration time.
    pub initial_centavos: i64,

    /// When the capital was configured.
    pub configured_at: DateTime<Utc>,

    /// Append-only adjustment history.
    pub history: Vec<CapitalAdjustment>,
}

impl WorkingCapital {
    /// Current capital: initial value plus every adjustment.
    pub fn current(&self) -> Money {
        let adjusted: i64 = self.history.iter().map(|a| a.amount_centavos).sum();
        Money::from_centavos(self.initial_centavos + adjusted)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
