//! # Domain Data Store
//!
//! Single owner of the runtime state: products, sales, working capital,
//! and the toast stack.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                            Store                                    │
//! │                                                                     │
//! │  drafts/patches ──► validation ──► mutate in memory ──► persist     │
//! │                        │                                   │        │
//! │                        ▼                                   ▼        │
//! │                 StoreError::Validation          adapter (collection │
//! │                 (state untouched)               replaced, last      │
//! │                                                 write wins)         │
//! │                                                                     │
//! │  reads ──► borrow collections / recompute analytics                 │
//! │                                                                     │
//! │  persistence failure ──► error toast + tracing::warn, never fatal   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Discipline
//! Every mutation validates its whole input before touching any state, so
//! a rejected operation leaves the collections exactly as they were. A
//! recorded sale is all-or-nothing across its lines.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use bentin_core::analytics::{self, AnalyticsSnapshot};
use bentin_core::types::{
    CapitalAdjustment, Product, ProductDraft, ProductPatch, Sale, SaleDraft, SaleLine,
    WorkingCapital,
};
use bentin_core::validation::{
    validate_discount, validate_product_draft, validate_product_patch, validate_sale_draft,
};
use bentin_core::{Money, Toast, ToastQueue, ToastVariant, ValidationError};

use crate::adapter::{
    decode_records, encode_records, Collection, FallbackAdapter, LocalSnapshotStore,
    PersistenceAdapter, RemoteTableStore,
};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

// =============================================================================
// Store
// =============================================================================

/// The domain data store.
///
/// Owns the entity collections and the persistence adapter. All access
/// goes through `&mut self` methods; concurrency control is the caller's
/// concern (wrap in a `tokio::sync::Mutex` for shared use).
pub struct Store {
    products: Vec<Product>,
    sales: Vec<Sale>,
    capital: Option<WorkingCapital>,
    toasts: ToastQueue,
    adapter: Box<dyn PersistenceAdapter>,
    config: StoreConfig,
    /// Degraded state as of the last persistence call, for edge-triggered
    /// toasts.
    last_degraded: bool,
}

impl Store {
    /// Opens the store: builds the adapter from the configuration and
    /// loads every collection.
    ///
    /// With a remote configured, reads go remote-first with the local
    /// snapshots as fallback; otherwise the store runs local-only.
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        let local =
            LocalSnapshotStore::new(&config.data_dir).max_snapshot_bytes(config.max_snapshot_bytes);

        let adapter: Box<dyn PersistenceAdapter> = match &config.remote {
            Some(remote) => Box::new(FallbackAdapter::new(
                RemoteTableStore::new(remote.clone()),
                local,
            )),
            None => Box::new(local),
        };

        Self::with_adapter(adapter, config).await
    }

    /// Opens the store over an explicit adapter.
    pub async fn with_adapter(
        adapter: Box<dyn PersistenceAdapter>,
        config: StoreConfig,
    ) -> StoreResult<Self> {
        let products: Vec<Product> = decode_records(adapter.load(Collection::Produtos).await?)?;
        let sales: Vec<Sale> = decode_records(adapter.load(Collection::Vendas).await?)?;
        let capitals: Vec<WorkingCapital> =
            decode_records(adapter.load(Collection::CapitalGiro).await?)?;

        let last_degraded = adapter.is_degraded();
        let mut store = Store {
            products,
            sales,
            capital: capitals.into_iter().next(),
            toasts: ToastQueue::new(),
            adapter,
            config,
            last_degraded,
        };

        if store.last_degraded {
            store.toasts.push(
                ToastVariant::Warning,
                "Modo offline",
                Some("Exibindo dados salvos localmente".to_string()),
            );
        }

        info!(
            products = store.products.len(),
            sales = store.sales.len(),
            capital_configured = store.capital.is_some(),
            degraded = store.last_degraded,
            "Store opened"
        );
        Ok(store)
    }

    /// Persists every collection and releases the store.
    pub async fn close(mut self) -> StoreResult<()> {
        for collection in Collection::ALL {
            self.persist(collection).await;
        }
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Every product, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Every recorded sale, oldest first.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// The working capital record, when configured.
    pub fn capital(&self) -> Option<&WorkingCapital> {
        self.capital.as_ref()
    }

    /// Distinct product categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.products.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Whether the persistence layer is serving fallback data.
    pub fn is_degraded(&self) -> bool {
        self.adapter.is_degraded()
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Creates a product from a validated draft.
    ///
    /// ## Returns
    /// The minted product, with id and timestamps assigned.
    pub async fn create_product(&mut self, draft: ProductDraft) -> StoreResult<Product> {
        validate_product_draft(&draft)?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: draft.name.trim().to_string(),
            category: draft.category.trim().to_string(),
            cost_centavos: draft.cost_centavos,
            price_centavos: draft.price_centavos,
            quantity: draft.quantity,
            image_url: draft.image_url,
            size: draft.size,
            color: draft.color,
            fabric: draft.fabric,
            created_at: now,
            updated_at: now,
        };

        debug!(id = %product.id, name = %product.name, "Product created");
        self.products.push(product.clone());
        self.persist(Collection::Produtos).await;
        Ok(product)
    }

    /// Applies a partial update to a product.
    ///
    /// Absent patch fields leave the current value untouched; attribute
    /// fields can be cleared by supplying `Some(None)`.
    pub async fn update_product(&mut self, id: &str, patch: ProductPatch) -> StoreResult<Product> {
        validate_product_patch(&patch)?;

        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        {
            let product = &mut self.products[index];
            if let Some(name) = patch.name {
                product.name = name.trim().to_string();
            }
            if let Some(category) = patch.category {
                product.category = category.trim().to_string();
            }
            if let Some(cost) = patch.cost_centavos {
                product.cost_centavos = cost;
            }
            if let Some(price) = patch.price_centavos {
                product.price_centavos = price;
            }
            if let Some(quantity) = patch.quantity {
                product.quantity = quantity;
            }
            if let Some(image_url) = patch.image_url {
                product.image_url = image_url;
            }
            if let Some(size) = patch.size {
                product.size = size;
            }
            if let Some(color) = patch.color {
                product.color = color;
            }
            if let Some(fabric) = patch.fabric {
                product.fabric = fabric;
            }
            product.updated_at = Utc::now();
        }

        let updated = self.products[index].clone();
        debug!(id = %updated.id, "Product updated");
        self.persist(Collection::Produtos).await;
        Ok(updated)
    }

    /// Deletes a product from the inventory.
    ///
    /// Recorded sales keep their line snapshots, so history survives the
    /// deletion.
    pub async fn delete_product(&mut self, id: &str) -> StoreResult<()> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        let removed = self.products.remove(index);
        debug!(id = %removed.id, name = %removed.name, "Product deleted");
        self.persist(Collection::Produtos).await;
        Ok(())
    }

    /// Adds stock to a product.
    pub async fn restock(&mut self, id: &str, additional: i64) -> StoreResult<Product> {
        if additional <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "additional quantity".to_string(),
            }
            .into());
        }

        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        {
            let product = &mut self.products[index];
            product.quantity = product.quantity.checked_add(additional).ok_or_else(|| {
                ValidationError::OutOfRange {
                    field: "quantity".to_string(),
                    min: 0,
                    max: i64::MAX,
                }
            })?;
            product.updated_at = Utc::now();
        }

        let updated = self.products[index].clone();
        debug!(id = %updated.id, quantity = updated.quantity, "Product restocked");
        self.persist(Collection::Produtos).await;
        Ok(updated)
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Records a sale at checkout.
    ///
    /// All-or-nothing: every line is validated against live stock
    /// (quantities aggregated per product, so duplicate lines cannot
    /// oversell) before any quantity is decremented. Line snapshots
    /// freeze name and unit price at this moment.
    pub async fn record_sale(&mut self, draft: SaleDraft) -> StoreResult<Sale> {
        validate_sale_draft(&draft)?;

        // Aggregate requested quantities per product before the stock
        // check; two lines of the same product must not each pass alone
        let mut requested: HashMap<&str, i64> = HashMap::new();
        for line in &draft.lines {
            *requested.entry(line.product_id.as_str()).or_default() += line.quantity;
        }

        for (product_id, quantity) in &requested {
            let product = self
                .products
                .iter()
                .find(|p| p.id == *product_id)
                .ok_or_else(|| StoreError::not_found("Product", *product_id))?;

            if !product.can_sell(*quantity) {
                return Err(ValidationError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.quantity,
                    requested: *quantity,
                }
                .into());
            }
        }

        // Build the lines with frozen snapshots, in draft order
        let mut lines = Vec::with_capacity(draft.lines.len());
        let mut subtotal = 0i64;
        for line in &draft.lines {
            // Presence was just checked against the aggregate
            let product = self
                .products
                .iter()
                .find(|p| p.id == line.product_id)
                .ok_or_else(|| StoreError::not_found("Product", &line.product_id))?;

            // Quantities are capped at 999 but prices are unbounded, so
            // the totals stay checked
            let overflow = || ValidationError::OutOfRange {
                field: "sale total".to_string(),
                min: 0,
                max: i64::MAX,
            };
            let line_total = product
                .price_centavos
                .checked_mul(line.quantity)
                .ok_or_else(overflow)?;
            subtotal = subtotal.checked_add(line_total).ok_or_else(overflow)?;
            lines.push(SaleLine {
                product_id: product.id.clone(),
                name_snapshot: product.name.clone(),
                quantity: line.quantity,
                unit_price_centavos: product.price_centavos,
                line_total_centavos: line_total,
            });
        }

        validate_discount(draft.discount_centavos, subtotal)?;

        // Validation is complete; apply every decrement
        let now = Utc::now();
        for product in &mut self.products {
            if let Some(quantity) = requested.get(product.id.as_str()) {
                product.quantity -= quantity;
                product.updated_at = now;
            }
        }

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            lines,
            subtotal_centavos: subtotal,
            discount_centavos: draft.discount_centavos,
            total_centavos: subtotal - draft.discount_centavos,
        };

        info!(
            id = %sale.id,
            lines = sale.lines.len(),
            total = %sale.total(),
            "Sale recorded"
        );
        self.toasts.push(
            ToastVariant::Success,
            "Venda registrada",
            Some(format!("Total: {}", sale.total())),
        );

        self.sales.push(sale.clone());
        self.persist(Collection::Produtos).await;
        self.persist(Collection::Vendas).await;
        Ok(sale)
    }

    // =========================================================================
    // Working Capital
    // =========================================================================

    /// Configures the working capital baseline.
    ///
    /// A fresh configuration replaces the previous record entirely,
    /// history included.
    pub async fn configure_capital(&mut self, initial_centavos: i64) -> StoreResult<WorkingCapital> {
        if initial_centavos < 0 {
            return Err(ValidationError::OutOfRange {
                field: "initial capital".to_string(),
                min: 0,
                max: i64::MAX,
            }
            .into());
        }

        let capital = WorkingCapital {
            id: Uuid::new_v4().to_string(),
            initial_centavos,
            configured_at: Utc::now(),
            history: Vec::new(),
        };

        info!(initial = %Money::from_centavos(initial_centavos), "Working capital configured");
        self.capital = Some(capital.clone());
        self.persist(Collection::CapitalGiro).await;
        Ok(capital)
    }

    /// Appends an adjustment to the working capital history.
    ///
    /// Negative amounts are withdrawals; the reason is required.
    pub async fn adjust_capital(
        &mut self,
        amount_centavos: i64,
        reason: impl Into<String>,
    ) -> StoreResult<CapitalAdjustment> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "reason".to_string(),
            }
            .into());
        }

        let capital = self
            .capital
            .as_mut()
            .ok_or_else(|| StoreError::not_found("WorkingCapital", "not configured"))?;

        let adjustment = CapitalAdjustment {
            id: Uuid::new_v4().to_string(),
            amount_centavos,
            reason: reason.trim().to_string(),
            created_at: Utc::now(),
        };
        capital.history.push(adjustment.clone());

        debug!(
            amount = %Money::from_centavos(amount_centavos),
            current = %self.capital.as_ref().map(|c| c.current()).unwrap_or_else(Money::zero),
            "Capital adjusted"
        );
        self.persist(Collection::CapitalGiro).await;
        Ok(adjustment)
    }

    // =========================================================================
    // Analytics
    // =========================================================================

    /// Recomputes the analytics snapshot against an explicit reference
    /// date.
    pub fn analytics(&self, today: NaiveDate) -> AnalyticsSnapshot {
        analytics::snapshot(
            &self.products,
            &self.sales,
            self.capital.as_ref(),
            self.config.low_stock_threshold,
            today,
            self.config.top_sellers_limit,
        )
    }

    /// Recomputes the analytics snapshot for the current UTC date.
    pub fn analytics_now(&self) -> AnalyticsSnapshot {
        self.analytics(Utc::now().date_naive())
    }

    // =========================================================================
    // Toasts
    // =========================================================================

    /// Visible toasts, most recent last.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Pushes a toast onto the visible stack.
    pub fn push_toast(
        &mut self,
        variant: ToastVariant,
        title: impl Into<String>,
        description: Option<String>,
    ) -> String {
        self.toasts.push(variant, title, description)
    }

    /// Dismisses a toast by id.
    pub fn dismiss_toast(&mut self, id: &str) -> bool {
        self.toasts.remove(id)
    }

    /// Drops expired toasts against the current clock.
    pub fn prune_toasts(&mut self) {
        self.toasts.prune(Utc::now());
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Persists one collection through the adapter.
    ///
    /// Never fails the calling operation: the in-memory mutation already
    /// happened, so a persistence failure becomes an error toast and a
    /// log line instead.
    async fn persist(&mut self, collection: Collection) {
        let result = match collection {
            Collection::Produtos => match encode_records(&self.products) {
                Ok(records) => self.adapter.save(collection, &records).await,
                Err(err) => Err(err),
            },
            Collection::Vendas => match encode_records(&self.sales) {
                Ok(records) => self.adapter.save(collection, &records).await,
                Err(err) => Err(err),
            },
            Collection::CapitalGiro => {
                let records = match &self.capital {
                    Some(capital) => encode_records(std::slice::from_ref(capital)),
                    None => Ok(Vec::new()),
                };
                match records {
                    Ok(records) => self.adapter.save(collection, &records).await,
                    Err(err) => Err(err),
                }
            }
        };

        if let Err(err) = result {
            warn!(collection = %collection, error = %err, "Persistence failed");
            self.toasts.push(
                ToastVariant::Error,
                "Falha ao salvar",
                Some(err.to_string()),
            );
        }

        // Edge-triggered degraded-mode toasts: one per transition, not
        // one per save
        let degraded = self.adapter.is_degraded();
        if degraded && !self.last_degraded {
            self.toasts.push(
                ToastVariant::Warning,
                "Modo offline",
                Some("Alterações salvas localmente".to_string()),
            );
        } else if !degraded && self.last_degraded {
            self.toasts
                .push(ToastVariant::Success, "Conexão restabelecida", None);
        }
        self.last_degraded = degraded;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
