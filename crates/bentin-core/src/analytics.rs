//! # Derived Analytics
//!
//! Aggregate metrics computed from the current entity collections.
//!
//! ## No Hidden State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Derived Analytics                               │
//! │                                                                     │
//! │   (&[Product], &[Sale], Option<&WorkingCapital>)                    │
//! │                          │                                          │
//! │                          ▼  pure functions, full recompute          │
//! │   ┌──────────────┬───────────────┬──────────────┬───────────────┐   │
//! │   │  low stock   │ revenue by    │ top sellers  │ capital vs    │   │
//! │   │  list        │ day / month   │ (units / R$) │ revenue delta │   │
//! │   └──────────────┴───────────────┴──────────────┴───────────────┘   │
//! │                                                                     │
//! │   No caching, no incremental aggregation: every query recomputes    │
//! │   from the collections it is handed.                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Revenue figures use the charged total (after discount), bucketed by the
//! UTC date of the sale timestamp.

use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Product, Sale, WorkingCapital};

// =============================================================================
// Low Stock
// =============================================================================

/// Products whose quantity is strictly below the threshold.
///
/// ## Example
/// ```rust,ignore
/// let alerts = analytics::low_stock(&products, 5);
/// ```
pub fn low_stock(products: &[Product], threshold: i64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.quantity < threshold)
        .cloned()
        .collect()
}

// =============================================================================
// Revenue
// =============================================================================

/// Revenue charged on a single UTC date.
pub fn revenue_on(sales: &[Sale], date: NaiveDate) -> Money {
    let centavos = sales
        .iter()
        .filter(|s| s.created_at.date_naive() == date)
        .map(|s| s.total_centavos)
        .sum();
    Money::from_centavos(centavos)
}

/// Revenue charged in a calendar month.
pub fn revenue_in_month(sales: &[Sale], year: i32, month: u32) -> Money {
    let centavos = sales
        .iter()
        .filter(|s| {
            let d = s.created_at.date_naive();
            d.year() == year && d.month() == month
        })
        .map(|s| s.total_centavos)
        .sum();
    Money::from_centavos(centavos)
}

/// Revenue per UTC date, ordered by date.
pub fn revenue_by_day(sales: &[Sale]) -> BTreeMap<NaiveDate, Money> {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for sale in sales {
        *by_day.entry(sale.created_at.date_naive()).or_default() += sale.total_centavos;
    }
    by_day
        .into_iter()
        .map(|(d, c)| (d, Money::from_centavos(c)))
        .collect()
}

/// Total revenue across all recorded sales.
pub fn revenue_total(sales: &[Sale]) -> Money {
    Money::from_centavos(sales.iter().map(|s| s.total_centavos).sum())
}

// =============================================================================
// Top Sellers
// =============================================================================

/// Ranking criterion for [`top_sellers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBy {
    /// Rank by units sold.
    Units,
    /// Rank by revenue (line totals).
    Revenue,
}

/// Aggregated sales figures for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSeller {
    pub product_id: String,
    /// Name from the most recent sale line snapshot.
    pub name: String,
    pub units: i64,
    pub revenue_centavos: i64,
}

/// Top-N products by units or revenue, computed from sale line snapshots.
///
/// Ties break by product id so the ordering is stable across recomputes.
pub fn top_sellers(sales: &[Sale], n: usize, rank_by: RankBy) -> Vec<TopSeller> {
    let mut by_product: HashMap<String, TopSeller> = HashMap::new();

    for sale in sales {
        for line in &sale.lines {
            let entry = by_product
                .entry(line.product_id.clone())
                .or_insert_with(|| TopSeller {
                    product_id: line.product_id.clone(),
                    name: line.name_snapshot.clone(),
                    units: 0,
                    revenue_centavos: 0,
                });
            entry.units += line.quantity;
            entry.revenue_centavos += line.line_total_centavos;
            // Later sales carry the freshest name snapshot
            entry.name = line.name_snapshot.clone();
        }
    }

    let mut ranked: Vec<TopSeller> = by_product.into_values().collect();
    ranked.sort_by(|a, b| {
        let key = match rank_by {
            RankBy::Units => b.units.cmp(&a.units),
            RankBy::Revenue => b.revenue_centavos.cmp(&a.revenue_centavos),
        };
        key.then_with(|| a.product_id.cmp(&b.product_id))
    });
    ranked.truncate(n);
    ranked
}

// =============================================================================
// Capital vs Revenue
// =============================================================================

/// Delta between total revenue and the current working capital.
///
/// Positive when revenue has outgrown the capital baseline; zero when
/// capital was never configured and no sales exist.
pub fn capital_vs_revenue(capital: Option<&WorkingCapital>, sales: &[Sale]) -> Money {
    let current = capital.map(|c| c.current()).unwrap_or_else(Money::zero);
    revenue_total(sales) - current
}

// =============================================================================
// Snapshot
// =============================================================================

/// Everything the dashboard needs, in one recompute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// Products below the low-stock threshold.
    pub low_stock: Vec<Product>,

    /// Revenue charged on `today`.
    pub revenue_today_centavos: i64,

    /// Revenue charged in `today`'s calendar month.
    pub revenue_month_centavos: i64,

    /// Revenue per UTC date.
    pub revenue_by_day: BTreeMap<NaiveDate, i64>,

    /// Top sellers by units sold.
    pub top_by_units: Vec<TopSeller>,

    /// Top sellers by revenue.
    pub top_by_revenue: Vec<TopSeller>,

    /// Current working capital, when configured.
    pub capital_centavos: Option<i64>,

    /// Total revenue minus current capital.
    pub capital_vs_revenue_centavos: i64,
}

/// Recomputes the full snapshot from the collections.
///
/// `today` is passed in rather than read from a clock so the function
/// stays pure and the store controls the reference date.
pub fn snapshot(
    products: &[Product],
    sales: &[Sale],
    capital: Option<&WorkingCapital>,
    low_stock_threshold: i64,
    today: NaiveDate,
    top_n: usize,
) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        low_stock: low_stock(products, low_stock_threshold),
        revenue_today_centavos: revenue_on(sales, today).centavos(),
        revenue_month_centavos: revenue_in_month(sales, today.year(), today.month()).centavos(),
        revenue_by_day: revenue_by_day(sales)
            .into_iter()
            .map(|(d, m)| (d, m.centavos()))
            .collect(),
        top_by_units: top_sellers(sales, top_n, RankBy::Units),
        top_by_revenue: top_sellers(sales, top_n, RankBy::Revenue),
        capital_centavos: capital.map(|c| c.current().centavos()),
        capital_vs_revenue_centavos: capital_vs_revenue(capital, sales).centavos(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CapitalAdjustment, SaleLine};
    use chrono::{TimeZone, Utc};

    fn product(id: &str, quantity: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Produto {}", id),
            category: "Roupas".to_string(),
            cost_centavos: 1000,
            price_centavos: 2500,
            quantity,
            image_url: None,
            size: None,
            color: None,
            fabric: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sale_on(day: u32, product_id: &str, quantity: i64, unit_price: i64) -> Sale {
        let created_at = Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap();
        let line_total = unit_price * quantity;
        Sale {
            id: format!("sale-{}-{}", day, product_id),
            created_at,
            lines: vec![SaleLine {
                product_id: product_id.to_string(),
                name_snapshot: format!("Produto {}", product_id),
                quantity,
                unit_price_centavos: unit_price,
                line_total_centavos: line_total,
            }],
            subtotal_centavos: line_total,
            discount_centavos: 0,
            total_centavos: line_total,
        }
    }

    #[test]
    fn test_low_stock_is_strictly_below_threshold() {
        let products = vec![product("a", 2), product("b", 5), product("c", 7)];

        let alerts = low_stock(&products, 5);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "a");
    }

    #[test]
    fn test_revenue_daily_and_monthly_totals() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        // 150,00 today and another 150,00 earlier in the month = 300,00
        let sales = vec![
            sale_on(30, "a", 1, 15_000),
            sale_on(10, "b", 1, 10_000),
            sale_on(12, "b", 1, 5_000),
        ];

        assert_eq!(revenue_on(&sales, today).centavos(), 15_000);
        assert_eq!(revenue_in_month(&sales, 2026, 8).centavos(), 30_000);
    }

    #[test]
    fn test_revenue_by_day_buckets() {
        let sales = vec![
            sale_on(10, "a", 1, 1000),
            sale_on(10, "b", 1, 2000),
            sale_on(11, "a", 1, 500),
        ];

        let by_day = revenue_by_day(&sales);
        let d10 = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let d11 = NaiveDate::from_ymd_opt(2026, 8, 11).unwrap();
        assert_eq!(by_day[&d10].centavos(), 3000);
        assert_eq!(by_day[&d11].centavos(), 500);
    }

    #[test]
    fn test_top_sellers_by_units_and_revenue() {
        let sales = vec![
            sale_on(10, "a", 5, 1000),  // 5 units, R$ 50,00
            sale_on(11, "b", 2, 10_000), // 2 units, R$ 200,00
            sale_on(12, "a", 1, 1000),  // a: 6 units total
        ];

        let by_units = top_sellers(&sales, 2, RankBy::Units);
        assert_eq!(by_units[0].product_id, "a");
        assert_eq!(by_units[0].units, 6);

        let by_revenue = top_sellers(&sales, 2, RankBy::Revenue);
        assert_eq!(by_revenue[0].product_id, "b");
        assert_eq!(by_revenue[0].revenue_centavos, 20_000);
    }

    #[test]
    fn test_top_sellers_truncates_to_n() {
        let sales = vec![
            sale_on(10, "a", 1, 1000),
            sale_on(10, "b", 2, 1000),
            sale_on(10, "c", 3, 1000),
        ];
        assert_eq!(top_sellers(&sales, 2, RankBy::Units).len(), 2);
    }

    #[test]
    fn test_capital_vs_revenue() {
        let now = Utc::now();
        let capital = WorkingCapital {
            id: "c1".to_string(),
            initial_centavos: 50_000,
            configured_at: now,
            history: vec![CapitalAdjustment {
                id: "a1".to_string(),
                amount_centavos: 10_000,
                reason: "aporte".to_string(),
                created_at: now,
            }],
        };
        let sales = vec![sale_on(10, "a", 1, 80_000)];

        // 80.000 revenue - 60.000 capital = 20.000
        assert_eq!(
            capital_vs_revenue(Some(&capital), &sales).centavos(),
            20_000
        );
        assert_eq!(capital_vs_revenue(None, &sales).centavos(), 80_000);
    }

    #[test]
    fn test_snapshot_aggregates_everything() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let products = vec![product("a", 1)];
        let sales = vec![sale_on(30, "a", 1, 15_000)];

        let snap = snapshot(&products, &sales, None, 5, today, 3);
        assert_eq!(snap.low_stock.len(), 1);
        assert_eq!(snap.revenue_today_centavos, 15_000);
        assert_eq!(snap.revenue_month_centavos, 15_000);
        assert_eq!(snap.top_by_units.len(), 1);
        assert_eq!(snap.capital_centavos, None);
        assert_eq!(snap.capital_vs_revenue_centavos, 15_000);
    }
}
