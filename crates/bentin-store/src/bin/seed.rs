//! # Seed Data Generator
//!
//! Populates a local store with test inventory for development.
//!
//! ## Usage
//! ```bash
//! # Generate 40 products (default) into ./bentin_dev
//! cargo run -p bentin-store --bin seed
//!
//! # Generate custom amount
//! cargo run -p bentin-store --bin seed -- --count 100
//!
//! # Specify data directory
//! cargo run -p bentin-store --bin seed -- --data ./data
//! ```
//!
//! ## Generated Data
//! Creates realistic children's clothing inventory across categories
//! (Vestidos, Conjuntos, Camisetas, Shorts, Calças), records a handful of
//! sales against it, and configures a working capital baseline, so the
//! dashboard has something to show on first open.
//!
//! Generation is deterministic: the same count always produces the same
//! names, prices, and stock levels.

use std::env;

use bentin_core::types::{ProductDraft, SaleDraft, SaleLineDraft};
use bentin_store::{Store, StoreConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Product names per category.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Vestidos",
        &[
            "Vestido Festa",
            "Vestido Floral",
            "Vestido Xadrez",
            "Vestido Rodado",
            "Vestido Listrado",
        ],
    ),
    (
        "Conjuntos",
        &[
            "Conjunto Verão",
            "Conjunto Moletom",
            "Conjunto Praia",
            "Conjunto Inverno",
        ],
    ),
    (
        "Camisetas",
        &[
            "Camiseta Básica",
            "Camiseta Estampada",
            "Camiseta Manga Longa",
            "Camiseta Regata",
        ],
    ),
    (
        "Shorts",
        &["Short Jeans", "Short Moletom", "Short Saia"],
    ),
    (
        "Calças",
        &["Calça Jeans", "Calça Legging", "Calça Moletom"],
    ),
];

const SIZES: &[&str] = &["2 anos", "4 anos", "6 anos", "8 anos", "10 anos"];

const COLORS: &[&str] = &["rosa", "azul", "amarelo", "verde", "branco", "vermelho"];

const FABRICS: &[&str] = &["algodão", "malha", "moletom", "jeans"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 40;
    let mut data_dir = String::from("./bentin_dev");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(40);
                    i += 1;
                }
            }
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Meu Bentin Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 40)");
                println!("  -d, --data <PATH>  Data directory (default: ./bentin_dev)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Meu Bentin Seed Data Generator");
    println!("=================================");
    println!("Data dir: {}", data_dir);
    println!("Products: {}", count);
    println!();

    let mut store = Store::open(StoreConfig::new(&data_dir)).await?;

    if !store.products().is_empty() {
        println!("⚠ Store already has {} products", store.products().len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the data directory to regenerate.");
        return Ok(());
    }

    // Generate products
    println!("Generating products...");

    let mut product_ids = Vec::new();
    let mut seed = 0usize;
    'outer: for (category, names) in CATEGORIES {
        for name in *names {
            for size in SIZES {
                if product_ids.len() >= count {
                    break 'outer;
                }

                let product = store.create_product(generate_draft(category, name, size, seed)).await?;
                product_ids.push(product.id);
                seed += 1;
            }
        }
    }

    println!("✓ Generated {} products", product_ids.len());

    // Record a few sales so the dashboard is not empty
    println!("Recording sample sales...");
    let mut sales = 0;
    for (index, product_id) in product_ids.iter().enumerate().step_by(7) {
        // Sell 1-2 units, skipping items seeded with no stock
        let quantity = match store.product(product_id) {
            Some(p) if p.quantity > 0 => p.quantity.min(1 + (index % 2) as i64),
            _ => continue,
        };

        let result = store
            .record_sale(SaleDraft {
                lines: vec![SaleLineDraft {
                    product_id: product_id.clone(),
                    quantity,
                }],
                discount_centavos: 0,
            })
            .await;

        if let Err(e) = result {
            eprintln!("Failed to record sale for {}: {}", product_id, e);
            continue;
        }
        sales += 1;
    }
    println!("✓ Recorded {} sales", sales);

    // Working capital baseline: R$ 5.000,00
    store.configure_capital(500_000).await?;
    println!("✓ Working capital configured");

    let snapshot = store.analytics_now();
    println!();
    println!("Dashboard preview:");
    println!("  Revenue today: {} centavos", snapshot.revenue_today_centavos);
    println!("  Low stock items: {}", snapshot.low_stock.len());
    println!("  Top sellers tracked: {}", snapshot.top_by_units.len());

    store.close().await?;

    println!();
    println!("✓ Seed complete!");
    Ok(())
}

/// Generates a single product draft with deterministic pseudo-random data.
fn generate_draft(category: &str, name: &str, size: &str, seed: usize) -> ProductDraft {
    // Price: R$ 19,90 - R$ 99,90 in 10-centavo steps
    let price_centavos = 1990 + ((seed * 1730) % 8000) as i64;

    // Cost: 40-60% of price
    let cost_pct = 40 + (seed % 20) as i64;
    let cost_centavos = price_centavos * cost_pct / 100;

    // Stock: 0-14, so some items land straight in the low-stock list
    let quantity = (seed % 15) as i64;

    ProductDraft {
        name: format!("{} {}", name, size),
        category: category.to_string(),
        cost_centavos,
        price_centavos,
        quantity,
        image_url: None,
        size: Some(size.to_string()),
        color: Some(COLORS[seed % COLORS.len()].to_string()),
        fabric: Some(FABRICS[seed % FABRICS.len()].to_string()),
    }
}
