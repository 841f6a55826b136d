//! Integration tests for the store over real persistence backends.
//!
//! Unit tests cover the in-memory behavior; these exercise the full
//! open → mutate → close → reopen cycle against snapshot files and a
//! mocked remote table service.

use bentin_core::types::{ProductDraft, SaleDraft, SaleLineDraft};
use bentin_core::ToastVariant;
use bentin_store::{RemoteConfig, Store, StoreConfig};
use httpmock::prelude::*;
use serde_json::json;

fn draft(name: &str, price_centavos: i64, quantity: i64) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: "Vestidos".to_string(),
        cost_centavos: 1000,
        price_centavos,
        quantity,
        image_url: None,
        size: None,
        color: None,
        fabric: None,
    }
}

fn sale_of(product_id: &str, quantity: i64) -> SaleDraft {
    SaleDraft {
        lines: vec![SaleLineDraft {
            product_id: product_id.to_string(),
            quantity,
        }],
        discount_centavos: 0,
    }
}

#[tokio::test]
async fn reopen_preserves_full_state() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());

    let product_id = {
        let mut store = Store::open(config.clone()).await.unwrap();
        let product = store
            .create_product(draft("Vestido Festa", 7990, 5))
            .await
            .unwrap();
        store.record_sale(sale_of(&product.id, 2)).await.unwrap();
        store.configure_capital(100_000).await.unwrap();
        store.adjust_capital(-20_000, "retirada").await.unwrap();
        store.close().await.unwrap();
        product.id
    };

    let store = Store::open(config).await.unwrap();
    assert_eq!(store.products().len(), 1);
    assert_eq!(store.product(&product_id).unwrap().quantity, 3);
    assert_eq!(store.sales().len(), 1);
    assert_eq!(store.sales()[0].lines[0].name_snapshot, "Vestido Festa");
    assert_eq!(store.capital().unwrap().current().centavos(), 80_000);
}

#[tokio::test]
async fn rejected_sale_does_not_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());

    let product_id = {
        let mut store = Store::open(config.clone()).await.unwrap();
        let product = store.create_product(draft("Short", 3500, 3)).await.unwrap();

        assert!(store.record_sale(sale_of(&product.id, 10)).await.is_err());
        store.close().await.unwrap();
        product.id
    };

    let store = Store::open(config).await.unwrap();
    assert_eq!(store.product(&product_id).unwrap().quantity, 3);
    assert!(store.sales().is_empty());
}

#[tokio::test]
async fn remote_outage_on_save_degrades_but_keeps_data_locally() {
    let server = MockServer::start();
    // Remote answers reads but rejects every write
    for table in ["produtos", "vendas", "capital_giro"] {
        server.mock(|when, then| {
            when.method(GET).path(format!("/rest/v1/{}", table));
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(DELETE).path(format!("/rest/v1/{}", table));
            then.status(503);
        });
    }

    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path())
        .remote(RemoteConfig::new(server.base_url(), "anon-key"));

    let mut store = Store::open(config).await.unwrap();
    assert!(!store.is_degraded());

    let product = store
        .create_product(draft("Conjunto Verão", 4990, 8))
        .await
        .unwrap();

    assert!(store.is_degraded());
    assert!(store
        .toasts()
        .any(|t| t.variant == ToastVariant::Warning && t.title == "Modo offline"));
    store.close().await.unwrap();

    // Remote fully down now: the reopen falls back to the local snapshot
    let dead_remote = RemoteConfig::new("http://127.0.0.1:9", "anon-key");
    let config = StoreConfig::new(dir.path()).remote(dead_remote);
    let store = Store::open(config).await.unwrap();

    assert!(store.is_degraded());
    assert_eq!(store.product(&product.id).unwrap().name, "Conjunto Verão");
    assert!(store
        .toasts()
        .any(|t| t.variant == ToastVariant::Warning && t.title == "Modo offline"));
}

#[tokio::test]
async fn remote_save_replaces_whole_tables() {
    let server = MockServer::start();
    for table in ["vendas", "capital_giro"] {
        server.mock(|when, then| {
            when.method(GET).path(format!("/rest/v1/{}", table));
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(DELETE).path(format!("/rest/v1/{}", table));
            then.status(204);
        });
    }
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/produtos");
        then.status(200).json_body(json!([]));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE)
            .path("/rest/v1/produtos")
            .query_param("id", "not.is.null")
            .header("apikey", "anon-key");
        then.status(204);
    });
    let insert = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/produtos")
            .header("apikey", "anon-key");
        then.status(201);
    });

    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path())
        .remote(RemoteConfig::new(server.base_url(), "anon-key"));

    let mut store = Store::open(config).await.unwrap();
    store
        .create_product(draft("Camiseta Básica", 2500, 10))
        .await
        .unwrap();

    assert!(!store.is_degraded());
    delete.assert();
    insert.assert();
}

#[tokio::test]
async fn analytics_track_todays_revenue() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::open(StoreConfig::new(dir.path()).low_stock_threshold(3))
        .await
        .unwrap();

    let a = store.create_product(draft("Vestido", 10_000, 10)).await.unwrap();
    let b = store.create_product(draft("Calça", 5_000, 2)).await.unwrap();

    store.record_sale(sale_of(&a.id, 1)).await.unwrap();
    store.record_sale(sale_of(&b.id, 1)).await.unwrap();
    store.configure_capital(1_000_000).await.unwrap();

    let snapshot = store.analytics_now();

    // 100,00 + 50,00 charged today, all within the current month
    assert_eq!(snapshot.revenue_today_centavos, 15_000);
    assert_eq!(snapshot.revenue_month_centavos, 15_000);
    assert_eq!(snapshot.revenue_by_day.len(), 1);

    // Only the 1-left product sits below the threshold of 3
    assert_eq!(snapshot.low_stock.len(), 1);
    assert_eq!(snapshot.low_stock[0].id, b.id);

    assert_eq!(snapshot.capital_centavos, Some(1_000_000));
    assert_eq!(snapshot.capital_vs_revenue_centavos, 15_000 - 1_000_000);
}
