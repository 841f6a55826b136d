//! # Remote Table Store
//!
//! Client for the hosted table service (PostgREST-style REST over HTTPS).
//!
//! ## Endpoints
//! ```text
//! GET    {base}/rest/v1/{table}?select=*          load a collection
//! DELETE {base}/rest/v1/{table}?id=not.is.null    clear before replace
//! POST   {base}/rest/v1/{table}                   bulk insert records
//! GET    {base}/rest/v1/produtos?select=id&limit=1  connectivity probe
//! ```
//!
//! Save is a whole-collection replace (clear + insert): the store owns
//! every record in the table, so diffing buys nothing. No automatic
//! retry loop and no enforced call timeout beyond the single probe;
//! failure policy lives in the fallback adapter.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use tracing::debug;

use super::{Collection, PersistenceAdapter};
use crate::config::RemoteConfig;
use crate::error::{PersistenceError, PersistenceResult};

/// Remote table service client.
#[derive(Debug, Clone)]
pub struct RemoteTableStore {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteTableStore {
    /// Creates a client for the configured service.
    pub fn new(config: RemoteConfig) -> Self {
        RemoteTableStore {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Full URL for a table.
    fn table_url(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, collection.table_name())
    }

    /// Auth headers expected by the service.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.config.api_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    fn rejected(collection: Collection, status: reqwest::StatusCode) -> PersistenceError {
        PersistenceError::RemoteRejected {
            collection: collection.table_name().to_string(),
            status: status.as_u16(),
        }
    }
}

#[async_trait::async_trait]
impl PersistenceAdapter for RemoteTableStore {
    async fn load(&self, collection: Collection) -> PersistenceResult<Vec<Value>> {
        debug!(collection = %collection, "Loading from remote table");

        let response = self
            .client
            .get(self.table_url(collection))
            .headers(self.headers())
            .query(&[("select", "*")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejected(collection, response.status()));
        }

        let records: Vec<Value> = response.json().await?;
        debug!(collection = %collection, count = records.len(), "Remote load complete");
        Ok(records)
    }

    async fn save(&self, collection: Collection, records: &[Value]) -> PersistenceResult<()> {
        debug!(collection = %collection, count = records.len(), "Replacing remote table");

        // Clear: the filter is required by the service, `id=not.is.null`
        // matches every row
        let response = self
            .client
            .delete(self.table_url(collection))
            .headers(self.headers())
            .query(&[("id", "not.is.null")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejected(collection, response.status()));
        }

        if records.is_empty() {
            return Ok(());
        }

        let response = self
            .client
            .post(self.table_url(collection))
            .headers(self.headers())
            .header("Prefer", "return=minimal")
            .json(records)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejected(collection, response.status()));
        }

        Ok(())
    }

    async fn probe(&self) -> bool {
        let result = self
            .client
            .get(self.table_url(Collection::Produtos))
            .headers(self.headers())
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
