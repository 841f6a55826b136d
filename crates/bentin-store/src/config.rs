//! # Store Configuration
//!
//! Configuration for the domain data store and its persistence adapters.
//!
//! ## Example
//! ```rust,ignore
//! let config = StoreConfig::new("./data")
//!     .low_stock_threshold(3)
//!     .remote(RemoteConfig::new("https://db.example.com", "anon-key"));
//! let store = Store::open(config).await?;
//! ```

use std::path::PathBuf;

use bentin_core::DEFAULT_LOW_STOCK_THRESHOLD;

/// Default size bound for one local collection snapshot, in bytes.
///
/// Mirrors the budget of the browser-local storage the snapshots stand in
/// for. A whole collection is one JSON array file.
pub const DEFAULT_MAX_SNAPSHOT_BYTES: usize = 5 * 1024 * 1024;

/// Default number of entries in each top-sellers ranking.
pub const DEFAULT_TOP_SELLERS: usize = 5;

// =============================================================================
// Remote Configuration
// =============================================================================

/// Connection settings for the hosted table service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the service (scheme + host, no trailing slash needed).
    pub base_url: String,

    /// API key sent as both `apikey` and bearer token.
    pub api_key: String,
}

impl RemoteConfig {
    /// Creates remote settings for the given service.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        RemoteConfig {
            base_url,
            api_key: api_key.into(),
        }
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

/// Store configuration.
///
/// ## Defaults
/// - low-stock threshold: 5
/// - top-sellers limit: 5
/// - snapshot bound: 5 MiB per collection
/// - remote: none (local snapshots only)
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the local JSON snapshots.
    pub data_dir: PathBuf,

    /// Products below this quantity appear in the low-stock list.
    pub low_stock_threshold: i64,

    /// Entries per top-sellers ranking in the analytics snapshot.
    pub top_sellers_limit: usize,

    /// Size bound for one local collection snapshot.
    pub max_snapshot_bytes: usize,

    /// Remote table service; `None` runs local-only.
    pub remote: Option<RemoteConfig>,
}

impl StoreConfig {
    /// Creates a configuration with the given local data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            top_sellers_limit: DEFAULT_TOP_SELLERS,
            max_snapshot_bytes: DEFAULT_MAX_SNAPSHOT_BYTES,
            remote: None,
        }
    }

    /// Sets the low-stock alert threshold.
    pub fn low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Sets the top-sellers ranking size.
    pub fn top_sellers_limit(mut self, limit: usize) -> Self {
        self.top_sellers_limit = limit;
        self
    }

    /// Sets the local snapshot size bound.
    pub fn max_snapshot_bytes(mut self, bytes: usize) -> Self {
        self.max_snapshot_bytes = bytes;
        self
    }

    /// Enables the remote table service with local fallback.
    pub fn remote(mut self, remote: RemoteConfig) -> Self {
        self.remote = Some(remote);
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StoreConfig::new("/tmp/bentin");
        assert_eq!(config.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(config.top_sellers_limit, DEFAULT_TOP_SELLERS);
        assert!(config.remote.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/bentin")
            .low_stock_threshold(3)
            .top_sellers_limit(10);
        assert_eq!(config.low_stock_threshold, 3);
        assert_eq!(config.top_sellers_limit, 10);
    }

    #[test]
    fn test_remote_config_strips_trailing_slash() {
        let remote = RemoteConfig::new("https://db.example.com/", "key");
        assert_eq!(remote.base_url, "https://db.example.com");
    }
}
