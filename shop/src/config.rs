//! Configuration for the `storefront` host.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::path::PathBuf;
use storefront_runtime::StoreConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Default `tracing` filter directive
pub const DEFAULT_LOG_FILTER: &str = "shop=info,storefront=info,storefront_runtime=info";

/// Host configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// `tracing` filter directive (`STOREFRONT_LOG`)
    pub log_filter: String,
    /// Applied-action buffer per subscriber (`STOREFRONT_BROADCAST_CAPACITY`)
    pub broadcast_capacity: usize,
    /// Install the Prometheus recorder and print metrics on exit (`STOREFRONT_METRICS`)
    pub metrics_enabled: bool,
    /// Catalog seed file (`STOREFRONT_CATALOG`)
    pub catalog_path: Option<PathBuf>,
    /// Action stream file, stdin when unset (`STOREFRONT_ACTIONS`)
    pub actions_path: Option<PathBuf>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            broadcast_capacity: StoreConfig::default().broadcast_capacity,
            metrics_enabled: false,
            catalog_path: None,
            actions_path: None,
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to [`ShopConfig::default`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            log_filter: get("STOREFRONT_LOG").unwrap_or(defaults.log_filter),
            broadcast_capacity: get("STOREFRONT_BROADCAST_CAPACITY")
                .and_then(|s| s.trim().parse().ok())
                .filter(|capacity| *capacity > 0)
                .unwrap_or(defaults.broadcast_capacity),
            metrics_enabled: get("STOREFRONT_METRICS")
                .map_or(defaults.metrics_enabled, |s| parse_flag(&s)),
            catalog_path: get("STOREFRONT_CATALOG").map(PathBuf::from),
            actions_path: get("STOREFRONT_ACTIONS").map(PathBuf::from),
        }
    }

    /// Store settings derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.broadcast_capacity)
    }

    /// Parse `log_filter` into a `tracing` filter
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if any directive is invalid.
    pub fn env_filter(&self) -> Result<EnvFilter, ParseError> {
        EnvFilter::try_new(&self.log_filter)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
