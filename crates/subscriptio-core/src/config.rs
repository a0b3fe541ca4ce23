//! Storefront configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::THEME_STORAGE_KEY;

/// Environment variable overriding [`StorefrontConfig::api_url`].
pub const API_URL_VAR: &str = "API_URL";
/// Environment variable overriding [`StorefrontConfig::origin`].
pub const ORIGIN_VAR: &str = "STOREFRONT_ORIGIN";

/// Output format of the storefront log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// `[LEVEL] message key=value` lines.
    #[default]
    Human,
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Brand shown in headers, footers and document titles.
    pub site_name: String,
    /// Base for same-site `/api/...` reads. Empty means relative requests.
    pub origin: String,
    /// Base for the product catalogue service.
    pub api_url: String,
    /// Durable storage key for the theme preference.
    pub theme_key: String,
    /// Whether analytics events leave the page.
    pub analytics_enabled: bool,
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            site_name: "Subscriptio".to_string(),
            origin: String::new(),
            api_url: "/api".to_string(),
            theme_key: THEME_STORAGE_KEY.to_string(),
            analytics_enabled: true,
            log_level: "info".to_string(),
            log_format: LogFormat::Human,
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(body: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(body)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the origin for same-site reads.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Enable or disable analytics.
    pub fn with_analytics(mut self, enabled: bool) -> Self {
        self.analytics_enabled = enabled;
        self
    }

    /// Apply `API_URL` and `STOREFRONT_ORIGIN`.
    ///
    /// Browser builds have no process environment, so there the values are
    /// the ones present when the crate was compiled.
    pub fn with_env_overrides(self) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            self.with_overrides_from(|key| match key {
                API_URL_VAR => option_env!("API_URL").map(str::to_string),
                ORIGIN_VAR => option_env!("STOREFRONT_ORIGIN").map(str::to_string),
                _ => None,
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.with_overrides_from(|key| std::env::var(key).ok())
        }
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        if let Some(url) = present(API_URL_VAR) {
            tracing::debug!(api_url = %url, "api url overridden from environment");
            self.api_url = url;
        }
        if let Some(origin) = present(ORIGIN_VAR) {
            self.origin = origin;
        }
        self
    }

    /// Reject values the storefront cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "theme_key",
                message: "must not be empty".to_string(),
            });
        }
        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::Invalid {
                field: "log_level",
                message: format!("unknown level `{}`", self.log_level),
            });
        }
        Ok(())
    }

    /// Absolute URL for a same-site path such as `/api/cart`.
    pub fn site_url(&self, path: &str) -> String {
        join_url(&self.origin, path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
