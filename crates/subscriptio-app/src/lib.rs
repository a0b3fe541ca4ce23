//! Subscriptio storefront
//!
//! Client-rendered Leptos application:
//! - Main, account and auth shells with breadcrumbs and a mobile menu
//! - One page per route, each with its own loading and failure states
//! - Light/dark theme persisted in `localStorage`
//! - Page analytics through `gtag`

pub mod app;
pub mod browser;
pub mod components;
pub mod context;
pub mod hooks;
pub mod layouts;
pub mod logging;
pub mod pages;

use subscriptio_core::config::StorefrontConfig;
use subscriptio_core::ConfigError;

/// Settings compiled into the bundle.
const EMBEDDED_CONFIG: &str = include_str!("../storefront.toml");

/// Resolve the storefront configuration.
///
/// A bad embedded file falls back to defaults; the error is returned
/// alongside so it can be logged once logging is up.
pub fn load_config(body: &str) -> (StorefrontConfig, Option<ConfigError>) {
    let (config, error) = match StorefrontConfig::from_toml_str(body) {
        Ok(config) => (config, None),
        Err(e) => (StorefrontConfig::default(), Some(e)),
    };
    let mut config = config.with_env_overrides();
    if config.origin.is_empty() {
        if let Some(origin) = page_origin() {
            config = config.with_origin(origin);
        }
    }
    (config, error)
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

fn start() -> context::AppContext {
    console_error_panic_hook::set_once();

    let (config, config_error) = load_config(EMBEDDED_CONFIG);
    if let Err(e) = logging::init(&config) {
        console_warn(&format!("logging disabled: {e:#}"));
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "invalid storefront config, using defaults");
    }
    tracing::info!(site = %config.site_name, api = %config.api_url, "storefront starting");

    context::AppContext::from_config(config)
}

#[cfg(target_arch = "wasm32")]
fn console_warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn console_warn(message: &str) {
    eprintln!("{message}");
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    use app::App;
    let context = start();
    leptos::mount::mount_to_body(move || leptos::view! { <App context=context/> });
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    let context = start();
    leptos::mount::hydrate_body(move || leptos::view! { <App context=context/> });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let (config, error) = load_config(EMBEDDED_CONFIG);
        assert!(error.is_none());
        assert_eq!(config.site_name, "Subscriptio");
        assert_eq!(config.theme_key, "theme");
    }

    #[test]
    fn test_bad_config_falls_back_to_defaults() {
        let (config, error) = load_config("log_level = 7");
        assert!(matches!(error, Some(ConfigError::Parse(_))));
        assert_eq!(config.log_level, "info");
    }
}
