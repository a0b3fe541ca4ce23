//! Browser bindings for the theme store and analytics.
//!
//! Everything here talks to `web_sys` on wasm32 and is inert on other
//! targets, so components that use these types still render under native
//! tests.

use subscriptio_core::analytics::{Analytics, AnalyticsEvent};
use subscriptio_core::error::StorageError;
use subscriptio_core::theme::{ThemeHost, ThemePreference};

/// Media query for the system dark-mode signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
/// Class toggled on `<html>` for the dark theme.
pub const DARK_CLASS: &str = "dark";

/// [`ThemeHost`] backed by `localStorage`, `matchMedia` and the document
/// element's class list.
#[derive(Debug, Clone)]
pub struct BrowserThemeHost {
    key: String,
}

impl BrowserThemeHost {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::*;

    fn js_error(value: wasm_bindgen::JsValue) -> StorageError {
        StorageError::Operation(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }

    pub(super) fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }

    pub(super) fn get(key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    pub(super) fn set(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    pub(super) fn prefers_dark() -> Option<bool> {
        web_sys::window()?
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }

    pub(super) fn apply(theme: ThemePreference) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(e) = root
            .class_list()
            .toggle_with_force(DARK_CLASS, theme.is_dark())
        {
            tracing::debug!(error = ?e, "failed to update theme class");
        }
    }
}

impl ThemeHost for BrowserThemeHost {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            dom::get(&self.key)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn store(&mut self, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            dom::set(&self.key, value)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = value;
            Err(StorageError::Unavailable)
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(target_arch = "wasm32")]
        {
            dom::prefers_dark()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn apply(&mut self, theme: ThemePreference) {
        #[cfg(target_arch = "wasm32")]
        dom::apply(theme);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = theme;
    }
}

/// Sends events to `gtag('event', name, props)` when the tag is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct GtagAnalytics;

impl Analytics for GtagAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(e) = gtag::send(&event) {
                tracing::debug!(event = %event.name, error = %e, "analytics event dropped");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::trace!(event = %event.name, "analytics event dropped off-browser");
    }
}

#[cfg(target_arch = "wasm32")]
mod gtag {
    use js_sys::{Function, Reflect, JSON};
    use subscriptio_core::analytics::AnalyticsEvent;
    use wasm_bindgen::{JsCast, JsValue};

    pub(super) fn send(event: &AnalyticsEvent) -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let gtag = Reflect::get(&window, &JsValue::from_str("gtag"))
            .map_err(|e| format!("{:?}", e))?;
        let Some(gtag) = gtag.dyn_ref::<Function>() else {
            return Err("gtag not loaded".to_string());
        };

        let kind = JsValue::from_str("event");
        let name = JsValue::from_str(&event.name);
        let result = if event.properties.is_empty() {
            gtag.call2(&JsValue::NULL, &kind, &name)
        } else {
            let body = serde_json::to_string(&event.properties).map_err(|e| e.to_string())?;
            let props = JSON::parse(&body).map_err(|e| format!("{:?}", e))?;
            gtag.call3(&JsValue::NULL, &kind, &name, &props)
        };
        result.map(|_| ()).map_err(|e| format!("{:?}", e))
    }
}
