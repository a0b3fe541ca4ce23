//! Values shared down the component tree.

use std::sync::Arc;

use leptos::prelude::*;
use subscriptio_core::analytics::{Analytics, NoopAnalytics};
use subscriptio_core::breadcrumb::{CrumbOverride, CrumbOverrides};
use subscriptio_core::config::StorefrontConfig;
use subscriptio_core::theme::{ThemePreference, ThemeStore};
use subscriptio_data::{ApiClient, StorefrontApi};

use crate::browser::{BrowserThemeHost, GtagAnalytics};

pub type SharedApi = Arc<dyn StorefrontApi + Send + Sync>;
pub type SharedAnalytics = Arc<dyn Analytics + Send + Sync>;

/// Services every page reads from.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<StorefrontConfig>,
    pub api: SharedApi,
    pub analytics: SharedAnalytics,
}

impl AppContext {
    /// Wire the HTTP client and, when enabled, the gtag sink.
    pub fn from_config(config: StorefrontConfig) -> Self {
        let analytics: SharedAnalytics = if config.analytics_enabled {
            Arc::new(GtagAnalytics)
        } else {
            Arc::new(NoopAnalytics)
        };
        Self {
            api: Arc::new(ApiClient::from_config(&config)),
            config: Arc::new(config),
            analytics,
        }
    }

    /// Replace the analytics sink.
    pub fn with_analytics(mut self, analytics: SharedAnalytics) -> Self {
        self.analytics = analytics;
        self
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::from_config(StorefrontConfig::default())
    }
}

/// The context provided by `App`, or a default one outside of it.
pub fn use_app() -> AppContext {
    use_context::<AppContext>().unwrap_or_default()
}

/// Handle to the theme store, passed to each layout shell as a prop.
///
/// The store itself is not reactive; `current` mirrors it for the view.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    current: RwSignal<ThemePreference>,
    store: StoredValue<ThemeStore<BrowserThemeHost>>,
}

impl ThemeHandle {
    /// Initialize from the browser: persisted value, system signal, light.
    pub fn load(storage_key: &str) -> Self {
        let store = ThemeStore::load(BrowserThemeHost::new(storage_key));
        Self {
            current: RwSignal::new(store.get()),
            store: StoredValue::new(store),
        }
    }

    /// Current preference, tracked.
    pub fn get(&self) -> ThemePreference {
        self.current.get()
    }

    /// Flip, persist and apply the preference.
    pub fn toggle(&self) {
        if let Some(next) = self.store.try_update_value(|store| store.toggle()) {
            self.current.set(next);
        }
    }
}

/// Breadcrumb overrides contributed by the shell and its page.
#[derive(Clone, Copy)]
pub struct CrumbContext(pub RwSignal<CrumbOverrides>);

impl CrumbContext {
    pub fn new(initial: CrumbOverrides) -> Self {
        Self(RwSignal::new(initial))
    }

    /// Override the item at `href` until the calling component unmounts.
    pub fn scoped_href(&self, href: impl Into<String>, crumb: CrumbOverride) {
        let href = href.into();
        self.0.update(|o| o.insert_href(href.clone(), crumb));

        let overrides = self.0;
        on_cleanup(move || {
            overrides.try_update(|o| o.remove_href(&href));
        });
    }
}

/// The enclosing shell's breadcrumb overrides, if any.
pub fn use_crumbs() -> Option<CrumbContext> {
    use_context::<CrumbContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use subscriptio_core::analytics::{AnalyticsEvent, RecordingAnalytics};

    // === App Context ===

    #[test]
    fn test_with_analytics_replaces_sink() {
        let recorder = Arc::new(RecordingAnalytics::new());
        let config = StorefrontConfig::default().with_analytics(false);
        let ctx = AppContext::from_config(config).with_analytics(recorder.clone());

        ctx.analytics.track(AnalyticsEvent::new("cart_view"));
        assert_eq!(recorder.names(), vec!["cart_view"]);
    }

    #[test]
    fn test_use_app_outside_tree_is_default() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = use_app();
            assert_eq!(ctx.config.site_name, "Subscriptio");
        });
    }

    // === Theme Handle ===

    #[test]
    fn test_theme_handle_toggle_updates_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let theme = ThemeHandle::load("theme");
            assert_eq!(theme.current.get_untracked(), ThemePreference::Light);

            theme.toggle();
            assert_eq!(theme.current.get_untracked(), ThemePreference::Dark);
            theme.toggle();
            assert_eq!(theme.current.get_untracked(), ThemePreference::Light);
        });
    }

    // === Breadcrumb Context ===

    #[test]
    fn test_scoped_override_withdrawn_on_cleanup() {
        let owner = Owner::new();
        owner.with(|| {
            let crumbs = CrumbContext::new(CrumbOverrides::new());

            let page = owner.child();
            page.with(|| {
                crumbs.scoped_href("/product/42", CrumbOverride::label("Wireless Mouse"));
            });
            assert!(!crumbs.0.with_untracked(CrumbOverrides::is_empty));

            page.cleanup();
            assert!(crumbs.0.with_untracked(CrumbOverrides::is_empty));
        });
    }
}
