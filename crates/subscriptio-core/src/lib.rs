//! Storefront logic for Subscriptio.
//!
//! This crate holds everything the storefront's views share that does not
//! need a browser:
//!
//! - **Theme**: light/dark preference store with pluggable persistence
//! - **Breadcrumbs**: path-to-trail derivation with label override hooks
//! - **Navigation**: route table and the collapsible mobile menu
//! - **Fetching**: per-request display states and the unmount guard
//! - **Regions**: scoped render-failure boundaries
//! - **Forms**: login, register, checkout and password-reset field state
//!
//! # Example
//!
//! ```
//! use subscriptio_core::prelude::*;
//!
//! let trail = breadcrumb::derive("/products/annual-plan");
//! assert_eq!(trail.len(), 3);
//! assert_eq!(trail[2].label, "Annual-plan");
//!
//! let mut store = ThemeStore::load(MemoryThemeHost::default());
//! assert_eq!(store.get(), ThemePreference::Light);
//! assert_eq!(store.toggle(), ThemePreference::Dark);
//! ```

pub mod error;
pub mod money;

pub mod analytics;
pub mod boundary;
pub mod breadcrumb;
pub mod config;
pub mod fetch;
pub mod forms;
pub mod menu;
pub mod routes;
pub mod theme;

pub use error::{ConfigError, RenderError, StorageError, ValidationError};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, RenderError, StorageError, ValidationError};
    pub use crate::money::Money;

    pub use crate::analytics::{Analytics, AnalyticsEvent, NoopAnalytics, RecordingAnalytics};
    pub use crate::boundary::{RegionOutcome, RegionPolicy};
    pub use crate::breadcrumb::{
        self, BreadcrumbItem, CrumbOverride, CrumbOverrides, LabelResolver, Segment,
    };
    pub use crate::config::{LogFormat, StorefrontConfig};
    pub use crate::fetch::{FetchState, MountGuard};
    pub use crate::forms::{
        Authenticator, CheckoutForm, DemoAuthenticator, ForgotPasswordForm, FormState, LoginForm,
        RegisterForm,
    };
    pub use crate::menu::{MenuEvent, MenuState};
    pub use crate::routes::{AppRoute, LayoutKind, NavLink};
    pub use crate::theme::{MemoryThemeHost, ThemeHost, ThemePreference, ThemeStore};
}
