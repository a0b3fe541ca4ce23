//! Light/dark theme preference and its store.
//!
//! The store is an explicit object owned by whoever mounts a layout shell.
//! Everything environment-specific (durable storage, the system's color
//! scheme signal, the document root) sits behind [`ThemeHost`], so the same
//! store runs against `localStorage` in the browser and against memory in
//! tests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Storage key the preference is persisted under.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The user's color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Persisted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other preference.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Accessible label for the toggle control.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Environment seam for the theme store.
pub trait ThemeHost {
    /// Read the persisted preference string, if any.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist the preference string.
    fn store(&mut self, value: &str) -> Result<(), StorageError>;

    /// The host system's color scheme signal, if one is available.
    fn prefers_dark(&self) -> Option<bool>;

    /// Apply the preference to the document's visual root.
    fn apply(&mut self, theme: ThemePreference);
}

/// Holds the current preference and keeps the host in sync with it.
#[derive(Debug)]
pub struct ThemeStore<H: ThemeHost> {
    host: H,
    current: ThemePreference,
}

impl<H: ThemeHost> ThemeStore<H> {
    /// Initialize from the host.
    ///
    /// Resolution order: persisted value, then the system signal, then
    /// light. A storage read failure counts as "no persisted value" and an
    /// unrecognized persisted string is ignored.
    pub fn load(mut host: H) -> Self {
        let persisted = match host.load() {
            Ok(value) => value.and_then(|v| v.parse::<ThemePreference>().ok()),
            Err(e) => {
                tracing::warn!(error = %e, "theme storage read failed, ignoring persisted value");
                None
            }
        };

        let current = persisted.unwrap_or_else(|| match host.prefers_dark() {
            Some(true) => ThemePreference::Dark,
            _ => ThemePreference::Light,
        });

        host.apply(current);
        tracing::debug!(theme = %current, from_storage = persisted.is_some(), "theme initialized");

        Self { host, current }
    }

    /// The current preference.
    pub fn get(&self) -> ThemePreference {
        self.current
    }

    /// Flip the preference, persist and apply it, and return the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        self.set(self.current.toggled())
    }

    /// Select a preference explicitly.
    pub fn set(&mut self, theme: ThemePreference) -> ThemePreference {
        self.current = theme;
        self.host.apply(theme);
        if let Err(e) = self.host.store(theme.as_str()) {
            tracing::warn!(error = %e, theme = %theme, "theme storage write failed");
        }
        theme
    }

    /// Borrow the host.
    pub fn host(&self) -> &H {
        &self.host
    }
}

/// In-memory host for tests and non-browser targets.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeHost {
    /// Persisted value under [`THEME_STORAGE_KEY`].
    pub stored: Option<String>,
    /// Every value written, in order.
    pub writes: Vec<String>,
    /// System color scheme signal.
    pub system_dark: Option<bool>,
    /// Last preference applied to the visual root.
    pub applied: Option<ThemePreference>,
    /// Simulate an unavailable storage backend.
    pub fail_storage: bool,
}

impl MemoryThemeHost {
    /// Host with a persisted value.
    pub fn with_stored(value: impl Into<String>) -> Self {
        Self {
            stored: Some(value.into()),
            ..Self::default()
        }
    }

    /// Set the system color scheme signal.
    pub fn with_system_dark(mut self, dark: bool) -> Self {
        self.system_dark = Some(dark);
        self
    }

    /// Make every storage access fail.
    pub fn failing(mut self) -> Self {
        self.fail_storage = true;
        self
    }
}

impl ThemeHost for MemoryThemeHost {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.fail_storage {
            return Err(StorageError::Unavailable);
        }
        Ok(self.stored.clone())
    }

    fn store(&mut self, value: &str) -> Result<(), StorageError> {
        if self.fail_storage {
            return Err(StorageError::Unavailable);
        }
        self.stored = Some(value.to_string());
        self.writes.push(value.to_string());
        Ok(())
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.system_dark
    }

    fn apply(&mut self, theme: ThemePreference) {
        self.applied = Some(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Initialization ===

    #[test]
    fn test_defaults_to_light_without_signals() {
        let store = ThemeStore::load(MemoryThemeHost::default());
        assert_eq!(store.get(), ThemePreference::Light);
        assert_eq!(store.host().applied, Some(ThemePreference::Light));
    }

    #[test]
    fn test_system_dark_used_when_nothing_persisted() {
        let store = ThemeStore::load(MemoryThemeHost::default().with_system_dark(true));
        assert_eq!(store.get(), ThemePreference::Dark);
    }

    #[test]
    fn test_persisted_light_beats_system_dark() {
        let host = MemoryThemeHost::with_stored("light").with_system_dark(true);
        let store = ThemeStore::load(host);
        assert_eq!(store.get(), ThemePreference::Light);
    }

    #[test]
    fn test_persisted_dark_beats_system_light() {
        let host = MemoryThemeHost::with_stored("dark").with_system_dark(false);
        assert_eq!(ThemeStore::load(host).get(), ThemePreference::Dark);
    }

    #[test]
    fn test_unknown_persisted_value_is_ignored() {
        let host = MemoryThemeHost::with_stored("sepia").with_system_dark(true);
        assert_eq!(ThemeStore::load(host).get(), ThemePreference::Dark);
    }

    #[test]
    fn test_storage_failure_degrades_to_light() {
        let store = ThemeStore::load(MemoryThemeHost::with_stored("dark").failing());
        assert_eq!(store.get(), ThemePreference::Light);
    }

    #[test]
    fn test_loading_does_not_persist() {
        let store = ThemeStore::load(MemoryThemeHost::default().with_system_dark(true));
        assert!(store.host().writes.is_empty());
    }

    // === Toggle ===

    #[test]
    fn test_toggle_is_an_involution() {
        let mut store = ThemeStore::load(MemoryThemeHost::default());
        let original = store.get();

        assert_eq!(store.toggle(), ThemePreference::Dark);
        assert_eq!(store.toggle(), original);
        assert_eq!(store.get(), original);
        assert_eq!(store.host().writes, vec!["dark", "light"]);
        assert_eq!(store.host().stored.as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_applies_to_visual_root() {
        let mut store = ThemeStore::load(MemoryThemeHost::default());
        store.toggle();
        assert_eq!(store.host().applied, Some(ThemePreference::Dark));
    }

    #[test]
    fn test_toggle_survives_storage_write_failure() {
        let mut store = ThemeStore::load(MemoryThemeHost::default().failing());
        assert_eq!(store.toggle(), ThemePreference::Dark);
        assert_eq!(store.get(), ThemePreference::Dark);
        assert_eq!(store.host().applied, Some(ThemePreference::Dark));
    }

    #[test]
    fn test_set_explicit() {
        let mut store = ThemeStore::load(MemoryThemeHost::default());
        store.set(ThemePreference::Dark);
        assert_eq!(store.get(), ThemePreference::Dark);
        assert_eq!(store.host().stored.as_deref(), Some("dark"));
    }

    // === Preference ===

    #[test]
    fn test_preference_round_trip_strings() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }
}
