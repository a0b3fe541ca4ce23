//! Scoped render-failure boundaries.
//!
//! Each lazily loaded region of a page (breadcrumbs, content slot, cart
//! summary, ...) renders behind its own boundary. A failure inside one
//! region is replaced by that region's fallback message and never takes
//! down its siblings.

use crate::error::RenderError;

/// Default message shown in place of a failed region.
pub const DEFAULT_FALLBACK: &str = "Something went wrong.";

/// How a region reacts to a render failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPolicy {
    /// Region name, used in logs.
    pub name: String,
    /// Message rendered in place of the region.
    pub fallback: String,
    /// Whether failures are logged.
    pub log_failure: bool,
}

impl RegionPolicy {
    /// A region with the default fallback message.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fallback: DEFAULT_FALLBACK.to_string(),
            log_failure: true,
        }
    }

    /// Set the fallback message.
    pub fn with_fallback(mut self, message: impl Into<String>) -> Self {
        self.fallback = message.into();
        self
    }

    /// Turn a region's render result into an outcome.
    pub fn settle<T>(&self, result: Result<T, RenderError>) -> RegionOutcome<T> {
        match result {
            Ok(content) => RegionOutcome::Rendered(content),
            Err(error) => {
                if self.log_failure {
                    tracing::error!(region = %self.name, %error, "region render failed");
                }
                RegionOutcome::Fallback(self.fallback.clone())
            }
        }
    }
}

/// Tagged result of rendering a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionOutcome<T> {
    /// The region's content.
    Rendered(T),
    /// The fallback message that replaced it.
    Fallback(String),
}
