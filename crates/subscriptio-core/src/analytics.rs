//! Outbound analytics events.
//!
//! Tracking is fire-and-forget: [`Analytics::track`] returns nothing, and a
//! sink that cannot deliver an event drops it. Pages never wait on or react
//! to analytics.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::{Map, Value};

/// An event name with an optional property map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl AnalyticsEvent {
    /// An event with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Map::new(),
        }
    }

    /// Add a property.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Property value by key.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    // === Page events ===

    /// `page_view` keyed by path.
    pub fn page_view_path(path: &str) -> Self {
        Self::new("page_view").with("page_path", path)
    }

    /// `page_view` keyed by page name.
    pub fn page_view_named(page: &str) -> Self {
        Self::new("page_view").with("page", page)
    }

    /// `page_view` keyed by document title.
    pub fn page_view_titled(title: &str) -> Self {
        Self::new("page_view").with("page_title", title)
    }

    pub fn view_product(product_id: &str) -> Self {
        Self::new("view_product").with("productId", product_id)
    }

    pub fn page_not_found(path: &str) -> Self {
        Self::new("page_not_found").with("page_path", path)
    }
}

/// Sink for analytics events.
pub trait Analytics {
    /// Record an event. Never fails and never blocks the caller.
    fn track(&self, event: AnalyticsEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        tracing::trace!(event = %event.name, "analytics disabled, event dropped");
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Names of the recorded events, oldest first.
    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }
}

impl Analytics for RecordingAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl<A: Analytics + ?Sized> Analytics for std::sync::Arc<A> {
    fn track(&self, event: AnalyticsEvent) {
        (**self).track(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_collects_properties() {
        let event = AnalyticsEvent::new("checkout").with("step", 2).with("coupon", "SAVE10");
        assert_eq!(event.property("step"), Some(&json!(2)));
        assert_eq!(event.property("coupon"), Some(&json!("SAVE10")));
    }

    #[test]
    fn test_page_event_shapes() {
        let home = AnalyticsEvent::page_view_path("/home");
        assert_eq!(home.name, "page_view");
        assert_eq!(home.property("page_path"), Some(&json!("/home")));

        let invoices = AnalyticsEvent::page_view_named("invoices");
        assert_eq!(invoices.property("page"), Some(&json!("invoices")));

        let product = AnalyticsEvent::view_product("42");
        assert_eq!(product.name, "view_product");
        assert_eq!(product.property("productId"), Some(&json!("42")));

        let missing = AnalyticsEvent::page_not_found("/nope");
        assert_eq!(missing.property("page_path"), Some(&json!("/nope")));
    }

    #[test]
    fn test_serializes_without_empty_properties() {
        let value = serde_json::to_value(AnalyticsEvent::new("cart_view")).unwrap();
        assert_eq!(value, json!({ "name": "cart_view" }));
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingAnalytics::new();
        sink.track(AnalyticsEvent::new("login_page_view"));
        sink.track(AnalyticsEvent::new("cart_view"));
        assert_eq!(sink.names(), vec!["login_page_view", "cart_view"]);
    }

    #[test]
    fn test_shared_sink_through_arc() {
        let sink = std::sync::Arc::new(RecordingAnalytics::new());
        let shared: std::sync::Arc<dyn Analytics> = sink.clone();
        shared.track(AnalyticsEvent::new("profile_page_view"));
        assert_eq!(sink.names(), vec!["profile_page_view"]);
    }
}
