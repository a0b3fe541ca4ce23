//! Structured logging for the storefront.
//!
//! Library crates emit plain `tracing` events. This module installs a
//! `tracing-subscriber` layer that turns each event into a [`LogEntry`] and
//! writes it as JSON or as a human-readable line: to the browser console on
//! wasm32, to stderr elsewhere.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use subscriptio_core::config::{LogFormat, StorefrontConfig};
use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a configured level name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl From<&tracing::Level> for LogLevel {
    fn from(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::TRACE => Self::Trace,
            tracing::Level::DEBUG => Self::Debug,
            tracing::Level::INFO => Self::Info,
            tracing::Level::WARN => Self::Warn,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Module that emitted the event.
    pub target: String,
    /// Path of the page being shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if let Some(route) = &self.route {
            s.push_str(&format!(" ({})", route));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| match v {
                    serde_json::Value::String(text) => format!("{}={}", k, text),
                    other => format!("{}={}", k, other),
                })
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Render in the given format.
    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Json => self.to_json(),
            LogFormat::Human => self.to_human(),
        }
    }
}

/// Collects an event's fields.
#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: BTreeMap<String, serde_json::Value>,
}

impl FieldCollector {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            });
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, serde_json::Value::String(format!("{:?}", value)));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, serde_json::Value::String(value.to_string()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }
}

type Sink = Arc<dyn Fn(LogLevel, String) + Send + Sync>;

/// Layer that renders events as [`LogEntry`] values.
#[derive(Clone)]
pub struct StorefrontLayer {
    min_level: LogLevel,
    format: LogFormat,
    sink: Sink,
}

impl StorefrontLayer {
    /// Create a layer writing to the platform console.
    pub fn new(min_level: LogLevel, format: LogFormat) -> Self {
        Self {
            min_level,
            format,
            sink: Arc::new(write_console),
        }
    }

    /// Replace the output sink.
    pub fn with_sink(mut self, sink: impl Fn(LogLevel, String) + Send + Sync + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }
}

impl<S: Subscriber> Layer<S> for StorefrontLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        LogLevel::from(metadata.level()) >= self.min_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = LogLevel::from(metadata.level());
        if level < self.min_level {
            return;
        }

        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        let entry = LogEntry {
            level,
            message: collector.message.unwrap_or_default(),
            target: metadata.target().to_string(),
            route: current_route(),
            fields: collector.fields,
        };
        (self.sink)(level, entry.render(self.format));
    }
}

#[cfg(target_arch = "wasm32")]
fn current_route() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_route() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: LogLevel, line: String) {
    let line = wasm_bindgen::JsValue::from_str(&line);
    match level {
        LogLevel::Error => web_sys::console::error_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Info => web_sys::console::info_1(&line),
        LogLevel::Debug | LogLevel::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: LogLevel, line: String) {
    eprintln!("{}", line);
}

/// Install the storefront layer as the global subscriber.
pub fn init(config: &StorefrontConfig) -> anyhow::Result<()> {
    let level = LogLevel::parse(&config.log_level)
        .ok_or_else(|| anyhow::anyhow!("unknown log level `{}`", config.log_level))?;

    tracing_subscriber::registry()
        .with(StorefrontLayer::new(level, config.log_format))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn capture(min_level: LogLevel, format: LogFormat, emit: impl FnOnce()) -> Vec<String> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = lines.clone();
        let layer = StorefrontLayer::new(min_level, format).with_sink(move |_, line| {
            sink_lines.lock().unwrap().push(line);
        });

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, emit);

        let out = lines.lock().unwrap().clone();
        out
    }

    // === Entry Formatting ===

    #[test]
    fn test_entry_to_human() {
        let entry = LogEntry {
            level: LogLevel::Warn,
            message: "theme storage write failed".into(),
            target: "subscriptio_core::theme".into(),
            route: Some("/cart".into()),
            fields: BTreeMap::from([("theme".to_string(), serde_json::json!("dark"))]),
        };
        assert_eq!(
            entry.to_human(),
            "[WARN] theme storage write failed (/cart) | theme=dark"
        );
    }

    #[test]
    fn test_entry_to_json_flattens_fields() {
        let entry = LogEntry {
            level: LogLevel::Error,
            message: "region render failed".into(),
            target: "subscriptio_core::boundary".into(),
            route: None,
            fields: BTreeMap::from([("region".to_string(), serde_json::json!("invoices"))]),
        };
        let value: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(value["level"], "error");
        assert_eq!(value["region"], "invoices");
        assert!(value.get("route").is_none());
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("WARN"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
        assert!(LogLevel::Error > LogLevel::Info);
    }

    // === Layer ===

    #[test]
    fn test_layer_filters_below_min_level() {
        let lines = capture(LogLevel::Info, LogFormat::Human, || {
            tracing::debug!("hidden");
            tracing::info!(items = 3u64, "breadcrumbs derived");
        });
        assert_eq!(lines, vec!["[INFO] breadcrumbs derived | items=3"]);
    }

    #[test]
    fn test_layer_json_output() {
        let lines = capture(LogLevel::Trace, LogFormat::Json, || {
            tracing::warn!(status = 503, "storefront read failed");
        });
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["message"], "storefront read failed");
        assert_eq!(value["status"], 503);
    }
}
