use crate::constants::env::LOG_LEVEL;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
            .or_else(|| value.eq_ignore_ascii_case("warning").then_some(LogLevel::Warn))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

#[derive(Debug, Default)]
struct Tally([AtomicU64; 4]);

impl Tally {
    fn bump(&self, level: LogLevel) {
        self.0[level as usize].fetch_add(1, Ordering::Relaxed);
    }

    fn get(&self, level: LogLevel) -> u64 {
        self.0[level as usize].load(Ordering::Relaxed)
    }
}

/// Stderr logger scoped to a component (`autocomplete:engine`) and carrying
/// structured fields, such as the strategy type, that are attached to every
/// line it writes.
#[derive(Debug, Clone)]
pub struct Logger {
    context: String,
    level: LogLevel,
    fields: Map<String, Value>,
    tally: Arc<Tally>,
}

impl Logger {
    /// Level comes from `AUTOCOMPLETE_LOG_LEVEL`, defaulting to info.
    pub fn new(context: &str) -> Self {
        let level = std::env::var(LOG_LEVEL)
            .ok()
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(LogLevel::Info);
        Self {
            context: context.to_string(),
            level,
            fields: Map::new(),
            tally: Arc::new(Tally::default()),
        }
    }

    pub fn child(&self, component: &str) -> Self {
        let mut child = self.clone();
        if !component.is_empty() {
            child.context = format!("{}:{}", self.context, component);
        }
        child
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level
    }

    /// Carried fields followed by the event's own, the latter winning.
    fn render_fields(&self, meta: Option<&Value>) -> Option<Value> {
        let mut merged = self.fields.clone();
        match meta {
            Some(Value::Object(extra)) => merged.extend(extra.clone()),
            Some(Value::Null) | None => {}
            Some(other) => {
                merged.insert("meta".to_string(), other.clone());
            }
        }
        (!merged.is_empty()).then_some(Value::Object(merged))
    }

    fn log(&self, level: LogLevel, message: &str, meta: Option<&Value>) {
        if !self.enabled(level) {
            return;
        }
        self.tally.bump(level);
        let fields = self
            .render_fields(meta)
            .map(|value| format!(" {}", value))
            .unwrap_or_default();
        eprintln!(
            "{} {:>5} {}: {}{}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            level.as_str().to_uppercase(),
            self.context,
            message,
            fields
        );
    }

    pub fn error(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Error, message, meta);
    }

    pub fn warn(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Warn, message, meta);
    }

    pub fn info(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Info, message, meta);
    }

    pub fn debug(&self, message: &str, meta: Option<&Value>) {
        self.log(LogLevel::Debug, message, meta);
    }

    /// Lines written per level, shared by a logger and all its children.
    pub fn stats(&self) -> Value {
        let mut counts = Map::new();
        for level in LogLevel::ALL {
            counts.insert(level.as_str().to_string(), self.tally.get(level).into());
        }
        serde_json::json!({
            "context": self.context,
            "level": self.level.as_str(),
            "written": counts,
        })
    }
}
