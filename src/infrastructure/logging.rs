//! Logging sink: forwards the domain logging facade to `tracing`.

use crate::domain::logging::{LogEntry, LogLevel, Logger};

/// Logger implementation emitting `tracing` events. The embedder decides the
/// subscriber (the demo binary installs `tracing-subscriber`).
pub struct TracingLogger {
    min_level: LogLevel,
}

impl TracingLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl Logger for TracingLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        match entry.level {
            LogLevel::Trace => tracing::trace!(component = %entry.component, "{}", entry.message),
            LogLevel::Debug => tracing::debug!(component = %entry.component, "{}", entry.message),
            LogLevel::Info => tracing::info!(component = %entry.component, "{}", entry.message),
            LogLevel::Warn => tracing::warn!(component = %entry.component, "{}", entry.message),
            LogLevel::Error => tracing::error!(component = %entry.component, "{}", entry.message),
        }
    }
}
