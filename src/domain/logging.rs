//! Centralized logging facade for the engine.
//!
//! Components log through a global [`Logger`] so the sink can be swapped per
//! environment (tracing in production, capture in tests, no-op by default).

use std::fmt::Display;

use once_cell::sync::OnceCell;

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Component/Layer identification for logging
#[derive(Debug, Clone)]
pub enum LogComponent {
    Domain(&'static str),         // e.g., "Feed", "Aggregator"
    Application(&'static str),    // e.g., "Simulation", "ChartService"
    Infrastructure(&'static str), // e.g., "FrameBuilder"
    Presentation(&'static str),   // e.g., "Snapshot"
}

impl Display for LogComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogComponent::Domain(name) => write!(f, "Domain::{}", name),
            LogComponent::Application(name) => write!(f, "Application::{}", name),
            LogComponent::Infrastructure(name) => write!(f, "Infrastructure::{}", name),
            LogComponent::Presentation(name) => write!(f, "Presentation::{}", name),
        }
    }
}

/// Structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: String) -> Self {
        Self { level, component, message }
    }
}

/// Centralized logger trait
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn trace(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Trace, component, message.to_string()));
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message.to_string()));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message.to_string()));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message.to_string()));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message.to_string()));
    }
}

/// Global logger instance using thread-safe static
static GLOBAL_LOGGER: OnceCell<Box<dyn Logger + Send + Sync>> = OnceCell::new();

/// Initialize global logger. Later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger + Send + Sync>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

/// Get global logger reference
pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or_else(|| {
        // Fallback to a no-op logger if not initialized
        static FALLBACK: NoOpLogger = NoOpLogger;
        &FALLBACK
    })
}

/// No-op logger for fallback
struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {
        // No-op
    }
}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().trace($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
    };
}
