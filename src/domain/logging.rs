use std::sync::OnceLock;

use derive_more::Display;

/// Severity, ordered so a sink can drop everything below its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Emitting layer plus a short subsystem tag, e.g. `INF:HTTP`
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

impl LogEntry {
    /// Stamped with the installed time provider.
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
        }
    }

    /// `[time] LEVEL COMPONENT | message`
    pub fn format_line(&self) -> String {
        format!(
            "[{}] {} {} | {}",
            get_time_provider().format_timestamp(self.timestamp),
            self.level,
            self.component,
            self.message
        )
    }
}

/// Clock used to stamp log entries
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for log entries; the per-level helpers all funnel into `log`.
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message));
    }
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// First call wins; later installs are ignored.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) {
    let _ = TIME_PROVIDER.set(time_provider);
}

/// Installed logger, or a silent one before `init_logger`.
pub fn get_logger() -> &'static dyn Logger {
    match LOGGER.get() {
        Some(logger) => logger.as_ref(),
        None => &SilentLogger,
    }
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    match TIME_PROVIDER.get() {
        Some(provider) => provider.as_ref(),
        None => &SequenceClock,
    }
}

struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Off-browser clock: a counter, so entries still sort in emission order
struct SequenceClock;

impl TimeProvider for SequenceClock {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT: AtomicU64 = AtomicU64::new(0);
        NEXT.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{timestamp:06}")
    }
}

/// Debug output, compiled out of release builds
#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().info($component, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().warn($component, &format!($($arg)*))
    };
}
