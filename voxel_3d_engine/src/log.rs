//! Engine logging for Voxel3D
//!
//! - Pluggable sink via the `Logger` trait (set with `Engine::set_logger`)
//! - Ordered severities with a per-logger threshold
//! - Colored console output by default
//! - ERROR entries carry the file:line of the call site

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for engine log entries
///
/// # Example
///
/// ```no_run
/// use voxel_3d_engine::voxel3d::log::{Logger, LogEntry};
///
/// struct OverlayLogger {
///     lines: std::sync::Mutex<Vec<String>>,
/// }
///
/// impl Logger for OverlayLogger {
///     fn log(&self, entry: &LogEntry) {
///         self.lines.lock().unwrap().push(entry.message.clone());
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Handle one entry
    fn log(&self, entry: &LogEntry);
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Time the entry was emitted
    pub timestamp: SystemTime,

    /// Emitting type (e.g. "voxel3d::WorldRenderer", "voxel3d::Entity")
    pub source: String,

    /// Formatted message
    pub message: String,

    /// Call site file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Call site line (ERROR entries only)
    pub line: Option<u32>,
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-entity, per-frame detail
    Trace,

    /// Development information (entity lifecycle, scene switches)
    Debug,

    /// Subsystem lifecycle
    Info,

    /// Recoverable misuse (debug pass before culling, etc.)
    Warn,

    /// Backend failures
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Render an entry as a single uncolored line.
///
/// `[timestamp] [SEVERITY] [source] message` with ` (file:line)` appended
/// when the entry has a call site.
pub fn format_entry(entry: &LogEntry) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

    let mut line = format!(
        "[{}] [{}] [{}] {}",
        timestamp,
        entry.severity.label(),
        entry.source,
        entry.message
    );
    if let (Some(file), Some(line_no)) = (entry.file, entry.line) {
        line.push_str(&format!(" ({}:{})", file, line_no));
    }
    line
}

/// Console logger with colored severities
///
/// Entries below `min_severity` are dropped. The default threshold is
/// `Debug`, which hides the TRACE entries logged when entities are dropped.
pub struct DefaultLogger {
    min_severity: LogSeverity,
}

impl DefaultLogger {
    /// Console logger showing everything from DEBUG up
    pub fn new() -> Self {
        Self { min_severity: LogSeverity::Debug }
    }

    /// Console logger with a custom threshold
    pub fn with_min_severity(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    /// Current threshold
    pub fn min_severity(&self) -> LogSeverity {
        self.min_severity
    }

    /// Whether an entry of this severity would be printed
    pub fn accepts(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if !self.accepts(entry.severity) {
            return;
        }

        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        let source = entry.source.bright_blue();

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity, source, entry.message, file, line
            ),
            _ => println!(
                "[{}] [{}] [{}] {}",
                timestamp, severity, source, entry.message
            ),
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```ignore
/// engine_trace!("voxel3d::SphereConeCuller", "Entity {} culled", id);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::voxel3d::Engine::log(
            $crate::voxel3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// ```ignore
/// engine_debug!("voxel3d::Entity", "Constructing entity. id: {}, name: {}", id, name);
/// ```
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::voxel3d::Engine::log(
            $crate::voxel3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// ```ignore
/// engine_info!("voxel3d::WorldRenderer", "Shader programs loaded");
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::voxel3d::Engine::log(
            $crate::voxel3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
///
/// ```ignore
/// engine_warn!("voxel3d::WorldRenderer", "Bounding pass requested before culling");
/// ```
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::voxel3d::Engine::log(
            $crate::voxel3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// ```ignore
/// engine_error!("voxel3d::mock", "Unknown vertex array {}", id);
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::voxel3d::Engine::log_detailed(
            $crate::voxel3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
