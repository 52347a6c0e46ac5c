/// Voxel3D Engine - process-wide logger host
///
/// Rendering state (scenes, cameras, entities) is never global: it is passed
/// explicitly to the stages through a `FrameContext`. The only process-wide
/// state is the logger, stored behind a RwLock so any thread can log.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::new())))
}

// ===== PUBLIC API =====

/// Engine entry point for logging
///
/// # Example
///
/// ```no_run
/// use voxel_3d_engine::voxel3d::{Engine, log::{Logger, LogEntry}};
///
/// struct FileLogger;
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
///
/// Engine::set_logger(FileLogger);
/// ```
pub struct Engine;

impl Engine {
    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to the default console logger
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger::new());
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by engine_trace!, engine_debug!, engine_info! and engine_warn!.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information
    ///
    /// Used by engine_error! (and therefore engine_err! / engine_bail!).
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
