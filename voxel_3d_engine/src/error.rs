//! Error types for the Voxel3D engine
//!
//! Missing capabilities are never errors in this engine: stages skip the
//! entity instead. Errors only come from rendering backends and from
//! invalid handles passed to the scene API.

use std::fmt;

/// Result type for Voxel3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Voxel3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (OpenGL, Vulkan, recording backend, etc.)
    BackendError(String),

    /// Invalid resource (shader program, vertex array, entity key, etc.)
    InvalidResource(String),

    /// Initialization failed (renderer, world renderer, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error and build an `Error::BackendError` from the same message
///
/// # Example
///
/// ```ignore
/// let program = programs.get(name)
///     .ok_or_else(|| engine_err!("voxel3d::mock", "Unknown program '{}'", name))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::voxel3d::Error::BackendError(message)
    }};
}

/// Log an error and return early with an `Error::BackendError`
///
/// # Example
///
/// ```ignore
/// if count == 0 {
///     engine_bail!("voxel3d::mock", "Empty draw call");
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
