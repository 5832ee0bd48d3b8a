//! Shared error mapping for file persistence

use std::path::Path;

use application::error::ApplicationError;

/// Map an I/O error on `path` to an application-layer error
pub fn map_io_error(action: &str, path: &Path, e: &std::io::Error) -> ApplicationError {
    ApplicationError::Storage(format!("Failed to {action} {}: {e}", path.display()))
}
