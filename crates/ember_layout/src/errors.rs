//! Error types for layout discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a build layout.
#[derive(Debug, Error)]
pub enum LayoutError {
  /// The directory the tool was started in is gone or is a file.
  #[error("current directory '{}' does not exist or is not a directory", path.display())]
  CurrentDirNotFound { path: PathBuf },

  /// An explicitly requested settings file does not exist.
  #[error("settings file '{}' does not exist", path.display())]
  MissingSettingsFile { path: PathBuf },

  /// The filesystem refused to tell us whether a file exists.
  #[error("failed to inspect '{}': {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },
}
