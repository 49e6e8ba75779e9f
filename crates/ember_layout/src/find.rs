//! Functions for locating settings files and build scripts.

use std::path::{Path, PathBuf};

use crate::errors::LayoutError;

/// Settings file names, in lookup order.
pub const SETTINGS_FILE_NAMES: &[&str] = &["settings.ember", "settings.ember.toml"];

/// Build script names, in lookup order.
pub const BUILD_SCRIPT_NAMES: &[&str] = &["build.ember", "build.ember.toml"];

/// Return the first of `names` that exists as a file inside `dir`.
fn first_existing(
  dir: &Path,
  names: &[&str],
) -> Result<Option<PathBuf>, LayoutError> {
  for name in names {
    let candidate = dir.join(name);

    let exists = candidate.try_exists().map_err(|e| LayoutError::Io {
      path: candidate.clone(),
      source: e,
    })?;

    if exists && candidate.is_file() {
      return Ok(Some(candidate));
    }
  }

  Ok(None)
}

/// Settings file directly inside `dir`, if any.
pub fn find_settings_file(dir: &Path) -> Result<Option<PathBuf>, LayoutError> {
  first_existing(dir, SETTINGS_FILE_NAMES)
}

/// Build script directly inside `dir`, if any.
pub fn find_build_script(dir: &Path) -> Result<Option<PathBuf>, LayoutError> {
  first_existing(dir, BUILD_SCRIPT_NAMES)
}

/// Search for the directory holding a settings file.
///
/// Looks in `start` first and, when `search_upwards` is set, in each ancestor
/// until one has a settings file. Returns `(root_dir, settings_file)`.
pub fn find_settings_root(
  start: &Path,
  search_upwards: bool,
) -> Result<Option<(PathBuf, PathBuf)>, LayoutError> {
  let mut current = start.to_path_buf();

  loop {
    if let Some(settings) = find_settings_file(&current)? {
      return Ok(Some((current, settings)));
    }

    if !search_upwards || !current.pop() {
      return Ok(None);
    }
  }
}
