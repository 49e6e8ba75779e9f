use crate::errors::LayoutError;
use crate::find::{find_build_script, find_settings_root, BUILD_SCRIPT_NAMES, SETTINGS_FILE_NAMES};
use crate::layout::{BuildLayout, BuildLayoutConfig};

/// Determines the build layout for a directory.
///
/// Implementations must be deterministic for a given filesystem state.
pub trait LayoutResolver {
  fn resolve(
    &self,
    config: &BuildLayoutConfig,
  ) -> Result<BuildLayout, LayoutError>;

  /// Settings file names that count as a build definition.
  fn settings_file_names(&self) -> &[&str] {
    SETTINGS_FILE_NAMES
  }

  /// Optional build script names.
  fn build_script_names(&self) -> &[&str] {
    BUILD_SCRIPT_NAMES
  }
}

/// Resolves layouts by looking at the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLayoutResolver;

impl LayoutResolver for FsLayoutResolver {
  fn resolve(
    &self,
    config: &BuildLayoutConfig,
  ) -> Result<BuildLayout, LayoutError> {
    if config.use_empty_settings {
      return Ok(BuildLayout::with_empty_settings(&config.current_dir));
    }

    // Upward search walks real ancestors, not the components of a relative path.
    let current_dir = std::path::absolute(&config.current_dir).map_err(|source| LayoutError::Io {
      path: config.current_dir.clone(),
      source,
    })?;

    if let Some(settings_file) = &config.settings_file {
      let settings_file = current_dir.join(settings_file);

      if !settings_file.is_file() {
        return Err(LayoutError::MissingSettingsFile { path: settings_file });
      }

      let root_dir = settings_file
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| current_dir.clone());
      let build_script = find_build_script(&root_dir)?;

      return Ok(BuildLayout::new(root_dir, Some(settings_file), build_script));
    }

    if !current_dir.is_dir() {
      return Err(LayoutError::CurrentDirNotFound { path: current_dir });
    }

    let (root_dir, settings_file) = match find_settings_root(&current_dir, config.search_upwards)? {
      Some((root, settings)) => (root, Some(settings)),
      None => (current_dir, None),
    };

    let build_script = find_build_script(&root_dir)?;

    Ok(BuildLayout::new(root_dir, settings_file, build_script))
  }
}
