use std::path::{Path, PathBuf};

use ember_config::StartParameters;

/// The layout-relevant slice of the start parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayoutConfig {
  pub current_dir: PathBuf,
  pub settings_file: Option<PathBuf>,
  pub search_upwards: bool,
  pub use_empty_settings: bool,
}

impl BuildLayoutConfig {
  pub fn new(current_dir: impl Into<PathBuf>) -> Self {
    Self {
      current_dir: current_dir.into(),
      settings_file: None,
      search_upwards: true,
      use_empty_settings: false,
    }
  }
}

impl From<&StartParameters> for BuildLayoutConfig {
  fn from(params: &StartParameters) -> Self {
    Self {
      current_dir: params.current_dir.clone(),
      settings_file: params.settings_file.clone(),
      search_upwards: params.search_upwards,
      use_empty_settings: params.use_empty_settings,
    }
  }
}

/// Where a build lives and which definition files it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
  root_dir: PathBuf,
  settings_file: Option<PathBuf>,
  build_script: Option<PathBuf>,
  empty_settings: bool,
}

impl BuildLayout {
  pub fn new(
    root_dir: impl Into<PathBuf>,
    settings_file: Option<PathBuf>,
    build_script: Option<PathBuf>,
  ) -> Self {
    Self {
      root_dir: root_dir.into(),
      settings_file,
      build_script,
      empty_settings: false,
    }
  }

  /// A layout backed by implicit, empty settings.
  pub fn with_empty_settings(root_dir: impl Into<PathBuf>) -> Self {
    Self {
      root_dir: root_dir.into(),
      settings_file: None,
      build_script: None,
      empty_settings: true,
    }
  }

  pub fn root_dir(&self) -> &Path {
    &self.root_dir
  }

  pub fn settings_file(&self) -> Option<&Path> {
    self.settings_file.as_deref()
  }

  pub fn build_script(&self) -> Option<&Path> {
    self.build_script.as_deref()
  }

  pub fn uses_empty_settings(&self) -> bool {
    self.empty_settings
  }

  pub fn is_build_definition_missing(&self) -> bool {
    !self.empty_settings && self.settings_file.is_none() && self.build_script.is_none()
  }
}
