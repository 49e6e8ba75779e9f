//! Configuration shared by every Ember crate.
//!
//! - [`StartParameters`]: what the user asked for on the command line
//! - [`LogConfig`]: verbosity and debug tracing switches
//! - [`ToolConfig`]: the per-user `ember.toml` found under the Ember home

mod tool;

use std::path::{Path, PathBuf};

pub use tool::{ember_home, ClientSection, ConfigError, DocsSection, ToolConfig, DOCS_URL_ENV, HOME_ENV, TOOL_CONFIG_FILE};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugTrace {
  Layout,
  Validate,
  Session,
}

/// How build failures are reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MessageFormat {
  #[default]
  Human,
  Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
  pub debug: bool,
  pub debug_trace: Vec<DebugTrace>,
  pub quiet: bool,
  pub verbose: u8,
}

impl LogConfig {
  pub fn new_basic(
    debug: bool,
    debug_trace: Vec<DebugTrace>,
    quiet: bool,
    verbose: u8,
  ) -> Self {
    Self {
      debug,
      debug_trace,
      quiet,
      verbose,
    }
  }

  pub fn quiet() -> Self {
    Self::new_basic(false, Vec::new(), true, 0)
  }
}

/// Parameters of a single invocation of the tool.
///
/// Owned by the caller; everything downstream only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartParameters {
  pub current_dir: PathBuf,
  /// Requested task and command names, in command-line order.
  pub task_names: Vec<String>,
  /// Explicit settings file, bypassing the directory search.
  pub settings_file: Option<PathBuf>,
  pub search_upwards: bool,
  /// Behave as if an empty settings file were present.
  pub use_empty_settings: bool,
  pub log: LogConfig,
  pub show_stacktrace: bool,
  pub message_format: MessageFormat,
}

impl StartParameters {
  pub fn new(
    current_dir: impl Into<PathBuf>,
    task_names: Vec<String>,
  ) -> Self {
    Self {
      current_dir: current_dir.into(),
      task_names,
      settings_file: None,
      search_upwards: true,
      use_empty_settings: false,
      log: LogConfig::default(),
      show_stacktrace: false,
      message_format: MessageFormat::Human,
    }
  }

  pub fn current_dir(&self) -> &Path {
    &self.current_dir
  }

  pub fn task_names(&self) -> &[String] {
    &self.task_names
  }

  pub fn with_settings_file(
    mut self,
    settings_file: impl Into<PathBuf>,
  ) -> Self {
    self.settings_file = Some(settings_file.into());
    self
  }

  pub fn with_search_upwards(
    mut self,
    search_upwards: bool,
  ) -> Self {
    self.search_upwards = search_upwards;
    self
  }

  pub fn with_empty_settings(mut self) -> Self {
    self.use_empty_settings = true;
    self
  }

  pub fn with_log(
    mut self,
    log: LogConfig,
  ) -> Self {
    self.log = log;
    self
  }
}
