use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tool configuration filename, looked up inside the Ember home.
pub const TOOL_CONFIG_FILE: &str = "ember.toml";

/// Overrides the Ember home directory (default: `~/.ember`).
pub const HOME_ENV: &str = "EMBER_HOME";

/// Overrides `[docs] base_url`.
pub const DOCS_URL_ENV: &str = "EMBER_DOCS_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read '{}': {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },

  #[error("failed to parse '{}': {message}", path.display())]
  Parse { path: PathBuf, message: String },
}

/// Where the user guide lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsSection {
  pub base_url: String,
  pub version: String,
}

impl Default for DocsSection {
  fn default() -> Self {
    Self {
      base_url: "https://docs.ember-build.dev".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
    }
  }
}

/// How the tool refers to itself in suggested commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSection {
  pub executable: String,
}

impl Default for ClientSection {
  fn default() -> Self {
    Self {
      executable: "ember".to_string(),
    }
  }
}

/// Per-user tool configuration.
///
/// Expected format in ember.toml:
/// ```toml
/// [docs]
/// base_url = "https://docs.ember-build.dev"
/// version = "0.1.0"
///
/// [client]
/// executable = "./emberw"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
  pub docs: DocsSection,
  pub client: ClientSection,
}

impl ToolConfig {
  /// Load `ember.toml` from `path`. A missing file yields the defaults.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    if !path.is_file() {
      return Ok(Self::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
      path: path.to_path_buf(),
      source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      message: e.to_string(),
    })
  }

  /// Load from the Ember home and apply environment overrides.
  pub fn load_default() -> Result<Self, ConfigError> {
    let config = match ember_home() {
      Some(home) => Self::load(&home.join(TOOL_CONFIG_FILE))?,
      None => Self::default(),
    };

    Ok(config.with_docs_url_override(std::env::var(DOCS_URL_ENV).ok()))
  }

  pub fn with_docs_url_override(
    mut self,
    base_url: Option<String>,
  ) -> Self {
    if let Some(url) = base_url.map(|u| u.trim().trim_end_matches('/').to_string()) {
      if !url.is_empty() {
        self.docs.base_url = url;
      }
    }
    self
  }
}

pub fn ember_home() -> Option<PathBuf> {
  if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
    return Some(PathBuf::from(home));
  }

  std::env::var_os("HOME")
    .filter(|v| !v.is_empty())
    .map(|home| PathBuf::from(home).join(".ember"))
}
