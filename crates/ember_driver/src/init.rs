use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use ember_layout::{BUILD_SCRIPT_NAMES, SETTINGS_FILE_NAMES};
use serde::Serialize;
use thiserror::Error;

/// Flavour of the generated definition files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dsl {
  #[default]
  Toml,
  Plain,
}

impl Dsl {
  pub fn settings_file_name(self) -> &'static str {
    match self {
      Dsl::Toml => "settings.ember.toml",
      Dsl::Plain => "settings.ember",
    }
  }

  pub fn build_script_name(self) -> &'static str {
    match self {
      Dsl::Toml => "build.ember.toml",
      Dsl::Plain => "build.ember",
    }
  }
}

#[derive(Debug, Error)]
pub enum InitError {
  #[error("refusing to overwrite existing file '{}'", path.display())]
  AlreadyExists { path: PathBuf },

  #[error("could not determine project name from path '{}'", path.display())]
  NoProjectName { path: PathBuf },

  #[error("failed to write '{}': {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },

  #[error("failed to serialize build definition: {0}")]
  Serialize(#[from] toml::ser::Error),
}

#[derive(Serialize)]
struct SettingsFile {
  project: ProjectSection,
}

#[derive(Serialize)]
struct ProjectSection {
  name: String,
}

#[derive(Serialize)]
struct BuildScriptFile {
  tasks: BTreeMap<String, String>,
}

/// Files written by [`run_init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
  pub project_name: String,
  pub settings_file: PathBuf,
  pub build_script: PathBuf,
}

/// Create a minimal build definition in `dir`.
///
/// Fails without touching anything if `dir` already holds a settings file or
/// build script of either flavour.
pub fn run_init(
  dir: &Path,
  dsl: Dsl,
) -> Result<InitOutcome, InitError> {
  for name in SETTINGS_FILE_NAMES.iter().chain(BUILD_SCRIPT_NAMES) {
    let existing = dir.join(name);
    if existing.exists() {
      return Err(InitError::AlreadyExists { path: existing });
    }
  }

  let project_name = project_name_from_dir(dir).ok_or_else(|| InitError::NoProjectName {
    path: dir.to_path_buf(),
  })?;

  let settings = SettingsFile {
    project: ProjectSection {
      name: project_name.clone(),
    },
  };
  let build_script = BuildScriptFile { tasks: BTreeMap::new() };

  let settings_path = dir.join(dsl.settings_file_name());
  let build_script_path = dir.join(dsl.build_script_name());

  write_definition(
    (settings_path.as_path(), toml::to_string_pretty(&settings)?.as_str()),
    (build_script_path.as_path(), toml::to_string_pretty(&build_script)?.as_str()),
  )?;

  Ok(InitOutcome {
    project_name,
    settings_file: settings_path,
    build_script: build_script_path,
  })
}

fn project_name_from_dir(dir: &Path) -> Option<String> {
  let absolute = if dir.is_absolute() {
    dir.to_path_buf()
  } else {
    dir.canonicalize().ok()?
  };

  absolute
    .file_name()
    .and_then(|name| name.to_str())
    .map(|name| name.trim())
    .filter(|name| !name.is_empty())
    .map(ToString::to_string)
}

/// Write both definition files, or neither.
fn write_definition(
  settings: (&Path, &str),
  build_script: (&Path, &str),
) -> Result<(), InitError> {
  write_new_file(settings.0, settings.1)?;

  if let Err(error) = write_new_file(build_script.0, build_script.1) {
    let _ = std::fs::remove_file(settings.0);
    return Err(error);
  }

  Ok(())
}

fn write_new_file(
  path: &Path,
  content: &str,
) -> Result<(), InitError> {
  let io_error = |source| InitError::Io {
    path: path.to_path_buf(),
    source,
  };

  let mut file = OpenOptions::new()
    .write(true)
    .create_new(true)
    .open(path)
    .map_err(io_error)?;

  file.write_all(content.as_bytes()).map_err(io_error)
}
