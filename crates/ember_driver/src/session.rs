use std::cell::OnceCell;
use std::sync::Arc;

use ember_config::{DebugTrace, StartParameters, ToolConfig};
use ember_diagnostics::{ClientMetaData, DocumentationRegistry, FailureReporter, ToolClientMetaData};
use ember_layout::{BuildLayout, BuildLayoutConfig, FsLayoutResolver, LayoutError, LayoutResolver};
use ember_log::{log_dbg, log_trc, trace_dbg};

use crate::builtin::{builtin_commands, BuiltInCommand};
use crate::validator::{BuildLayoutValidator, ValidateError};

/// Wires the filesystem resolver, documentation registry and client
/// metadata into a validator for one invocation.
pub struct BuildSession {
  params: StartParameters,
  resolver: Arc<dyn LayoutResolver>,
  client: Arc<dyn ClientMetaData>,
  validator: BuildLayoutValidator,
  layout: OnceCell<BuildLayout>,
}

impl BuildSession {
  pub fn new(
    params: StartParameters,
    tool_config: &ToolConfig,
  ) -> Self {
    Self::with_resolver(params, tool_config, Arc::new(FsLayoutResolver))
  }

  pub fn with_resolver(
    params: StartParameters,
    tool_config: &ToolConfig,
    resolver: Arc<dyn LayoutResolver>,
  ) -> Self {
    let client: Arc<dyn ClientMetaData> = Arc::new(ToolClientMetaData::from(tool_config));
    let docs = Arc::new(DocumentationRegistry::from(tool_config));

    let validator = BuildLayoutValidator::new(resolver.clone(), docs, client.clone(), builtin_commands());

    Self {
      params,
      resolver,
      client,
      validator,
      layout: OnceCell::new(),
    }
  }

  pub fn params(&self) -> &StartParameters {
    &self.params
  }

  pub fn validate(&self) -> Result<(), ValidateError> {
    let log = &self.params.log;

    log_dbg!(log, "validating build layout in {}", self.params.current_dir().display());
    trace_dbg!(log, DebugTrace::Validate, "requested tasks: {:?}", self.params.task_names());
    log_trc!(log, "layout config: {:?}", BuildLayoutConfig::from(&self.params));

    match self.validator.validate_layout(&self.params) {
      Ok(layout) => {
        trace_dbg!(log, DebugTrace::Validate, "build layout accepted");
        self.remember(layout);
        Ok(())
      },
      Err(error) => {
        match &error {
          ValidateError::MissingBuildDefinition(_) => {
            trace_dbg!(log, DebugTrace::Validate, "no build definition and no built-in command matched")
          },
          ValidateError::Layout(error) => {
            trace_dbg!(log, DebugTrace::Layout, "layout resolution failed: {}", error)
          },
        }
        Err(error)
      },
    }
  }

  /// The layout the session runs against. Reuses the one resolved by
  /// [`validate`](Self::validate) when there is one.
  pub fn layout(&self) -> Result<BuildLayout, LayoutError> {
    if let Some(layout) = self.layout.get() {
      return Ok(layout.clone());
    }

    let layout = self.resolver.resolve(&BuildLayoutConfig::from(&self.params))?;
    self.remember(layout.clone());
    Ok(layout)
  }

  fn remember(
    &self,
    layout: BuildLayout,
  ) {
    let log = &self.params.log;

    trace_dbg!(log, DebugTrace::Layout, "root directory {}", layout.root_dir().display());
    if let Some(settings) = layout.settings_file() {
      trace_dbg!(log, DebugTrace::Layout, "settings file {}", settings.display());
    }
    if let Some(script) = layout.build_script() {
      trace_dbg!(log, DebugTrace::Layout, "build script {}", script.display());
    }
    log_trc!(log, "resolved layout: {:?}", layout);

    let _ = self.layout.set(layout);
  }

  pub fn matching_builtin(&self) -> Option<&dyn BuiltInCommand> {
    let command = self.validator.matching_builtin(self.params.task_names());

    if let Some(command) = command {
      trace_dbg!(&self.params.log, DebugTrace::Session, "built-in command '{}' requested", command.name());
    }

    command
  }

  pub fn reporter(&self) -> FailureReporter {
    FailureReporter::new(self.client.clone(), self.params.show_stacktrace)
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use std::cell::Cell;

  use ember_config::LogConfig;

  use super::*;

  struct CountingResolver {
    calls: Cell<usize>,
  }

  impl LayoutResolver for CountingResolver {
    fn resolve(
      &self,
      config: &BuildLayoutConfig,
    ) -> Result<BuildLayout, LayoutError> {
      self.calls.set(self.calls.get() + 1);
      FsLayoutResolver.resolve(config)
    }
  }

  fn quiet_params(
    dir: &std::path::Path,
    tasks: &[&str],
  ) -> StartParameters {
    StartParameters::new(dir, tasks.iter().map(ToString::to_string).collect())
      .with_search_upwards(false)
      .with_log(LogConfig::quiet())
  }

  #[test]
  fn session_rejects_empty_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let session = BuildSession::new(quiet_params(temp_dir.path(), &["build"]), &ToolConfig::default());

    let error = session.validate().unwrap_err();
    assert!(error.missing_build_definition().is_some());
    assert!(error.to_string().contains(&temp_dir.path().display().to_string()));
  }

  #[test]
  fn session_accepts_builtin_in_empty_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let session = BuildSession::new(quiet_params(temp_dir.path(), &["init"]), &ToolConfig::default());

    assert!(session.validate().is_ok());
    assert_eq!(session.matching_builtin().map(|c| c.name()), Some("init"));
  }

  #[test]
  fn session_layout_reports_definition_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("settings.ember.toml"), "").unwrap();
    let session = BuildSession::new(quiet_params(temp_dir.path(), &["build"]), &ToolConfig::default());

    assert!(session.validate().is_ok());
    let layout = session.layout().unwrap();
    assert_eq!(layout.root_dir(), temp_dir.path());
    assert!(layout.settings_file().is_some());
  }

  #[test]
  fn reporter_uses_configured_executable() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut config = ToolConfig::default();
    config.client.executable = "./emberw".to_string();
    let session = BuildSession::new(quiet_params(temp_dir.path(), &["build"]), &config);

    let error = session.validate().unwrap_err();
    let report = session.reporter().report(&error);
    assert_eq!(report.resolutions[0], "Run ./emberw init to create a new Ember build in this directory.");
    assert!(report.message.contains("run './emberw init'"));
  }

  #[test]
  fn layout_is_resolved_once_per_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("settings.ember"), "").unwrap();
    let resolver = Arc::new(CountingResolver { calls: Cell::new(0) });
    let session = BuildSession::with_resolver(
      quiet_params(temp_dir.path(), &["build"]),
      &ToolConfig::default(),
      resolver.clone(),
    );

    session.validate().unwrap();
    let layout = session.layout().unwrap();
    let again = session.layout().unwrap();

    assert_eq!(resolver.calls.get(), 1);
    assert_eq!(layout, again);
    assert_eq!(layout.settings_file(), Some(temp_dir.path().join("settings.ember").as_path()));
  }

  #[test]
  fn layout_without_validation_resolves_on_demand() {
    let temp_dir = tempfile::tempdir().unwrap();
    let resolver = Arc::new(CountingResolver { calls: Cell::new(0) });
    let session = BuildSession::with_resolver(
      quiet_params(temp_dir.path(), &["init"]),
      &ToolConfig::default(),
      resolver.clone(),
    );

    assert!(session.layout().unwrap().is_build_definition_missing());
    assert!(session.layout().unwrap().is_build_definition_missing());
    assert_eq!(resolver.calls.get(), 1);
  }
}
