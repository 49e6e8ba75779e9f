use std::sync::Arc;

use ember_config::StartParameters;
use ember_diagnostics::{
  ClientMetaData, DocumentationLookup, Failure, ResolutionAware, ResolutionContext, Style, StyledTextOutput,
};
use ember_layout::{BuildLayout, BuildLayoutConfig, LayoutError, LayoutResolver};
use thiserror::Error;

use crate::builtin::BuiltInCommand;

/// User guide topic for the `init` task.
pub const BUILD_INIT_TOPIC: &str = "build_init";

/// User guide topic for build script basics.
pub const BUILD_BASICS_TOPIC: &str = "tutorial_using_tasks";

const INIT_COMMAND: &str = "init";

/// Checks that the current directory can act as a build root.
///
/// One validator per build session; it holds no mutable state.
pub struct BuildLayoutValidator {
  resolver: Arc<dyn LayoutResolver>,
  docs: Arc<dyn DocumentationLookup>,
  client: Arc<dyn ClientMetaData>,
  builtin_commands: Vec<Box<dyn BuiltInCommand>>,
}

impl BuildLayoutValidator {
  pub fn new(
    resolver: Arc<dyn LayoutResolver>,
    docs: Arc<dyn DocumentationLookup>,
    client: Arc<dyn ClientMetaData>,
    builtin_commands: Vec<Box<dyn BuiltInCommand>>,
  ) -> Self {
    Self {
      resolver,
      docs,
      client,
      builtin_commands,
    }
  }

  /// Succeeds when a build definition exists or a built-in command was
  /// requested. Layout resolution errors are returned untouched.
  pub fn validate(
    &self,
    params: &StartParameters,
  ) -> Result<(), ValidateError> {
    self.validate_layout(params).map(|_| ())
  }

  /// Same decision as [`validate`](Self::validate), handing back the layout
  /// that was resolved on success.
  pub fn validate_layout(
    &self,
    params: &StartParameters,
  ) -> Result<BuildLayout, ValidateError> {
    let layout = self.resolver.resolve(&BuildLayoutConfig::from(params))?;
    if !layout.is_build_definition_missing() {
      return Ok(layout);
    }

    // Built-in commands run anywhere.
    if self.matching_builtin(params.task_names()).is_some() {
      return Ok(layout);
    }

    Err(BuildLayoutError::new(self.missing_build_message(params)).into())
  }

  /// First built-in command, in configured order, that matches `task_names`.
  pub fn matching_builtin(
    &self,
    task_names: &[String],
  ) -> Option<&dyn BuiltInCommand> {
    self
      .builtin_commands
      .iter()
      .find(|command| command.matches(task_names))
      .map(|command| &**command)
  }

  fn missing_build_message(
    &self,
    params: &StartParameters,
  ) -> String {
    let mut message = String::new();

    message.push_str(&format!(
      "Directory '{}' does not contain an Ember build.\n\n",
      params.current_dir().display()
    ));
    message.push_str(&format!(
      "An Ember build should contain a {} file in its root directory. ",
      quote_alternatives(self.resolver.settings_file_names())
    ));
    message.push_str(&format!(
      "It may also contain a {} file.\n\n",
      quote_alternatives(self.resolver.build_script_names())
    ));

    message.push_str("To create a new Ember build in this directory run '");
    self.client.describe_command(&mut message, Style::UserInput, INIT_COMMAND);
    message.push_str("'\n\n");

    message.push_str(&format!(
      "For more detail on the 'init' task see {}\n\n",
      self.docs.url_for(BUILD_INIT_TOPIC)
    ));
    message.push_str(&format!(
      "For more detail on creating an Ember build see {}",
      self.docs.url_for(BUILD_BASICS_TOPIC)
    ));

    message
  }
}

/// `'a'`, `'a' or 'b'`, `'a', 'b' or 'c'`.
fn quote_alternatives(names: &[&str]) -> String {
  let quoted: Vec<String> = names.iter().map(|name| format!("'{}'", name)).collect();

  match quoted.split_last() {
    None => String::new(),
    Some((last, [])) => last.clone(),
    Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
  }
}

/// The current directory is not a build and no built-in command was asked for.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BuildLayoutError {
  message: String,
}

impl BuildLayoutError {
  pub fn new(message: String) -> Self {
    Self { message }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl ResolutionAware for BuildLayoutError {
  fn append_resolutions(
    &self,
    context: &mut ResolutionContext,
  ) {
    context.do_not_suggest_resolutions_that_require_build_definition();

    let client = context.client_metadata();
    context.append_resolution(move |out: &mut dyn StyledTextOutput| {
      out.text("Run ");
      client.describe_command(out, Style::UserInput, INIT_COMMAND);
      out.text(" to create a new Ember build in this directory.");
    });
  }
}

impl Failure for BuildLayoutError {
  fn resolution_aware(&self) -> Option<&dyn ResolutionAware> {
    Some(self)
  }
}

#[derive(Debug, Error)]
pub enum ValidateError {
  #[error(transparent)]
  MissingBuildDefinition(#[from] BuildLayoutError),

  #[error(transparent)]
  Layout(#[from] LayoutError),
}

impl ValidateError {
  pub fn missing_build_definition(&self) -> Option<&BuildLayoutError> {
    match self {
      ValidateError::MissingBuildDefinition(error) => Some(error),
      ValidateError::Layout(_) => None,
    }
  }
}

impl Failure for ValidateError {
  fn resolution_aware(&self) -> Option<&dyn ResolutionAware> {
    match self {
      ValidateError::MissingBuildDefinition(error) => Some(error),
      ValidateError::Layout(_) => None,
    }
  }
}
