#![allow(dead_code)]

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use ember_config::StartParameters;
use ember_diagnostics::{ClientMetaData, DocumentationLookup, Style, StyledTextOutput};
use ember_driver::{BuildLayoutValidator, BuiltInCommand};
use ember_layout::{BuildLayout, BuildLayoutConfig, LayoutError, LayoutResolver};

/// Resolver that reports a fixed answer and counts how often it was asked.
pub struct FakeResolver {
  pub missing: bool,
  pub calls: Cell<usize>,
}

impl FakeResolver {
  pub fn missing() -> Self {
    Self {
      missing: true,
      calls: Cell::new(0),
    }
  }

  pub fn present() -> Self {
    Self {
      missing: false,
      calls: Cell::new(0),
    }
  }
}

impl LayoutResolver for FakeResolver {
  fn resolve(
    &self,
    config: &BuildLayoutConfig,
  ) -> Result<BuildLayout, LayoutError> {
    self.calls.set(self.calls.get() + 1);

    if self.missing {
      Ok(BuildLayout::new(&config.current_dir, None, None))
    } else {
      Ok(BuildLayout::new(
        &config.current_dir,
        Some(config.current_dir.join("settings.ember")),
        None,
      ))
    }
  }
}

/// Resolver that always fails with an IO error.
pub struct BrokenResolver;

impl LayoutResolver for BrokenResolver {
  fn resolve(
    &self,
    config: &BuildLayoutConfig,
  ) -> Result<BuildLayout, LayoutError> {
    Err(LayoutError::Io {
      path: config.current_dir.clone(),
      source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
    })
  }
}

pub struct FakeDocs;

impl DocumentationLookup for FakeDocs {
  fn url_for(
    &self,
    topic: &str,
  ) -> String {
    format!("https://docs.test/{}", topic)
  }
}

pub struct FakeClient;

impl ClientMetaData for FakeClient {
  fn describe_command(
    &self,
    out: &mut dyn StyledTextOutput,
    style: Style,
    command: &str,
  ) {
    out.append(style, &format!("tool {}", command));
  }
}

/// Built-in command matching an exact task list, recording each query.
pub struct FakeCommand {
  pub name: String,
  pub accepts: Vec<String>,
  pub queries: Rc<Cell<usize>>,
}

impl FakeCommand {
  pub fn boxed(
    name: &str,
    accepts: &[&str],
    queries: Rc<Cell<usize>>,
  ) -> Box<dyn BuiltInCommand> {
    Box::new(Self {
      name: name.to_string(),
      accepts: tasks(accepts),
      queries,
    })
  }
}

impl BuiltInCommand for FakeCommand {
  fn name(&self) -> &str {
    &self.name
  }

  fn matches(
    &self,
    task_names: &[String],
  ) -> bool {
    self.queries.set(self.queries.get() + 1);
    task_names == self.accepts.as_slice()
  }
}

pub fn tasks(names: &[&str]) -> Vec<String> {
  names.iter().map(ToString::to_string).collect()
}

pub fn params(tasks_requested: &[&str]) -> StartParameters {
  StartParameters::new(PathBuf::from("/home/u/proj"), tasks(tasks_requested))
}

pub fn validator(
  resolver: Arc<dyn LayoutResolver>,
  builtins: Vec<Box<dyn BuiltInCommand>>,
) -> BuildLayoutValidator {
  BuildLayoutValidator::new(resolver, Arc::new(FakeDocs), Arc::new(FakeClient), builtins)
}
