/// A command the tool can run without a build definition.
pub trait BuiltInCommand {
  /// Name used in diagnostics.
  fn name(&self) -> &str;

  /// Whether the requested task names select this command.
  fn matches(
    &self,
    task_names: &[String],
  ) -> bool;
}

/// `ember`, `ember help` (and `--help`/`-h` passed through as tasks).
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl BuiltInCommand for HelpCommand {
  fn name(&self) -> &str {
    "help"
  }

  fn matches(
    &self,
    task_names: &[String],
  ) -> bool {
    match task_names {
      [] => true,
      [only] => matches!(only.as_str(), "help" | "--help" | "-h"),
      _ => false,
    }
  }
}

/// `ember init [...]`
#[derive(Debug, Clone, Copy, Default)]
pub struct InitCommand;

impl BuiltInCommand for InitCommand {
  fn name(&self) -> &str {
    "init"
  }

  fn matches(
    &self,
    task_names: &[String],
  ) -> bool {
    task_names.first().is_some_and(|task| task == "init")
  }
}

/// The built-in commands, in matching order.
pub fn builtin_commands() -> Vec<Box<dyn BuiltInCommand>> {
  vec![Box::new(HelpCommand), Box::new(InitCommand)]
}
