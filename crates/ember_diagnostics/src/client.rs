use ember_config::ToolConfig;

use crate::style::{Style, StyledTextOutput};

/// Knows how the user invoked the tool, so suggestions can be phrased as
/// commands the user can paste back.
pub trait ClientMetaData {
  /// Append "how to run `command`" to `out`, rendered in `style`.
  fn describe_command(
    &self,
    out: &mut dyn StyledTextOutput,
    style: Style,
    command: &str,
  );
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolClientMetaData {
  executable: String,
}

impl ToolClientMetaData {
  pub fn new(executable: impl Into<String>) -> Self {
    Self {
      executable: executable.into(),
    }
  }

  pub fn executable(&self) -> &str {
    &self.executable
  }
}

impl From<&ToolConfig> for ToolClientMetaData {
  fn from(config: &ToolConfig) -> Self {
    Self::new(config.client.executable.clone())
  }
}

impl ClientMetaData for ToolClientMetaData {
  fn describe_command(
    &self,
    out: &mut dyn StyledTextOutput,
    style: Style,
    command: &str,
  ) {
    out.append(style, &format!("{} {}", self.executable, command));
  }
}
