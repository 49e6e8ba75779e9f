use std::error::Error;
use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientMetaData;
use crate::resolution::{Failure, ResolutionAware, ResolutionContext};
use crate::style::{Style, StyledBuffer, StyledTextOutput};

/// Everything shown to the user for one failed build.
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
  pub message: String,
  pub resolutions: Vec<String>,
  pub causes: Vec<String>,
  #[serde(skip)]
  styled_resolutions: Vec<StyledBuffer>,
  #[serde(skip)]
  show_causes: bool,
}

impl FailureReport {
  pub fn styled_resolutions(&self) -> &[StyledBuffer] {
    &self.styled_resolutions
  }

  pub fn render(
    &self,
    color: bool,
  ) -> String {
    let paint = |style: Style, text: &str| -> String {
      if color {
        style.paint(text).to_string()
      } else {
        text.to_string()
      }
    };

    let mut out = String::new();
    out.push_str(&paint(Style::Failure, "FAILURE: "));
    out.push_str(&paint(Style::Header, "Build failed with an exception."));
    out.push_str("\n\n");

    out.push_str(&format!("{} What went wrong:\n", paint(Style::Header, "*")));
    out.push_str(&self.message);
    out.push('\n');

    if !self.styled_resolutions.is_empty() {
      out.push_str(&format!("\n{} Try:\n", paint(Style::Header, "*")));
      for resolution in &self.styled_resolutions {
        out.push_str(&format!("> {}\n", resolution.render(color)));
      }
    }

    if self.show_causes && !self.causes.is_empty() {
      out.push_str(&format!("\n{} Cause chain:\n", paint(Style::Header, "*")));
      for cause in &self.causes {
        out.push_str(&format!("  {} {}\n", paint(Style::Info, "caused by:"), cause));
      }
    }

    out
  }

  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(self)
  }
}

/// Turns failures into [`FailureReport`]s, merging the failure's own
/// resolutions with the generic ones.
pub struct FailureReporter {
  client: Arc<dyn ClientMetaData>,
  show_stacktrace: bool,
}

impl FailureReporter {
  pub fn new(
    client: Arc<dyn ClientMetaData>,
    show_stacktrace: bool,
  ) -> Self {
    Self { client, show_stacktrace }
  }

  pub fn report(
    &self,
    failure: &dyn Failure,
  ) -> FailureReport {
    self.collect(failure.to_string(), cause_chain(failure.source()), failure.resolution_aware())
  }

  /// Report an error that has no resolution capability.
  pub fn report_error(
    &self,
    error: &dyn Error,
  ) -> FailureReport {
    self.collect(error.to_string(), cause_chain(error.source()), None)
  }

  fn collect(
    &self,
    message: String,
    causes: Vec<String>,
    aware: Option<&dyn ResolutionAware>,
  ) -> FailureReport {
    let mut context = ResolutionContext::new(self.client.clone());

    if let Some(aware) = aware {
      aware.append_resolutions(&mut context);
    }

    let mut styled_resolutions = context.render();

    if context.suggests_build_definition_resolutions() {
      let mut out = StyledBuffer::new();
      out.text("Run ");
      self.client.describe_command(&mut out, Style::UserInput, "tasks");
      out.text(" to list the tasks of this build.");
      styled_resolutions.push(out);
    }

    if !self.show_stacktrace {
      styled_resolutions.push(option_hint("--stacktrace", "to get the full error chain."));
    }

    styled_resolutions.push(option_hint("--verbose", "to get more log output."));

    FailureReport {
      message,
      resolutions: styled_resolutions.iter().map(StyledBuffer::plain).collect(),
      causes,
      styled_resolutions,
      show_causes: self.show_stacktrace,
    }
  }
}

fn option_hint(
  option: &str,
  purpose: &str,
) -> StyledBuffer {
  let mut out = StyledBuffer::new();
  out.text("Run with ");
  out.append(Style::UserInput, option);
  out.text(" ");
  out.text(purpose);
  out
}

fn cause_chain(mut source: Option<&(dyn Error + 'static)>) -> Vec<String> {
  let mut causes = Vec::new();

  while let Some(error) = source {
    causes.push(error.to_string());
    source = error.source();
  }

  causes
}
