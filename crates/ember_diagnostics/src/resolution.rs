use std::fmt;
use std::sync::Arc;

use crate::client::ClientMetaData;
use crate::style::{StyledBuffer, StyledTextOutput};

/// Renders one suggested remedy.
pub type Resolution = Box<dyn Fn(&mut dyn StyledTextOutput)>;

/// A failure that can suggest how to fix itself.
pub trait ResolutionAware {
  fn append_resolutions(
    &self,
    context: &mut ResolutionContext,
  );
}

/// An error the failure reporter can present.
///
/// Presentation code asks for capabilities through this trait instead of
/// inspecting the concrete error type.
pub trait Failure: std::error::Error {
  fn resolution_aware(&self) -> Option<&dyn ResolutionAware> {
    None
  }
}

/// Collects remedies while a failure is being reported.
pub struct ResolutionContext {
  client: Arc<dyn ClientMetaData>,
  resolutions: Vec<Resolution>,
  suggest_build_definition_resolutions: bool,
}

impl ResolutionContext {
  pub fn new(client: Arc<dyn ClientMetaData>) -> Self {
    Self {
      client,
      resolutions: Vec::new(),
      suggest_build_definition_resolutions: true,
    }
  }

  /// Renders commands the way the user invoked the tool.
  pub fn client_metadata(&self) -> Arc<dyn ClientMetaData> {
    Arc::clone(&self.client)
  }

  pub fn append_resolution(
    &mut self,
    resolution: impl Fn(&mut dyn StyledTextOutput) + 'static,
  ) {
    self.resolutions.push(Box::new(resolution));
  }

  /// Generic remedies that assume a build definition exists must not be offered.
  pub fn do_not_suggest_resolutions_that_require_build_definition(&mut self) {
    self.suggest_build_definition_resolutions = false;
  }

  pub fn suggests_build_definition_resolutions(&self) -> bool {
    self.suggest_build_definition_resolutions
  }

  pub fn len(&self) -> usize {
    self.resolutions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.resolutions.is_empty()
  }

  /// Render every collected resolution, in the order they were appended.
  pub fn render(&self) -> Vec<StyledBuffer> {
    self
      .resolutions
      .iter()
      .map(|resolution| {
        let mut out = StyledBuffer::new();
        resolution(&mut out);
        out
      })
      .collect()
  }
}

impl fmt::Debug for ResolutionContext {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("ResolutionContext")
      .field("resolutions", &self.resolutions.len())
      .field("suggest_build_definition_resolutions", &self.suggest_build_definition_resolutions)
      .finish()
  }
}
