use ember_config::ToolConfig;

/// Resolves a stable topic identifier to a user guide link.
pub trait DocumentationLookup {
  fn url_for(
    &self,
    topic: &str,
  ) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationRegistry {
  base_url: String,
  version: String,
}

impl DocumentationRegistry {
  pub fn new(
    base_url: impl Into<String>,
    version: impl Into<String>,
  ) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      version: version.into(),
    }
  }
}

impl From<&ToolConfig> for DocumentationRegistry {
  fn from(config: &ToolConfig) -> Self {
    Self::new(config.docs.base_url.clone(), config.docs.version.clone())
  }
}

impl DocumentationLookup for DocumentationRegistry {
  fn url_for(
    &self,
    topic: &str,
  ) -> String {
    format!("{}/{}/userguide/{}.html", self.base_url, self.version, topic)
  }
}
