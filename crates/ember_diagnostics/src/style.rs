use colored::{ColoredString, Colorize};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Style {
  Normal,
  Header,
  /// Something the user is expected to type.
  UserInput,
  Identifier,
  Info,
  Success,
  Failure,
}

impl Style {
  pub fn paint(
    self,
    text: &str,
  ) -> ColoredString {
    match self {
      Style::Normal => text.normal(),
      Style::Header => text.bold(),
      Style::UserInput => text.bold(),
      Style::Identifier => text.yellow(),
      Style::Info => text.cyan(),
      Style::Success => text.green().bold(),
      Style::Failure => text.red().bold(),
    }
  }
}

/// A sink for text that may carry styling.
///
/// Sinks that can't show styles just keep the text.
pub trait StyledTextOutput {
  fn append(
    &mut self,
    style: Style,
    text: &str,
  );

  fn text(
    &mut self,
    text: &str,
  ) {
    self.append(Style::Normal, text);
  }
}

impl StyledTextOutput for String {
  fn append(
    &mut self,
    _style: Style,
    text: &str,
  ) {
    self.push_str(text);
  }
}

/// Records styled spans so they can be rendered plain or coloured later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledBuffer {
  spans: Vec<(Style, String)>,
}

impl StyledBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn spans(&self) -> &[(Style, String)] {
    &self.spans
  }

  pub fn is_empty(&self) -> bool {
    self.spans.iter().all(|(_, text)| text.is_empty())
  }

  pub fn plain(&self) -> String {
    self.spans.iter().map(|(_, text)| text.as_str()).collect()
  }

  pub fn colored(&self) -> String {
    self
      .spans
      .iter()
      .map(|(style, text)| style.paint(text).to_string())
      .collect()
  }

  pub fn render(
    &self,
    color: bool,
  ) -> String {
    if color {
      self.colored()
    } else {
      self.plain()
    }
  }
}

impl StyledTextOutput for StyledBuffer {
  fn append(
    &mut self,
    style: Style,
    text: &str,
  ) {
    if text.is_empty() {
      return;
    }

    if let Some((last, buffered)) = self.spans.last_mut() {
      if *last == style {
        buffered.push_str(text);
        return;
      }
    }

    self.spans.push((style, text.to_string()));
  }
}
