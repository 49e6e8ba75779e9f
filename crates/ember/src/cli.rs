use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use ember_config::{DebugTrace, LogConfig, MessageFormat, StartParameters};
use ember_driver::Dsl;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DebugTraceCli {
  /// Settings file and build script lookup
  Layout,
  /// Build definition validation
  Validate,
  /// Session wiring and built-in commands
  Session,
}

impl From<DebugTraceCli> for DebugTrace {
  fn from(value: DebugTraceCli) -> DebugTrace {
    match value {
      DebugTraceCli::Layout => DebugTrace::Layout,
      DebugTraceCli::Validate => DebugTrace::Validate,
      DebugTraceCli::Session => DebugTrace::Session,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormatCli {
  /// Human readable report on stderr
  Human,
  /// JSON report on stdout
  Json,
}

impl From<MessageFormatCli> for MessageFormat {
  fn from(value: MessageFormatCli) -> MessageFormat {
    match value {
      MessageFormatCli::Human => MessageFormat::Human,
      MessageFormatCli::Json => MessageFormat::Json,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DslCli {
  /// settings.ember.toml / build.ember.toml
  Toml,
  /// settings.ember / build.ember
  Plain,
}

impl From<DslCli> for Dsl {
  fn from(value: DslCli) -> Dsl {
    match value {
      DslCli::Toml => Dsl::Toml,
      DslCli::Plain => Dsl::Plain,
    }
  }
}

#[derive(Parser)]
#[command(author, version, about = "The Ember build tool", long_about = None)]
#[command(color = ColorChoice::Auto)]
pub struct Cli {
  /// Tasks or built-in commands (help, init) to run
  pub tasks: Vec<String>,

  /// Run as if started in this directory
  #[arg(short = 'p', long)]
  pub project_dir: Option<PathBuf>,

  /// Use this settings file instead of searching for one
  #[arg(short = 'c', long)]
  pub settings_file: Option<PathBuf>,

  /// Only look for a settings file in the current directory
  #[arg(long)]
  pub no_search_upward: bool,

  /// Behave as if an empty settings file were present
  #[arg(long)]
  pub empty_settings: bool,

  /// Definition flavour written by `init`
  #[arg(long, value_enum, default_value = "toml")]
  pub dsl: DslCli,

  /// Enable internal debug mode
  #[arg(long, default_value = "false")]
  pub debug: bool,

  /// Enable debug tracing for subsystems
  #[arg(long, value_enum, action = clap::ArgAction::Append)]
  pub debug_trace: Vec<DebugTraceCli>,

  /// Don't print any output
  #[arg(long, short = 'q', default_value = "false")]
  pub quiet: bool,

  /// Use verbose output
  #[arg(long, short, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Print the full error chain of a failure
  #[arg(long, short = 's')]
  pub stacktrace: bool,

  /// How failures are reported
  #[arg(long, value_enum, default_value = "human")]
  pub message_format: MessageFormatCli,

  /// Disable coloured output
  #[arg(long)]
  pub no_color: bool,
}

impl Cli {
  pub fn log_config(&self) -> LogConfig {
    LogConfig::new_basic(
      self.debug,
      self.debug_trace.iter().copied().map(Into::into).collect(),
      self.quiet,
      self.verbose,
    )
  }

  pub fn start_parameters(
    &self,
    current_dir: PathBuf,
  ) -> StartParameters {
    let mut params = StartParameters::new(current_dir, self.tasks.clone())
      .with_search_upwards(!self.no_search_upward)
      .with_log(self.log_config());

    if let Some(settings_file) = &self.settings_file {
      params = params.with_settings_file(settings_file.clone());
    }

    if self.empty_settings {
      params = params.with_empty_settings();
    }

    params.show_stacktrace = self.stacktrace;
    params.message_format = self.message_format.into();
    params
  }
}
