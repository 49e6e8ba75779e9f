mod cli;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser as ClapParser};
use colored::*;
use ember_config::{MessageFormat, ToolConfig};
use ember_diagnostics::{FailureReport, FailureReporter, ToolClientMetaData};
use ember_driver::{run_init, BuildSession};
use ember_log::{phase_log, phase_ok, phase_warn};

use cli::Cli;

fn emit_report(
  report: &FailureReport,
  format: MessageFormat,
) {
  match format {
    MessageFormat::Human => {
      let color = colored::control::SHOULD_COLORIZE.should_colorize();
      eprint!("{}", report.render(color));
    },
    MessageFormat::Json => match report.to_json() {
      Ok(json) => println!("{}", json),
      Err(error) => eprintln!("{} Failed to serialize failure report: {}", "Error:".red().bold(), error),
    },
  }
}

fn resolve_current_dir(cli: &Cli) -> Result<PathBuf, ()> {
  let resolved = match &cli.project_dir {
    Some(dir) => std::path::absolute(dir),
    None => std::env::current_dir(),
  };

  resolved.map_err(|error| {
    eprintln!("{} Failed to resolve current directory: {}", "Error:".red().bold(), error);
  })
}

fn run_builtin(
  session: &BuildSession,
  cli: &Cli,
  name: &str,
) -> Result<(), FailureReport> {
  let log = &session.params().log;

  match name {
    "help" => {
      if let Err(error) = Cli::command().print_help() {
        eprintln!("{} Failed to print help: {}", "Error:".red().bold(), error);
      }
      Ok(())
    },
    "init" => {
      let layout = session.layout().map_err(|error| session.reporter().report_error(&error))?;

      if !layout.is_build_definition_missing() {
        phase_warn!(
          log,
          "'{}' is already part of an Ember build rooted at {}",
          session.params().current_dir().display(),
          layout.root_dir().display()
        );
        return Ok(());
      }

      let outcome = run_init(session.params().current_dir(), cli.dsl.into())
        .map_err(|error| session.reporter().report_error(&error))?;

      phase_log!(log, "created {}", outcome.settings_file.display());
      phase_log!(log, "created {}", outcome.build_script.display());
      phase_ok!(log, "Initialized Ember build '{}'", outcome.project_name);
      Ok(())
    },
    _ => Ok(()),
  }
}

fn describe_layout(session: &BuildSession) -> Result<(), FailureReport> {
  let log = &session.params().log;
  let layout = session.layout().map_err(|error| session.reporter().report_error(&error))?;

  phase_log!(log, "root directory: {}", layout.root_dir().display());
  match layout.settings_file() {
    Some(settings) => phase_log!(log, "settings file: {}", settings.display()),
    None if layout.uses_empty_settings() => phase_log!(log, "settings file: (empty settings)"),
    None => phase_log!(log, "settings file: (none)"),
  }
  if let Some(script) = layout.build_script() {
    phase_log!(log, "build script: {}", script.display());
  }

  phase_ok!(log, "Build layout is valid");
  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  if cli.no_color {
    colored::control::set_override(false);
  }

  let format: MessageFormat = cli.message_format.into();

  let tool_config = match ToolConfig::load_default() {
    Ok(config) => config,
    Err(error) => {
      let client = Arc::new(ToolClientMetaData::from(&ToolConfig::default()));
      emit_report(&FailureReporter::new(client, cli.stacktrace).report_error(&error), format);
      return ExitCode::FAILURE;
    },
  };

  let Ok(current_dir) = resolve_current_dir(&cli) else {
    return ExitCode::FAILURE;
  };

  let session = BuildSession::new(cli.start_parameters(current_dir), &tool_config);

  if let Err(error) = session.validate() {
    emit_report(&session.reporter().report(&error), format);
    return ExitCode::FAILURE;
  }

  let result = match session.matching_builtin() {
    Some(command) => run_builtin(&session, &cli, command.name()),
    None => describe_layout(&session),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(report) => {
      emit_report(&report, format);
      ExitCode::FAILURE
    },
  }
}
