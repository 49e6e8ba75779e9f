mod common;

use std::cell::Cell;
use std::fs;
use std::rc::Rc;
use std::sync::Arc;

use common::{params, validator, BrokenResolver, FakeClient, FakeCommand, FakeResolver};
use ember_config::{LogConfig, StartParameters, ToolConfig};
use ember_diagnostics::{FailureReporter, ResolutionContext, ToolClientMetaData};
use ember_driver::{builtin_commands, BuildSession, ValidateError};
use ember_layout::LayoutError;

#[test]
fn present_definition_accepts_any_tasks() {
  let resolver = Arc::new(FakeResolver::present());
  let queries = Rc::new(Cell::new(0));
  let validator = validator(resolver.clone(), vec![FakeCommand::boxed("help", &["help"], queries.clone())]);

  for requested in [&[][..], &["build"][..], &["help"][..], &["clean", "build"][..]] {
    assert!(validator.validate(&params(requested)).is_ok());
  }

  assert_eq!(resolver.calls.get(), 4);
  assert_eq!(queries.get(), 0, "built-in commands are only consulted when the definition is missing");
}

#[test]
fn missing_definition_with_matching_builtin_succeeds() {
  let validator = validator(Arc::new(FakeResolver::missing()), builtin_commands());

  assert!(validator.validate(&params(&["help"])).is_ok());
  assert!(validator.validate(&params(&[])).is_ok());
  assert!(validator.validate(&params(&["init"])).is_ok());
}

#[test]
fn missing_definition_without_match_fails() {
  let validator = validator(Arc::new(FakeResolver::missing()), builtin_commands());

  let error = validator.validate(&params(&["build"])).unwrap_err();
  let failure = error.missing_build_definition().expect("expected a missing build definition");

  assert!(failure.message().contains("/home/u/proj"));
}

#[test]
fn second_builtin_can_match() {
  let first = Rc::new(Cell::new(0));
  let second = Rc::new(Cell::new(0));
  let third = Rc::new(Cell::new(0));
  let validator = validator(
    Arc::new(FakeResolver::missing()),
    vec![
      FakeCommand::boxed("help", &["help"], first.clone()),
      FakeCommand::boxed("wrapper", &["wrapper"], second.clone()),
      FakeCommand::boxed("init", &["init"], third.clone()),
    ],
  );

  assert!(validator.validate(&params(&["wrapper"])).is_ok());
  assert_eq!(first.get(), 1);
  assert_eq!(second.get(), 1);
  assert_eq!(third.get(), 0, "matching stops at the first hit");
}

#[test]
fn no_builtins_means_failure() {
  let validator = validator(Arc::new(FakeResolver::missing()), Vec::new());

  let error = validator.validate(&params(&[])).unwrap_err();
  assert!(matches!(error, ValidateError::MissingBuildDefinition(_)));
}

#[test]
fn message_is_complete_and_deterministic() {
  let validator = validator(Arc::new(FakeResolver::missing()), builtin_commands());

  let error = validator.validate(&params(&["build"])).unwrap_err();
  let expected = "Directory '/home/u/proj' does not contain an Ember build.\n\n\
An Ember build should contain a 'settings.ember' or 'settings.ember.toml' file in its root directory. \
It may also contain a 'build.ember' or 'build.ember.toml' file.\n\n\
To create a new Ember build in this directory run 'tool init'\n\n\
For more detail on the 'init' task see https://docs.test/build_init\n\n\
For more detail on creating an Ember build see https://docs.test/tutorial_using_tasks";

  assert_eq!(error.to_string(), expected);
  assert_eq!(error.missing_build_definition().map(|e| e.message()), Some(expected));
}

#[test]
fn validation_is_idempotent() {
  let validator = validator(Arc::new(FakeResolver::missing()), builtin_commands());
  let request = params(&["build"]);

  let first = validator.validate(&request).unwrap_err().to_string();
  let second = validator.validate(&request).unwrap_err().to_string();
  assert_eq!(first, second);

  let accepted = params(&["help"]);
  assert!(validator.validate(&accepted).is_ok());
  assert!(validator.validate(&accepted).is_ok());
}

#[test]
fn resolver_errors_propagate_unchanged() {
  let validator = validator(Arc::new(BrokenResolver), builtin_commands());

  let error = validator.validate(&params(&["help"])).unwrap_err();
  match error {
    ValidateError::Layout(LayoutError::Io { path, source }) => {
      assert_eq!(path, std::path::PathBuf::from("/home/u/proj"));
      assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
    },
    other => panic!("unexpected error: {:?}", other),
  }
}

#[test]
fn resolution_suggests_init_and_suppresses_definition_hints() {
  let validator = validator(Arc::new(FakeResolver::missing()), builtin_commands());
  let error = validator.validate(&params(&["build"])).unwrap_err();
  let failure = error.missing_build_definition().unwrap();

  let mut context = ResolutionContext::new(Arc::new(FakeClient));
  ember_diagnostics::ResolutionAware::append_resolutions(failure, &mut context);

  assert_eq!(context.len(), 1);
  assert!(!context.suggests_build_definition_resolutions());

  let rendered = context.render();
  insta::assert_snapshot!(rendered[0].plain(), @"Run tool init to create a new Ember build in this directory.");
  assert!(rendered[0]
    .spans()
    .contains(&(ember_diagnostics::Style::UserInput, "tool init".to_string())));
}

#[test]
fn reporter_sees_capability_through_failure_trait() {
  let validator = validator(Arc::new(FakeResolver::missing()), builtin_commands());
  let error = validator.validate(&params(&["build"])).unwrap_err();

  let report = FailureReporter::new(Arc::new(FakeClient), false).report(&error);
  assert_eq!(
    report.resolutions,
    [
      "Run tool init to create a new Ember build in this directory.",
      "Run with --stacktrace to get the full error chain.",
      "Run with --verbose to get more log output.",
    ]
  );

  let layout_error = validator_with_broken().validate(&params(&["build"])).unwrap_err();
  let report = FailureReporter::new(Arc::new(FakeClient), false).report(&layout_error);
  assert_eq!(report.resolutions[0], "Run tool tasks to list the tasks of this build.");
}

#[test]
fn resolution_renders_with_the_reporting_client() {
  let validator = validator(Arc::new(FakeResolver::missing()), builtin_commands());
  let error = validator.validate(&params(&["build"])).unwrap_err();

  let report = FailureReporter::new(Arc::new(ToolClientMetaData::new("./emberw")), false).report(&error);
  assert_eq!(report.resolutions[0], "Run ./emberw init to create a new Ember build in this directory.");
  assert!(report.message.contains("run 'tool init'"));
}

#[test]
fn validate_layout_hands_back_the_resolved_layout() {
  let validator = validator(Arc::new(FakeResolver::present()), builtin_commands());

  let layout = validator.validate_layout(&params(&["build"])).unwrap();
  assert_eq!(layout.settings_file(), Some(std::path::Path::new("/home/u/proj/settings.ember")));
}

fn validator_with_broken() -> ember_driver::BuildLayoutValidator {
  validator(Arc::new(BrokenResolver), builtin_commands())
}

// Scenarios against the real filesystem.

fn session_for(
  dir: &std::path::Path,
  requested: &[&str],
) -> BuildSession {
  let params = StartParameters::new(dir, common::tasks(requested))
    .with_search_upwards(false)
    .with_log(LogConfig::quiet());
  BuildSession::new(params, &ToolConfig::default())
}

#[test]
fn scenario_build_in_empty_directory_fails() {
  let temp_dir = tempfile::tempdir().unwrap();

  let error = session_for(temp_dir.path(), &["build"]).validate().unwrap_err();
  assert!(error.missing_build_definition().is_some());
  assert!(error.to_string().contains(&temp_dir.path().display().to_string()));
}

#[test]
fn scenario_help_in_empty_directory_succeeds() {
  let temp_dir = tempfile::tempdir().unwrap();

  assert!(session_for(temp_dir.path(), &["help"]).validate().is_ok());
}

#[test]
fn scenario_settings_file_accepts_anything() {
  let temp_dir = tempfile::tempdir().unwrap();
  fs::write(temp_dir.path().join("settings.ember"), "").unwrap();

  for requested in [&["build"][..], &["help"][..], &[][..], &["test", "publish"][..]] {
    assert!(session_for(temp_dir.path(), requested).validate().is_ok());
  }
}
