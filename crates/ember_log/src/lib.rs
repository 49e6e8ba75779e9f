//! Logging utilities for the Ember build tool.
//!
//! Provides macros for:
//! - Phase logging (`phase_log!`, `phase_ok!`, `phase_warn!`)
//! - Debug traces by category (`trace_dbg!`)
//! - Verbose logging (`log_dbg!`, `log_trc!`)
//!
//! All output goes to stderr so it never mixes with task output on stdout.

use ember_config::{DebugTrace, LogConfig};

#[doc(hidden)]
pub use colored;

pub fn effective_verbose(config: &LogConfig) -> u8 {
  if config.quiet {
    return 0;
  }

  if config.debug && config.verbose < 2 {
    return 2;
  }

  config.verbose
}

pub fn log_phase(config: &LogConfig) -> bool {
  !config.quiet
}

pub fn log_debug(config: &LogConfig) -> bool {
  effective_verbose(config) >= 2
}

pub fn log_trace(config: &LogConfig) -> bool {
  effective_verbose(config) >= 3
}

pub fn debug_trace_enabled(
  config: &LogConfig,
  trace: DebugTrace,
) -> bool {
  !config.quiet && (config.debug || config.debug_trace.contains(&trace))
}

/// Returns lowercase name of a DebugTrace variant for log output.
pub fn trace_name(trace: DebugTrace) -> &'static str {
  match trace {
    DebugTrace::Layout => "layout",
    DebugTrace::Validate => "validate",
    DebugTrace::Session => "session",
  }
}

/// Log a build phase message with an arrow prefix.
///
/// # Examples
///
/// ```ignore
/// phase_log!(&config, "Resolving layout in {}", dir.display());
/// phase_log!(&config, indent = 8, "Sub-step {}", name);
/// ```
#[macro_export]
macro_rules! phase_log {
  ($config:expr, indent = $indent:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use $crate::colored::Colorize;
      eprintln!(
        "{:indent$}{} {}",
        "",
        "-->".bright_green().bold(),
        format!($fmt $(, $arg)*),
        indent = $indent
      );
    }
  }};

  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    $crate::phase_log!($config, indent = 4, $fmt $(, $arg)*);
  }};
}

/// Log a successful phase completion (green arrow, no indent).
#[macro_export]
macro_rules! phase_ok {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use $crate::colored::Colorize;
      eprintln!("{} {}", "-->".bright_green().bold(), format!($fmt $(, $arg)*));
    }
  }};
}

/// Log a warning during a phase (yellow arrow, no indent).
#[macro_export]
macro_rules! phase_warn {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_phase($config) {
      use $crate::colored::Colorize;
      eprintln!("{} {}", "-->".bright_yellow().bold(), format!($fmt $(, $arg)*));
    }
  }};
}

/// Log a debug trace for a specific component.
///
/// Output format: `debug[component]: message`
///
/// # Examples
///
/// ```ignore
/// trace_dbg!(&config, DebugTrace::Layout, "settings file at {}", path.display());
/// // Output: debug[layout]: settings file at /home/u/proj/settings.ember.toml
/// ```
#[macro_export]
macro_rules! trace_dbg {
  ($config:expr, $trace:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::debug_trace_enabled($config, $trace) {
      eprintln!(
        "debug[{}]: {}",
        $crate::trace_name($trace),
        format!($fmt $(, $arg)*)
      );
    }
  }};
}

/// Log a verbose debug message (verbosity >= 2).
#[macro_export]
macro_rules! log_dbg {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_debug($config) {
      eprintln!("debug: {}", format!($fmt $(, $arg)*));
    }
  }};
}

/// Log a trace message (verbosity >= 3).
#[macro_export]
macro_rules! log_trc {
  ($config:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
    if $crate::log_trace($config) {
      eprintln!("trace: {}", format!($fmt $(, $arg)*));
    }
  }};
}
