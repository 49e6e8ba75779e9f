//! Build layout discovery.
//!
//! This crate answers "where is the build root, and does it have a build
//! definition?":
//! - Locate a settings file in the current directory or its ancestors
//! - Locate the build script next to it
//! - Report whether the build definition is missing
//!
//! # Example
//!
//! ```ignore
//! use ember_layout::{BuildLayoutConfig, FsLayoutResolver, LayoutResolver};
//!
//! let config = BuildLayoutConfig::new(std::env::current_dir()?);
//! let layout = FsLayoutResolver.resolve(&config)?;
//! if layout.is_build_definition_missing() {
//!     println!("not a build: {}", layout.root_dir().display());
//! }
//! ```

pub mod errors;
pub mod find;
pub mod layout;
pub mod resolver;

pub use errors::LayoutError;
pub use find::{find_build_script, find_settings_file, find_settings_root, BUILD_SCRIPT_NAMES, SETTINGS_FILE_NAMES};
pub use layout::{BuildLayout, BuildLayoutConfig};
pub use resolver::{FsLayoutResolver, LayoutResolver};
