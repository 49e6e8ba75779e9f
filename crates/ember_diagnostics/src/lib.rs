//! Failure presentation for the Ember build tool.
//!
//! Failures are plain `std::error::Error` values. A failure that knows how to
//! fix itself exposes [`ResolutionAware`] through [`Failure::resolution_aware`],
//! and [`FailureReporter`] collects its suggestions next to the generic ones.

pub mod client;
pub mod docs;
pub mod report;
pub mod resolution;
pub mod style;

pub use client::{ClientMetaData, ToolClientMetaData};
pub use docs::{DocumentationLookup, DocumentationRegistry};
pub use report::{FailureReport, FailureReporter};
pub use resolution::{Failure, Resolution, ResolutionAware, ResolutionContext};
pub use style::{Style, StyledBuffer, StyledTextOutput};
