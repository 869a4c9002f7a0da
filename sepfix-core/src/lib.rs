//! Embeddable scan/fix pipeline for sepfix.
//!
//! Clap-free and I/O-agnostic: every filesystem touch goes through a port
//! trait, so the pipeline runs the same against a real tree or an
//! in-memory one.
//!
//! # Port traits
//!
//! - [`ports::SourceTree`]: discovery of candidate files under a target
//! - [`ports::SourceStore`]: tolerant reads and whole-file writes
//! - [`ports::WritePort`]: run artifact output
//!
//! # Entry points
//!
//! - [`pipeline::run_fix`]: scan targets and repair (or preview) them
//! - [`pipeline::write_run_artifacts`]: write report.json, report.md, and
//!   patch.diff for a finished run

pub mod adapters;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use error::{FileFailure, ToolError};
pub use pipeline::{RunOutcome, run_fix, write_run_artifacts};
pub use settings::FixSettings;
