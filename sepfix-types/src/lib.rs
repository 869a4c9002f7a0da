//! Shared schema types for sepfix artifacts.
//!
//! Everything in this crate is serialized to disk as part of a run: the
//! JSON report, the per-line fix records inside it, and the artifact
//! pointers. Treat changes as schema changes. Adding an optional field is
//! fine; renaming or re-typing an existing one needs a new schema id.

pub mod fix;
pub mod report;

/// Stable schema identifiers for artifacts written by sepfix.
pub mod schema {
    /// The run report (`report.json`).
    pub const SEPFIX_REPORT_V1: &str = "sepfix.report.v1";
}
