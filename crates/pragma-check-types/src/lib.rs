//! Stable DTOs and IDs used across the pragma-check workspace.
//!
//! This crate is intentionally boring:
//! - canonical source path handling
//! - the violation record and the emitted JSON report
//! - stable string IDs and codes

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;

pub use path::SourcePath;
pub use report::{
    ArtifactSummary, PragmaCheckData, PragmaCheckReportV1, ReportEnvelope, SCHEMA_REPORT_V1,
    ToolMeta, Verdict, Violation,
};
