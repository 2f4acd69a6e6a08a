//! Pure pragma consistency evaluation (no IO).
//!
//! Input: artifacts already decoded into the typed AST.
//! Output: per-artifact summaries carrying the violations found.

#![forbid(unsafe_code)]

pub mod ast;
pub mod constraint;
pub mod error;
pub mod extract;
pub mod model;
pub mod policy;
pub mod skip;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use constraint::{ConstraintParseError, VersionReq};
pub use engine::{Validation, check_artifact, check_artifact_with, validate};
pub use error::DomainError;
