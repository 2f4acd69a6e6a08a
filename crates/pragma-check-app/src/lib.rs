//! Use case orchestration for pragma-check.
//!
//! This crate provides the application layer: it loads artifacts through the
//! repo crate, evaluates them with the domain crate and hands the report to
//! the render crate.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use render::render_report;
