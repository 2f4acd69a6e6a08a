//! Rendering utilities for terminals and CI surfaces.

#![forbid(unsafe_code)]

mod gha;
mod json;
mod text;

pub use gha::render_github_annotations;
pub use json::render_json;
pub use text::{CONSISTENT_LINE, render_text};
