//! Repository adapters: locate compiler artifacts and decode them into the typed AST.
//!
//! This crate is allowed to do filesystem IO. Everything downstream of
//! [`load_artifacts`] is pure.

#![forbid(unsafe_code)]

mod discover;
mod error;
mod parse;

use camino::{Utf8Path, Utf8PathBuf};
use pragma_check_domain::model::Artifact;
use rayon::prelude::*;

pub use discover::expand_inputs;
pub use error::LoadError;
pub use parse::parse_artifact;

/// Read and decode one artifact. `path` is resolved against `root` and kept
/// verbatim as the artifact label.
pub fn load_artifact(root: &Utf8Path, path: &Utf8Path) -> Result<Artifact, LoadError> {
    let abs = root.join(path);
    let text = std::fs::read_to_string(&abs).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact = parse_artifact(path, &text)?;
    tracing::debug!(artifact = %path, sources = artifact.sources.len(), "artifact loaded");
    Ok(artifact)
}

/// Expand and load every input. Artifacts are decoded in parallel but returned
/// in input order; the first failing input (in that order) is reported.
pub fn load_artifacts(root: &Utf8Path, inputs: &[Utf8PathBuf]) -> Result<Vec<Artifact>, LoadError> {
    let files = expand_inputs(root, inputs)?;
    let loaded: Vec<Result<Artifact, LoadError>> = files
        .par_iter()
        .map(|f| load_artifact(root, f))
        .collect();
    loaded.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_artifact_never_panics(text in ".{0,256}") {
            let _ = parse_artifact(Utf8Path::new("fuzz.json"), &text);
        }
    }
}
