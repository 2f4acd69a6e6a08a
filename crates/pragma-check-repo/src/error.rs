use camino::Utf8PathBuf;

/// Failure to turn an input path into an artifact. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read artifact {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk artifact directory {path}")]
    Walk {
        path: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("parse artifact {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {path}: {reason}")]
    Shape { path: Utf8PathBuf, reason: String },
}

impl LoadError {
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            LoadError::Read { path, .. }
            | LoadError::Walk { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Shape { path, .. } => path,
        }
    }
}
