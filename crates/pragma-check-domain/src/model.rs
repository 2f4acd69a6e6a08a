use crate::ast::Node;
use pragma_check_types::SourcePath;

/// One compiler run: every source unit it compiled, in document order.
#[derive(Clone, Debug, Default)]
pub struct Artifact {
    /// How the artifact was named on input; used in reports and logs.
    pub label: String,
    pub sources: Vec<SourceUnit>,
}

#[derive(Clone, Debug)]
pub struct SourceUnit {
    pub path: SourcePath,
    pub ast: Node,
}

impl Artifact {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sources: Vec::new(),
        }
    }

    pub fn with_source(mut self, path: impl AsRef<str>, ast: Node) -> Self {
        self.sources.push(SourceUnit {
            path: SourcePath::new(path),
            ast,
        });
        self
    }
}
