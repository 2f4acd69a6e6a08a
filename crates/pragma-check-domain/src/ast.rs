//! Typed view of a compiled source unit's syntax tree.
//!
//! Only two node kinds matter to the checker; everything else collapses into
//! [`Node::Scope`] so the tree keeps document order without modelling the
//! whole grammar.

use pragma_check_types::SourcePath;

/// Pragma kind that declares the accepted compiler versions.
pub const LANGUAGE_PRAGMA: &str = "solidity";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Pragma(PragmaDirective),
    Import(ImportDirective),
    Scope(Vec<Node>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PragmaDirective {
    /// Raw tokens: `["solidity", "^", "0.8", ".20"]`.
    pub literals: Vec<String>,
}

impl PragmaDirective {
    pub fn new<I, S>(literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            literals: literals.into_iter().map(Into::into).collect(),
        }
    }

    /// The version constraint if this is a language-version pragma. The
    /// remaining tokens are joined without a separator.
    pub fn language_constraint(&self) -> Option<String> {
        let (first, rest) = self.literals.split_first()?;
        (first == LANGUAGE_PRAGMA).then(|| rest.concat())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDirective {
    /// Source unit name the compiler resolved the import to.
    pub absolute_path: String,
    /// Path as written in the import statement, when available.
    pub file: Option<String>,
}

pub trait Visitor {
    fn visit_pragma(&mut self, _pragma: &PragmaDirective) {}
    fn visit_import(&mut self, _import: &ImportDirective) {}
}

/// Depth-first walk in document order.
pub fn walk<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    match node {
        Node::Pragma(p) => visitor.visit_pragma(p),
        Node::Import(i) => visitor.visit_import(i),
        Node::Scope(children) => {
            for child in children {
                walk(child, visitor);
            }
        }
    }
}

/// Maps an import declaration to the source unit it refers to.
///
/// Module resolution (remappings, relative paths, aliases) belongs to the
/// compiler; implementations decide how much of it to trust.
pub trait ImportResolver {
    fn resolve(&self, importer: &SourcePath, import: &ImportDirective) -> Option<SourcePath>;
}

/// Trusts the `absolutePath` the compiler attached to each import.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompilerResolved;

impl ImportResolver for CompilerResolved {
    fn resolve(&self, _importer: &SourcePath, import: &ImportDirective) -> Option<SourcePath> {
        if import.absolute_path.is_empty() {
            return None;
        }
        Some(SourcePath::new(&import.absolute_path))
    }
}
