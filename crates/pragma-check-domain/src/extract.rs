use crate::ast::{self, ImportDirective, ImportResolver, PragmaDirective, Visitor};
use crate::error::DomainError;
use crate::model::Artifact;
use crate::policy::{DuplicatePragma, EffectiveConfig};
use crate::skip::SkipSet;
use pragma_check_types::SourcePath;
use std::collections::BTreeMap;

/// Source path -> version constraint string. Files without a language pragma
/// are absent.
pub type PragmaMap = BTreeMap<SourcePath, String>;

/// The resolved imports of one source unit, in document order. Duplicates are
/// kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportList<'a> {
    pub source: &'a SourcePath,
    pub targets: Vec<SourcePath>,
}

#[derive(Default)]
struct PragmaCollector {
    constraints: Vec<String>,
}

impl Visitor for PragmaCollector {
    fn visit_pragma(&mut self, pragma: &PragmaDirective) {
        if let Some(c) = pragma.language_constraint() {
            self.constraints.push(c);
        }
    }
}

struct ImportCollector<'r, R: ?Sized> {
    importer: &'r SourcePath,
    resolver: &'r R,
    targets: Vec<SourcePath>,
}

impl<R: ImportResolver + ?Sized> Visitor for ImportCollector<'_, R> {
    fn visit_import(&mut self, import: &ImportDirective) {
        match self.resolver.resolve(self.importer, import) {
            Some(target) => self.targets.push(target),
            None => tracing::debug!(
                importer = %self.importer,
                file = import.file.as_deref().unwrap_or(""),
                "import has no resolved path"
            ),
        }
    }
}

pub fn extract_pragmas(
    artifact: &Artifact,
    cfg: &EffectiveConfig,
) -> Result<PragmaMap, DomainError> {
    let mut out = PragmaMap::new();

    for unit in &artifact.sources {
        if cfg.skip.is_skipped(&unit.path) {
            continue;
        }

        let mut collector = PragmaCollector::default();
        ast::walk(&unit.ast, &mut collector);

        let mut found = collector.constraints.into_iter();
        let Some(first) = found.next() else { continue };

        // Identical repeats drop nothing and are tolerated in every mode.
        for other in found.filter(|c| *c != first) {
            match cfg.duplicate_pragma {
                DuplicatePragma::Error => {
                    return Err(DomainError::DuplicatePragma {
                        path: unit.path.clone(),
                        first: first.clone(),
                        second: other,
                    });
                }
                DuplicatePragma::KeepFirst => tracing::warn!(
                    path = %unit.path,
                    kept = %first,
                    dropped = %other,
                    "multiple version pragmas; keeping the first"
                ),
            }
        }

        out.insert(unit.path.clone(), first);
    }

    Ok(out)
}

/// Lazily walks every non-skipped source unit for its imports.
pub fn imports<'a, R>(
    artifact: &'a Artifact,
    skip: &'a SkipSet,
    resolver: &'a R,
) -> impl Iterator<Item = ImportList<'a>> + 'a
where
    R: ImportResolver + ?Sized,
{
    artifact
        .sources
        .iter()
        .filter(move |unit| !skip.is_skipped(&unit.path))
        .map(move |unit| {
            let mut collector = ImportCollector {
                importer: &unit.path,
                resolver,
                targets: Vec::new(),
            };
            ast::walk(&unit.ast, &mut collector);
            ImportList {
                source: &unit.path,
                targets: collector.targets,
            }
        })
}
