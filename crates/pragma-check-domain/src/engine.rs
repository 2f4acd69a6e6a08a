use crate::ast::{CompilerResolved, ImportResolver};
use crate::constraint::VersionReq;
use crate::error::DomainError;
use crate::extract::{self, ImportList, PragmaMap};
use crate::model::Artifact;
use crate::policy::EffectiveConfig;
use pragma_check_types::{ArtifactSummary, SourcePath, Violation};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Result of validating one artifact's import edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub edges_checked: u32,
    pub violations: Vec<Violation>,
}

/// Check one artifact against itself, trusting compiler-resolved imports.
pub fn check_artifact(
    artifact: &Artifact,
    cfg: &EffectiveConfig,
) -> Result<ArtifactSummary, DomainError> {
    check_artifact_with(artifact, cfg, &CompilerResolved)
}

pub fn check_artifact_with<R: ImportResolver + ?Sized>(
    artifact: &Artifact,
    cfg: &EffectiveConfig,
    resolver: &R,
) -> Result<ArtifactSummary, DomainError> {
    // Every constraint must be known before any edge is judged.
    let pragmas = extract::extract_pragmas(artifact, cfg)?;
    let validation = validate(&pragmas, extract::imports(artifact, &cfg.skip, resolver))?;

    let files_skipped = artifact
        .sources
        .iter()
        .filter(|u| cfg.skip.is_skipped(&u.path))
        .count() as u32;

    tracing::debug!(
        artifact = %artifact.label,
        files = artifact.sources.len(),
        skipped = files_skipped,
        constrained = pragmas.len(),
        edges = validation.edges_checked,
        violations = validation.violations.len(),
        "artifact checked"
    );

    Ok(ArtifactSummary {
        artifact: artifact.label.clone(),
        files_scanned: artifact.sources.len() as u32 - files_skipped,
        files_skipped,
        files_constrained: pragmas.len() as u32,
        edges_checked: validation.edges_checked,
        violations: validation.violations,
    })
}

/// For every edge `S -> T` where both ends are constrained, require that the
/// lowest version `S` accepts is also accepted by `T`.
///
/// Every importer constraint is parsed even when it has no constrained
/// imports, so a malformed pragma always aborts.
pub fn validate<'a, 'p, I>(pragmas: &'p PragmaMap, imports: I) -> Result<Validation, DomainError>
where
    I: IntoIterator<Item = ImportList<'a>>,
{
    let mut cache: HashMap<&'p str, VersionReq> = HashMap::new();
    let mut out = Validation::default();

    for ImportList { source, targets } in imports {
        let Some(source_constraint) = pragmas.get(source) else {
            continue;
        };
        let min_version = parse_cached(&mut cache, source, source_constraint)?.min_version();

        for target in targets {
            let Some(target_constraint) = pragmas.get(&target) else {
                continue;
            };
            out.edges_checked += 1;

            let target_req = parse_cached(&mut cache, &target, target_constraint)?;
            let consistent = min_version
                .as_ref()
                .is_some_and(|v| target_req.matches(v));
            if !consistent {
                out.violations.push(Violation {
                    source: source.clone(),
                    source_constraint: source_constraint.clone(),
                    imported: target,
                    imported_constraint: target_constraint.clone(),
                    min_version: min_version.as_ref().map(|v| v.to_string()),
                });
            }
        }
    }

    Ok(out)
}

fn parse_cached<'m, 'p>(
    cache: &'m mut HashMap<&'p str, VersionReq>,
    path: &SourcePath,
    constraint: &'p str,
) -> Result<&'m VersionReq, DomainError> {
    match cache.entry(constraint) {
        Entry::Occupied(e) => Ok(e.into_mut()),
        Entry::Vacant(e) => {
            let req = VersionReq::parse(constraint).map_err(|source| DomainError::Constraint {
                path: path.clone(),
                source,
            })?;
            Ok(e.insert(req))
        }
    }
}
