use crate::{SourcePath, ids};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for pragma-check JSON reports.
pub const SCHEMA_REPORT_V1: &str = "pragma_check.report.v1";

/// An import edge whose importer, compiled at its lowest allowed version, is
/// rejected by the imported file's pragma.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub source: SourcePath,
    pub source_constraint: String,
    pub imported: SourcePath,
    pub imported_constraint: String,
    /// Lowest version accepted by `source_constraint`; `None` when no version
    /// satisfies it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
}

impl Violation {
    pub fn code(&self) -> &'static str {
        match self.min_version {
            Some(_) => ids::CODE_INCOMPATIBLE_IMPORT,
            None => ids::CODE_UNSATISFIABLE_PRAGMA,
        }
    }

    /// `<source> uses <constraint> but depends on <imported> that requires <constraint>`
    pub fn message(&self) -> String {
        format!(
            "{} uses {} but depends on {} that requires {}",
            self.source, self.source_constraint, self.imported, self.imported_constraint
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Per-artifact counters and findings. Artifacts are checked in isolation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArtifactSummary {
    pub artifact: String,
    pub files_scanned: u32,
    pub files_skipped: u32,
    pub files_constrained: u32,
    pub edges_checked: u32,
    pub violations: Vec<Violation>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PragmaCheckData {
    pub artifacts_checked: u32,
    pub violations_total: u32,
    pub skip_patterns: Vec<String>,
}

/// Report envelope. Carries no timestamps so repeated runs are byte-identical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = PragmaCheckData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub verdict: Verdict,
    pub check_id: String,
    pub artifacts: Vec<ArtifactSummary>,
    pub data: TData,
}

pub type PragmaCheckReportV1 = ReportEnvelope<PragmaCheckData>;

impl PragmaCheckReportV1 {
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.artifacts.iter().flat_map(|a| a.violations.iter())
    }
}
