//! The `check` use case: load artifacts, validate each one, produce a report.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use pragma_check_settings::{Overrides, PragmaCheckConfigV1, ResolvedConfig};
use pragma_check_types::{
    PragmaCheckData, PragmaCheckReportV1, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict, ids,
};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Root that relative artifact paths are resolved against.
    pub project_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Artifact files or directories, in the order given.
    pub artifacts: Vec<Utf8PathBuf>,
}

#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: PragmaCheckReportV1,
    pub resolved_config: ResolvedConfig,
}

pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let cfg = if input.config_text.trim().is_empty() {
        PragmaCheckConfigV1::default()
    } else {
        pragma_check_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        pragma_check_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    anyhow::ensure!(!input.artifacts.is_empty(), "no artifacts given");

    let artifacts = pragma_check_repo::load_artifacts(input.project_root, &input.artifacts)
        .context("load artifacts")?;

    // Artifacts are independent; each is validated against itself only.
    let mut summaries = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let summary = pragma_check_domain::check_artifact(artifact, &resolved.effective)
            .with_context(|| format!("check artifact {}", artifact.label))?;
        summaries.push(summary);
    }

    let violations_total: u32 = summaries.iter().map(|s| s.violations.len() as u32).sum();
    let verdict = if violations_total == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    tracing::info!(
        artifacts = summaries.len(),
        violations = violations_total,
        "check finished"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "pragma-check".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        verdict,
        check_id: ids::CHECK_PRAGMA_CONSISTENCY.to_string(),
        data: PragmaCheckData {
            artifacts_checked: summaries.len() as u32,
            violations_total,
            skip_patterns: resolved.effective.skip.patterns().to_vec(),
        },
        artifacts: summaries,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass, 1 = violations found.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
