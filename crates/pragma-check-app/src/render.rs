//! Render use case: format an in-memory report for stdout.

use anyhow::Context;
use pragma_check_settings::OutputFormat;
use pragma_check_types::PragmaCheckReportV1;

pub fn render_report(report: &PragmaCheckReportV1, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(pragma_check_render::render_text(report)),
        OutputFormat::Github => {
            let lines = pragma_check_render::render_github_annotations(report);
            if lines.is_empty() {
                return Ok(pragma_check_render::render_text(report));
            }
            Ok(lines.into_iter().map(|l| l + "\n").collect())
        }
        OutputFormat::Json => pragma_check_render::render_json(report).context("serialize report"),
    }
}
