use pragma_check_types::PragmaCheckReportV1;

/// Pretty-printed report envelope with a trailing newline.
pub fn render_json(report: &PragmaCheckReportV1) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
