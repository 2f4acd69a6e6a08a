use pragma_check_types::PragmaCheckReportV1;

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error file={source}::[{check_id}:{code}] {message}`
pub fn render_github_annotations(report: &PragmaCheckReportV1) -> Vec<String> {
    report
        .violations()
        .map(|v| {
            let message = format!("[{}:{}] {}", report.check_id, v.code(), v.message());
            format!(
                "::error file={}::{}",
                escape_property(v.source.as_str()),
                escape_data(&message)
            )
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
