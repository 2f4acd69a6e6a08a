use pragma_check_types::PragmaCheckReportV1;

/// Printed when no artifact has a violation.
pub const CONSISTENT_LINE: &str = "Pragma directives are consistent.";

/// One `- <message>` line per violation, across artifacts in input order.
pub fn render_text(report: &PragmaCheckReportV1) -> String {
    let mut out = String::new();
    for v in report.violations() {
        out.push_str("- ");
        out.push_str(&v.message());
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str(CONSISTENT_LINE);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{report, summary, violation};

    #[test]
    fn consistent_report_prints_confirmation() {
        let r = report(vec![summary("a.json", vec![])]);
        insta::assert_snapshot!(render_text(&r), @"Pragma directives are consistent.");
    }

    #[test]
    fn violations_print_one_line_each_across_artifacts() {
        let r = report(vec![
            summary(
                "build-info/a.json",
                vec![violation(
                    "contracts/A.sol",
                    ">=0.8.0<0.9.0",
                    "contracts/B.sol",
                    "^0.8.5",
                    Some("0.8.0"),
                )],
            ),
            summary("build-info/b.json", vec![]),
            summary(
                "build-info/c.json",
                vec![violation("contracts/X.sol", ">0.8.0<0.5.0", "contracts/Y.sol", "*", None)],
            ),
        ]);

        insta::assert_snapshot!(render_text(&r), @r"
        - contracts/A.sol uses >=0.8.0<0.9.0 but depends on contracts/B.sol that requires ^0.8.5
        - contracts/X.sol uses >0.8.0<0.5.0 but depends on contracts/Y.sol that requires *
        ");
    }
}
