//! Markdown summary of a comparison report, for review workflows.

use crate::diff::report::CompareReport;

/// Render a Markdown summary of a [`CompareReport`].
///
/// Informational only; the structured report is authoritative.
pub fn render_human_summary(report: &CompareReport) -> String {
    let mut out = String::new();

    out.push_str("## Schema Compatibility\n\n");
    let verdict = if report.compatible {
        "Compatible"
    } else {
        "Incompatible"
    };
    out.push_str(&format!(
        "**Verdict**: {verdict}  \n**Differences**: {} ({} incompatible)\n\n",
        report.differences.len(),
        report.incompatible_count
    ));

    if report.differences.is_empty() {
        out.push_str("_No differences detected._\n");
        return out;
    }

    out.push_str("| | Kind | Path | Description |\n|---|---|---|---|\n");
    for difference in &report.differences {
        let marker = if difference.compatible { "ok" } else { "**breaking**" };
        out.push_str(&format!(
            "| {marker} | `{}` | `{}` | {} |\n",
            difference.kind,
            difference.path,
            escape_cell(&difference.description)
        ));
    }

    let breaking: Vec<_> = report.incompatible().collect();
    if !breaking.is_empty() {
        out.push_str("\n### Breaking Changes\n\n");
        for difference in breaking {
            out.push_str(&format!("- `{}` at `{}`\n", difference.kind, difference.path));
        }
    }

    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
