//! Compare command
//!
//! Usage: schemadiff compare <ORIGINAL> <UPDATE> [--policy <strict|lenient|none|FILE>]
//!        [--draft <V>] [--original-draft <V>] [--update-draft <V>]
//!        [--format <text|json|markdown>] [--output <FILE>]

use clap::{Args, ValueEnum};
use schemadiff_core::errors::{ExError, SchemaError};
use schemadiff_core::{
    check_compatibility, load_str, render_human_summary, CompareReport, CompatibilityPolicy,
    DraftVersion, SchemaDocument,
};
use std::path::{Path, PathBuf};

/// Exit status when the update is compatible
pub const EXIT_COMPATIBLE: i32 = 0;
/// Exit status when the policy rejects at least one difference
pub const EXIT_INCOMPATIBLE: i32 = 1;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Original schema file
    pub original: PathBuf,

    /// Updated schema file
    pub update: PathBuf,

    /// Policy: strict, lenient, none, or a TOML policy file
    #[arg(short, long, default_value = "strict")]
    pub policy: String,

    /// Draft for both schemas (default: detected from `$schema`, else draft-07)
    #[arg(long)]
    pub draft: Option<DraftVersion>,

    /// Draft for the original schema, overrides --draft
    #[arg(long)]
    pub original_draft: Option<DraftVersion>,

    /// Draft for the updated schema, overrides --draft
    #[arg(long)]
    pub update_draft: Option<DraftVersion>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Markdown,
}

/// Execute compare command, returning the process exit status
pub fn execute(args: CompareArgs) -> Result<i32, ExError> {
    let policy = CompatibilityPolicy::from_selector(&args.policy)?;
    let original = read_schema(&args.original, args.original_draft.or(args.draft))?;
    let update = read_schema(&args.update, args.update_draft.or(args.draft))?;

    let report = check_compatibility(&policy, &original, &update);
    let rendered = render(&report, args.format)?;

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, rendered).map_err(SchemaError::from)?;
    } else {
        print!("{}", rendered);
    }

    Ok(if report.is_compatible() {
        EXIT_COMPATIBLE
    } else {
        EXIT_INCOMPATIBLE
    })
}

fn read_schema(path: &Path, draft: Option<DraftVersion>) -> Result<SchemaDocument, ExError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ExError::from(SchemaError::from(e)).with_pointer(path.display().to_string())
    })?;
    Ok(load_str(&text, draft)?)
}

fn render(report: &CompareReport, format: Format) -> Result<String, ExError> {
    match format {
        Format::Text => Ok(render_text(report)),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(report).map_err(SchemaError::from)?;
            json.push('\n');
            Ok(json)
        }
        Format::Markdown => Ok(render_human_summary(report)),
    }
}

/// One line per difference, then the verdict
fn render_text(report: &CompareReport) -> String {
    let mut out = String::new();
    for difference in &report.differences {
        let marker = if difference.compatible { "ok      " } else { "BREAKING" };
        out.push_str(&format!("{} {} {}\n", marker, difference.kind, difference.path));
    }
    if report.is_compatible() {
        out.push_str(&format!(
            "compatible ({} differences)\n",
            report.differences.len()
        ));
    } else {
        out.push_str(&format!(
            "incompatible ({} of {} differences breaking)\n",
            report.incompatible_count,
            report.differences.len()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemadiff_core::{Difference, DifferenceKind};

    #[test]
    fn test_render_text_marks_breaking_lines() {
        let report = CompareReport::new(
            CompatibilityPolicy::strict(),
            vec![
                Difference::new(DifferenceKind::MaxLengthIncreased, "#/maxLength"),
                Difference::new(DifferenceKind::TypeChanged, "#/properties/a"),
            ],
        );
        let text = render_text(&report);
        assert!(text.contains("ok       MAX_LENGTH_INCREASED #/maxLength\n"));
        assert!(text.contains("BREAKING TYPE_CHANGED #/properties/a\n"));
        assert!(text.ends_with("incompatible (1 of 2 differences breaking)\n"));
    }

    #[test]
    fn test_render_text_without_differences() {
        let report = CompareReport::new(CompatibilityPolicy::strict(), vec![]);
        assert_eq!(render_text(&report), "compatible (0 differences)\n");
    }
}
