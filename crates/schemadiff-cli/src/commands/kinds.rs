//! Kinds command
//!
//! Usage: schemadiff kinds [--policy <strict|lenient|none|FILE>] [--breaking-only]

use clap::Args;
use schemadiff_core::errors::ExError;
use schemadiff_core::{CompatibilityPolicy, DifferenceKind};
use strum::IntoEnumIterator;

#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Policy: strict, lenient, none, or a TOML policy file
    #[arg(short, long, default_value = "strict")]
    pub policy: String,

    /// Only list kinds the policy treats as breaking
    #[arg(long)]
    pub breaking_only: bool,
}

/// Execute kinds command
pub fn execute(args: KindsArgs) -> Result<i32, ExError> {
    let policy = CompatibilityPolicy::from_selector(&args.policy)?;
    print!("{}", render_kinds(&policy, args.breaking_only));
    Ok(0)
}

fn render_kinds(policy: &CompatibilityPolicy, breaking_only: bool) -> String {
    let mut out = String::new();
    for kind in DifferenceKind::iter() {
        let compatible = policy.is_compatible(kind);
        if breaking_only && compatible {
            continue;
        }
        let verdict = if compatible { "compatible" } else { "breaking" };
        out.push_str(&format!("{:<64} {}\n", kind.to_string(), verdict));
    }
    out
}
