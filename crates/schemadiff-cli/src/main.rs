//! schemadiff CLI
//!
//! Command-line interface for JSON Schema compatibility checks
//!
//! Exit status: 0 when the update is compatible, 1 when it is not, 2 on errors.

use clap::{Parser, Subcommand, ValueEnum};
use schemadiff_core::logging_facility::{init, Profile};

mod commands;

/// Exit status for usage, I/O and schema errors
const EXIT_ERROR: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "schemadiff")]
#[command(about = "schemadiff - JSON Schema compatibility checks", long_about = None)]
struct Cli {
    /// Log output written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogMode::Off)]
    log: LogMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogMode {
    Dev,
    Prod,
    Off,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare an original schema with its update
    Compare(commands::compare::CompareArgs),
    /// List every difference kind with its verdict under a policy
    Kinds(commands::kinds::KindsArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogMode::Dev => init(Profile::Development),
        LogMode::Prod => init(Profile::Production),
        LogMode::Off => {}
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Kinds(args) => commands::kinds::execute(args),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}
