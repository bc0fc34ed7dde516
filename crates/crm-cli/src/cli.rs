//! CLI argument definitions using clap derive API

use clap::{Args, Parser};
use std::path::PathBuf;

/// crm-seed - Convert a CSV export of CRM clients into SQL INSERT statements
#[derive(Parser, Debug)]
#[command(name = "crm-seed")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    crm-seed my-clients.csv
    crm-seed my-clients.csv 3
    crm-seed my-clients.csv 3 --strict -o seed.sql

NOTE:
    temperature_score is written unquoted. Without --strict it is not
    checked, so untrusted input can produce broken or unsafe SQL.")]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Conversion arguments
    #[command(flatten)]
    pub convert: ConvertArgs,
}

/// Options that shape how the run is configured and reported
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path (default: ./crm-seed.yml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the conversion
#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// CSV file of client records
    pub csv_file: Option<PathBuf>,

    /// Owning user id written into every row [default: 2]
    #[arg(allow_negative_numbers = true)]
    pub owner_id: Option<i64>,

    /// Output file [default: import.sql]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target table [default: clients]
    #[arg(long)]
    pub table: Option<String>,

    /// Reject invalid stage/temperature values instead of substituting defaults
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
