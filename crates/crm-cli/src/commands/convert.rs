//! Convert command implementation
//!
//! Reads the client CSV, prints per-row normalization warnings, and writes
//! the finished script in one go once every row has converted. A failed run
//! never leaves a partial output file behind.

use anyhow::{Context, Result};
use chrono::Local;
use clap::CommandFactory;
use crm_core::{
    render_script, transform_file, Config, HintsConfig, ScriptHeader, TableName,
    TransformOptions, Transformed,
};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ConvertArgs, GlobalArgs};
use crate::commands::common::{file_arg, rule, verbose, ExitCode};

/// Fully resolved settings for one run (CLI > config file > defaults)
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub csv_file: PathBuf,
    pub output: PathBuf,
    pub options: TransformOptions,
    pub hints: HintsConfig,
}

/// Execute the convert command
pub fn execute(args: &ConvertArgs, global: &GlobalArgs) -> Result<()> {
    print_banner();

    let Some(csv_file) = &args.csv_file else {
        print_usage();
        return Err(ExitCode(1).into());
    };

    let config = load_config(global, Path::new("."))?;
    let settings = resolve_settings(csv_file, args, config)?;

    verbose(
        global.verbose,
        &format!(
            "Table: {}, strict: {}, output: {}",
            settings.options.table,
            settings.options.strict,
            settings.output.display()
        ),
    );

    println!("Input file: {}", settings.csv_file.display());
    println!("Owner ID: {}", settings.options.owner_id);
    println!();
    println!("Converting CSV data...");

    let transformed = transform_file(&settings.csv_file, &settings.options)?;
    for warning in &transformed.warnings {
        println!("  warning: {}", warning);
    }

    write_script(&settings, &transformed)?;

    print_summary(&settings, transformed.row_count);
    Ok(())
}

/// Load the explicit `--config` file, or discover one in `dir`.
fn load_config(global: &GlobalArgs, dir: &Path) -> Result<Config> {
    if let Some(path) = &global.config {
        verbose(global.verbose, &format!("Loading config: {}", path.display()));
        return Config::load(path).context("Failed to load configuration file");
    }

    let (config, path) =
        Config::discover(dir).context("Failed to load project configuration")?;
    match path {
        Some(path) => verbose(global.verbose, &format!("Loaded config: {}", path.display())),
        None => verbose(global.verbose, "No config file found, using defaults"),
    }
    Ok(config)
}

/// Merge command-line overrides onto the loaded configuration.
pub(crate) fn resolve_settings(
    csv_file: &Path,
    args: &ConvertArgs,
    config: Config,
) -> Result<Settings> {
    let mut options = config.transform_options(args.owner_id);
    if let Some(table) = &args.table {
        options.table = TableName::try_new(table.as_str())
            .with_context(|| format!("Invalid table name '{}'", table))?;
    }
    options.strict |= args.strict;

    Ok(Settings {
        csv_file: csv_file.to_path_buf(),
        output: args.output.clone().unwrap_or(config.output),
        options,
        hints: config.hints,
    })
}

/// Render the header and statements and write them to the output path,
/// replacing any existing file.
pub(crate) fn write_script(settings: &Settings, transformed: &Transformed) -> Result<()> {
    let header = ScriptHeader {
        source: settings.csv_file.display().to_string(),
        owner_id: settings.options.owner_id,
        record_count: transformed.row_count,
        generated_at: Local::now().naive_local(),
    };
    let script = render_script(&header, &transformed.sql());
    log::debug!(
        "Writing {} statements ({} bytes) to {}",
        transformed.statements.len(),
        script.len(),
        settings.output.display()
    );

    fs::write(&settings.output, script)
        .with_context(|| format!("Failed to write {}", settings.output.display()))
}

fn print_banner() {
    println!("{}", rule());
    println!("  CRM client import tool");
    println!("{}", rule());
    println!();
}

fn print_usage() {
    let mut cmd = Cli::command();
    println!("{}", cmd.render_usage());
    println!();
    println!("Arguments:");
    println!("  <CSV_FILE>   CSV file of client records");
    println!("  [OWNER_ID]   Owning user id (default: 2)");
    println!();
    println!("Examples:");
    println!("  crm-seed my-clients.csv");
    println!("  crm-seed my-clients.csv 3");
}

fn print_summary(settings: &Settings, row_count: usize) {
    let file = file_arg(&settings.output);
    let hints = &settings.hints;

    println!("Conversion complete!");
    println!();
    println!("Summary:");
    println!("  - Total records: {}", row_count);
    println!("  - Output file: {}", settings.output.display());
    println!();
    println!("Next steps:");
    println!();
    println!("  Import into the local database:");
    println!(
        "    npx wrangler d1 execute {} --local --file={}",
        hints.local_database, file
    );
    println!();
    println!("  Import into the production database:");
    println!(
        "    npx wrangler d1 execute {} --remote --file={}",
        hints.remote_database, file
    );
    println!();
    println!("  Verify the import:");
    println!(
        "    npx wrangler d1 execute {} --remote \\",
        hints.remote_database
    );
    println!(
        "      --command=\"SELECT COUNT(*) FROM {}\"",
        settings.options.table
    );
    println!();
    println!("{}", rule());
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;
