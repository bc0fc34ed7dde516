//! Row transformer: client CSV rows to INSERT statements
//!
//! The transformation is a pure function of the input rows and
//! [`TransformOptions`]. Out-of-range `stage` and `temperature_level` values
//! are either coerced to their defaults (recording a
//! [`NormalizationWarning`]) or, in strict mode, rejected.
//!
//! `temperature_score` is spliced into the statement unquoted. In lenient
//! mode it is not checked, so a non-numeric score yields a statement that
//! fails at import time. Inputs from untrusted sources should be converted
//! with strict mode enabled.

use crate::error::{CoreError, CoreResult};
use crate::record::{ClientRecord, ColumnMap, Stage, TemperatureLevel};
use crate::sql_utils::{is_numeric_literal, quote_literal};
use crate::table_name::TableName;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Owning user id written into every row's `user_id`
    pub owner_id: i64,

    /// Table the statements insert into
    pub table: TableName,

    /// Reject invalid values instead of substituting defaults
    pub strict: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            owner_id: 2,
            table: TableName::default(),
            strict: false,
        }
    }
}

/// An out-of-range value that was replaced by its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationWarning {
    /// 1-based data row number (header excluded)
    pub row: usize,

    /// Column the value came from
    pub field: &'static str,

    /// The offending input value
    pub value: String,

    /// The value written instead
    pub replacement: &'static str,
}

impl fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: invalid {} value '{}', using default '{}'",
            self.row, self.field, self.value, self.replacement
        )
    }
}

/// Result of converting a whole file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformed {
    /// One INSERT statement per data row, in input order
    pub statements: Vec<String>,

    /// Substitutions made in lenient mode, in input order
    pub warnings: Vec<NormalizationWarning>,

    /// Number of data rows read
    pub row_count: usize,
}

impl Transformed {
    /// All statements joined by a blank line.
    pub fn sql(&self) -> String {
        self.statements.join("\n\n")
    }
}

/// Convert the CSV file at `path`.
///
/// The file is held open only while rows are read.
pub fn transform_file(path: &Path, options: &TransformOptions) -> CoreResult<Transformed> {
    if !path.exists() {
        return Err(CoreError::InputNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    transform_reader(file, options)
}

/// Convert CSV text read from `reader`.
///
/// The first row must be a header naming at least the required columns.
/// Rows may be shorter or longer than the header: missing trailing cells
/// read as if the column were absent and extra cells are ignored. Any
/// decoding failure aborts the whole conversion.
pub fn transform_reader<R: io::Read>(
    reader: R,
    options: &TransformOptions,
) -> CoreResult<Transformed> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;
    let mut out = Transformed::default();

    for (idx, result) in csv_reader.records().enumerate() {
        let row = idx + 1;
        let record = ClientRecord::from_row(&columns, &result?);
        log::debug!("Converting row {}: {}", row, record.name);

        let stage = resolve_stage(row, &record.stage, options.strict, &mut out.warnings)?;
        let level = resolve_temperature_level(
            row,
            &record.temperature_level,
            options.strict,
            &mut out.warnings,
        )?;
        if options.strict && !is_numeric_literal(&record.temperature_score) {
            return Err(CoreError::InvalidValue {
                row,
                field: "temperature_score",
                value: record.temperature_score,
            });
        }

        out.statements
            .push(insert_statement(&record, stage, level, options));
        out.row_count = row;
    }

    Ok(out)
}

fn resolve_stage(
    row: usize,
    value: &str,
    strict: bool,
    warnings: &mut Vec<NormalizationWarning>,
) -> CoreResult<Stage> {
    if let Some(stage) = Stage::from_name(value) {
        return Ok(stage);
    }
    let fallback = Stage::default();
    substitute(row, "stage", value, fallback.as_str(), strict, warnings)?;
    Ok(fallback)
}

fn resolve_temperature_level(
    row: usize,
    value: &str,
    strict: bool,
    warnings: &mut Vec<NormalizationWarning>,
) -> CoreResult<TemperatureLevel> {
    if let Some(level) = TemperatureLevel::from_name(value) {
        return Ok(level);
    }
    let fallback = TemperatureLevel::default();
    substitute(
        row,
        "temperature_level",
        value,
        fallback.as_str(),
        strict,
        warnings,
    )?;
    Ok(fallback)
}

fn substitute(
    row: usize,
    field: &'static str,
    value: &str,
    replacement: &'static str,
    strict: bool,
    warnings: &mut Vec<NormalizationWarning>,
) -> CoreResult<()> {
    if strict {
        return Err(CoreError::InvalidValue {
            row,
            field,
            value: value.to_string(),
        });
    }

    let warning = NormalizationWarning {
        row,
        field,
        value: value.to_string(),
        replacement,
    };
    log::warn!("{}", warning);
    warnings.push(warning);
    Ok(())
}

/// Render the fixed-shape INSERT for one validated row.
fn insert_statement(
    record: &ClientRecord,
    stage: Stage,
    level: TemperatureLevel,
    options: &TransformOptions,
) -> String {
    let q = quote_literal;
    format!(
        "INSERT INTO {table} (
  user_id, name, phone, wechat, email, source, stage,
  temperature_score, temperature_level,
  interests, personality, unique_qualities, behavior_patterns, investment_profile
) VALUES (
  {owner}, {name}, {phone}, {wechat}, {email}, {source}, {stage},
  {score}, {level},
  {interests}, {personality}, {qualities}, {patterns}, {profile}
);",
        table = options.table,
        owner = options.owner_id,
        name = q(&record.name),
        phone = q(&record.phone),
        wechat = q(&record.wechat),
        email = q(&record.email),
        source = q(&record.source),
        stage = q(stage.as_str()),
        score = record.temperature_score,
        level = q(level.as_str()),
        interests = q(&record.interests),
        personality = q(&record.personality),
        qualities = q(&record.unique_qualities),
        patterns = q(&record.behavior_patterns),
        profile = q(&record.investment_profile),
    )
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
