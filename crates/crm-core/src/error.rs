//! Error types for crm-core

use thiserror::Error;

/// Core error type for crm-seed
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Input CSV file does not exist
    #[error("[E001] Input file not found: {path}")]
    InputNotFound { path: String },

    /// E002: Header row lacks one or more required columns
    #[error(
        "[E002] Missing required columns: {}\n  required: {}\n  present: {}",
        .missing.join(", "),
        .required.join(", "),
        .present.join(", ")
    )]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
        present: Vec<String>,
    },

    /// E003: CSV decoding failed (bad UTF-8, unterminated quote, I/O)
    #[error("[E003] Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// E004: Value rejected in strict mode
    #[error("[E004] Invalid {field} value '{value}' at row {row}")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// E005: Configuration file not found
    #[error("[E005] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E006: Failed to parse configuration file
    #[error("[E006] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// E007: Invalid configuration value
    #[error("[E007] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E008: IO error
    #[error("[E008] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E009: IO error with file path context
    #[error("[E009] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
