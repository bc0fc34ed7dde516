//! crm-core - Core library for crm-seed
//!
//! This crate turns CSV exports of CRM client records into SQL INSERT
//! scripts: header mapping, enumeration checks, literal escaping, statement
//! rendering, and the optional `crm-seed.yml` configuration.

pub mod config;
pub mod error;
pub mod record;
pub mod script;
pub mod sql_utils;
pub mod table_name;
pub mod transform;

pub use config::{Config, HintsConfig};
pub use error::{CoreError, CoreResult};
pub use record::{ClientRecord, ColumnMap, Stage, TemperatureLevel};
pub use script::{render_script, ScriptHeader};
pub use table_name::TableName;
pub use transform::{
    transform_file, transform_reader, NormalizationWarning, TransformOptions, Transformed,
};
