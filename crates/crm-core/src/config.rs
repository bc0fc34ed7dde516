//! Configuration types and parsing for crm-seed.yml

use crate::error::{CoreError, CoreResult};
use crate::table_name::TableName;
use crate::transform::TransformOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names probed by [`Config::discover`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["crm-seed.yml", "crm-seed.yaml"];

/// Settings for crm-seed, all optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Owner id used when none is given on the command line
    #[serde(default = "default_owner_id")]
    pub owner_id: i64,

    /// Path of the generated script
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Table the generated statements insert into
    #[serde(default)]
    pub table: TableName,

    /// Reject invalid values instead of substituting defaults
    #[serde(default)]
    pub strict: bool,

    /// Database names used in the follow-up command hints
    #[serde(default)]
    pub hints: HintsConfig,
}

/// Names of the D1 databases suggested after a successful conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HintsConfig {
    /// Database for `--local` imports
    #[serde(default = "default_local_database")]
    pub local_database: String,

    /// Database for `--remote` imports
    #[serde(default = "default_remote_database")]
    pub remote_database: String,
}

fn default_owner_id() -> i64 {
    2
}

fn default_output() -> PathBuf {
    PathBuf::from("import.sql")
}

fn default_local_database() -> String {
    "webapp-production".to_string()
}

fn default_remote_database() -> String {
    "crm-high-trust-sales-db".to_string()
}

impl Default for HintsConfig {
    fn default() -> Self {
        Self {
            local_database: default_local_database(),
            remote_database: default_remote_database(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner_id: default_owner_id(),
            output: default_output(),
            table: TableName::default(),
            strict: false,
            hints: HintsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> CoreResult<Self> {
        // An empty file deserializes as YAML null, not an empty mapping.
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, falling back to defaults.
    ///
    /// Looks for crm-seed.yml or crm-seed.yaml. Returns the path that was
    /// loaded, if any.
    pub fn discover(dir: &Path) -> CoreResult<(Self, Option<PathBuf>)> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.exists() {
                return Ok((Self::load(&path)?, Some(path)));
            }
        }
        Ok((Self::default(), None))
    }

    /// Build transformer settings, letting an explicit owner id win.
    pub fn transform_options(&self, owner_id: Option<i64>) -> TransformOptions {
        TransformOptions {
            owner_id: owner_id.unwrap_or(self.owner_id),
            table: self.table.clone(),
            strict: self.strict,
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.output.as_os_str().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "output path cannot be empty".to_string(),
            });
        }

        for (key, value) in [
            ("hints.local_database", &self.hints.local_database),
            ("hints.remote_database", &self.hints.remote_database),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("{key} cannot be empty"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
