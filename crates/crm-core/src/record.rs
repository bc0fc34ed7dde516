//! Client record model
//!
//! A [`ClientRecord`] holds the raw values of one CSV data row, keyed by the
//! recognized column names. Columns absent from the header fall back to
//! their defaults here; enumeration checks happen later in
//! [`crate::transform`].

use crate::error::{CoreError, CoreResult};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "source", "stage"];

/// Column list of every generated INSERT statement, in value order.
pub const INSERT_COLUMNS: [&str; 14] = [
    "user_id",
    "name",
    "phone",
    "wechat",
    "email",
    "source",
    "stage",
    "temperature_score",
    "temperature_level",
    "interests",
    "personality",
    "unique_qualities",
    "behavior_patterns",
    "investment_profile",
];

/// Default for an absent `temperature_score` column.
pub const DEFAULT_TEMPERATURE_SCORE: &str = "50";

/// Sales pipeline stage of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    NewLead,
    InitialContact,
    Nurturing,
    HighIntent,
    JoinedGroup,
    OpenedAccount,
    Deposited,
}

impl Stage {
    /// Every stage, in pipeline order.
    pub const ALL: [Stage; 7] = [
        Stage::NewLead,
        Stage::InitialContact,
        Stage::Nurturing,
        Stage::HighIntent,
        Stage::JoinedGroup,
        Stage::OpenedAccount,
        Stage::Deposited,
    ];

    /// Database representation of this stage.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::NewLead => "new_lead",
            Stage::InitialContact => "initial_contact",
            Stage::Nurturing => "nurturing",
            Stage::HighIntent => "high_intent",
            Stage::JoinedGroup => "joined_group",
            Stage::OpenedAccount => "opened_account",
            Stage::Deposited => "deposited",
        }
    }

    /// Look up a stage by its exact (case-sensitive) database name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How warm the relationship with a client currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureLevel {
    Hot,
    Warm,
    #[default]
    Neutral,
    Cold,
}

impl TemperatureLevel {
    /// Every level, hottest first.
    pub const ALL: [TemperatureLevel; 4] = [
        TemperatureLevel::Hot,
        TemperatureLevel::Warm,
        TemperatureLevel::Neutral,
        TemperatureLevel::Cold,
    ];

    /// Database representation of this level.
    pub fn as_str(self) -> &'static str {
        match self {
            TemperatureLevel::Hot => "hot",
            TemperatureLevel::Warm => "warm",
            TemperatureLevel::Neutral => "neutral",
            TemperatureLevel::Cold => "cold",
        }
    }

    /// Look up a level by its exact (case-sensitive) database name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == name)
    }
}

impl fmt::Display for TemperatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positions of the recognized columns within the CSV header.
///
/// Unrecognized header columns are ignored. When a column name repeats,
/// the last occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    name: usize,
    source: usize,
    stage: usize,
    phone: Option<usize>,
    wechat: Option<usize>,
    email: Option<usize>,
    temperature_score: Option<usize>,
    temperature_level: Option<usize>,
    interests: Option<usize>,
    personality: Option<usize>,
    unique_qualities: Option<usize>,
    behavior_patterns: Option<usize>,
    investment_profile: Option<usize>,
}

impl ColumnMap {
    /// Resolve column positions from a header row.
    ///
    /// Fails with [`CoreError::MissingColumns`] when any of
    /// [`REQUIRED_COLUMNS`] is absent. Names are matched exactly.
    pub fn from_headers(headers: &StringRecord) -> CoreResult<Self> {
        let position = |column: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == column)
                .map(|(i, _)| i)
                .last()
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|c| position(*c).is_none())
            .map(|c| c.to_string())
            .collect();

        let (Some(name), Some(source), Some(stage)) =
            (position("name"), position("source"), position("stage"))
        else {
            return Err(CoreError::MissingColumns {
                required: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
                missing,
                present: headers.iter().map(String::from).collect(),
            });
        };

        Ok(Self {
            name,
            source,
            stage,
            phone: position("phone"),
            wechat: position("wechat"),
            email: position("email"),
            temperature_score: position("temperature_score"),
            temperature_level: position("temperature_level"),
            interests: position("interests"),
            personality: position("personality"),
            unique_qualities: position("unique_qualities"),
            behavior_patterns: position("behavior_patterns"),
            investment_profile: position("investment_profile"),
        })
    }
}

/// Raw values of one client row, before validation and escaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub name: String,
    pub phone: String,
    pub wechat: String,
    pub email: String,
    pub source: String,
    pub stage: String,
    pub temperature_score: String,
    pub temperature_level: String,
    pub interests: String,
    pub personality: String,
    pub unique_qualities: String,
    pub behavior_patterns: String,
    pub investment_profile: String,
}

impl ClientRecord {
    /// Extract the recognized fields of a data row.
    ///
    /// Absent optional columns default to the empty string, except
    /// `temperature_score` ("50") and `temperature_level` ("neutral"). A
    /// column that exists but holds an empty cell stays empty. A short row
    /// that ends before a column's position is treated as if that column
    /// were absent, so required fields read as empty and optional ones take
    /// their defaults.
    pub fn from_row(columns: &ColumnMap, row: &StringRecord) -> Self {
        let required = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        let optional = |idx: Option<usize>, default: &str| {
            idx.and_then(|i| row.get(i)).unwrap_or(default).to_string()
        };

        Self {
            name: required(columns.name),
            phone: optional(columns.phone, ""),
            wechat: optional(columns.wechat, ""),
            email: optional(columns.email, ""),
            source: required(columns.source),
            stage: required(columns.stage),
            temperature_score: optional(columns.temperature_score, DEFAULT_TEMPERATURE_SCORE),
            temperature_level: optional(
                columns.temperature_level,
                TemperatureLevel::default().as_str(),
            ),
            interests: optional(columns.interests, ""),
            personality: optional(columns.personality, ""),
            unique_qualities: optional(columns.unique_qualities, ""),
            behavior_patterns: optional(columns.behavior_patterns, ""),
            investment_profile: optional(columns.investment_profile, ""),
        }
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
