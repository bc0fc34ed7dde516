//! Strongly-typed target table name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Table that generated INSERT statements target (optionally schema-qualified
/// like "crm.clients").
///
/// The name is spliced into SQL text unquoted, so only ASCII alphanumerics,
/// `_` and `.`-separated parts are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    /// Try to create a new `TableName`, returning `None` if the name is not a
    /// plain (optionally qualified) SQL identifier.
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        if is_valid_table_name(&s) {
            Some(Self(s))
        } else {
            None
        }
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

impl Default for TableName {
    fn default() -> Self {
        Self("clients".to_string())
    }
}

impl TryFrom<String> for TableName {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_new(s.clone()).ok_or_else(|| format!("invalid table name '{s}'"))
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for TableName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for TableName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
