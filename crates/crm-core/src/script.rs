//! Rendering of the final `.sql` artifact

use chrono::NaiveDateTime;

/// Timestamp layout used in the script header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Provenance written as comments at the top of a generated script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptHeader {
    /// Input path as given by the user
    pub source: String,

    /// Owning user id of every inserted row
    pub owner_id: i64,

    /// Number of INSERT statements in the body
    pub record_count: usize,

    /// Local time the script was generated
    pub generated_at: NaiveDateTime,
}

impl ScriptHeader {
    /// Render the header comment block, including its trailing blank line.
    pub fn to_comment_block(&self) -> String {
        format!(
            "-- CRM client import script\n\
             -- Source file: {}\n\
             -- Owner ID: {}\n\
             -- Records: {}\n\
             -- Generated at: {}\n\n",
            self.source,
            self.owner_id,
            self.record_count,
            self.generated_at.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Prefix a statement body with its header comment block.
pub fn render_script(header: &ScriptHeader, body: &str) -> String {
    let mut script = header.to_comment_block();
    script.push_str(body);
    script
}
