use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::text_field;

pub const DEFAULT_SOURCE: &str = "Workspace Generator";

/// Body of a save request. Non-string values are kept in their JSON
/// spelling; anything left out is filled in by [`SaveRecord::from_draft`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDraft {
    #[serde(default, deserialize_with = "text_field")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub tone: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub output_length: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub input: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub output: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    pub run_id: String,
    pub timestamp: String,
    pub topic: String,
    pub tone: String,
    pub output_length: String,
    pub input: String,
    pub output: String,
    pub notes: String,
    pub source: String,
}

impl SaveRecord {
    /// Builds a record with a fresh run id and the current UTC time.
    pub fn from_draft(draft: SaveDraft) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            topic: draft.topic.unwrap_or_default(),
            tone: draft.tone.unwrap_or_default(),
            output_length: draft.output_length.unwrap_or_default(),
            input: draft.input.unwrap_or_default(),
            output: draft.output.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            source: draft.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
        }
    }

    /// Sheet columns A to I.
    pub fn row(&self) -> [&str; 9] {
        [
            self.run_id.as_str(),
            self.timestamp.as_str(),
            self.topic.as_str(),
            self.tone.as_str(),
            self.output_length.as_str(),
            self.input.as_str(),
            self.output.as_str(),
            self.notes.as_str(),
            self.source.as_str(),
        ]
    }
}
