use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Friendly,
    Professional,
    Direct,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Friendly, Tone::Professional, Tone::Direct];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Professional => "Professional",
            Tone::Direct => "Direct",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputLength {
    Short,
    Medium,
    Long,
}

impl OutputLength {
    pub const ALL: [OutputLength; 3] = [
        OutputLength::Short,
        OutputLength::Medium,
        OutputLength::Long,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLength::Short => "Short",
            OutputLength::Medium => "Medium",
            OutputLength::Long => "Long",
        }
    }
}

/// Returned when a string is not an exact member of an enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Tone {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "tone",
                value: s.to_string(),
            })
    }
}

impl FromStr for OutputLength {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputLength::ALL
            .into_iter()
            .find(|length| length.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "output length",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OutputLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads a free-text field from any JSON value. Strings pass through as is,
/// other values keep their JSON spelling and `null` reads as absent.
pub fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Raw `/generate` body. Every field is optional and accepts any JSON type,
/// so a missing or mistyped field surfaces as a validation failure rather
/// than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, deserialize_with = "text_field")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub tone: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub output_length: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub input: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        topic: impl Into<String>,
        tone: impl Into<String>,
        output_length: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            topic: Some(topic.into()),
            tone: Some(tone.into()),
            output_length: Some(output_length.into()),
            input: Some(input.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub topic: String,
    pub tone: Tone,
    pub output_length: OutputLength,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub output: String,
}
