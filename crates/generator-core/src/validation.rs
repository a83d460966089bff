use thiserror::Error;

use crate::types::{GenerationRequest, OutputLength, Tone, ValidatedRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Topic and Input are required fields")]
    MissingField,

    #[error("Invalid tone. Must be Friendly, Professional, or Direct")]
    InvalidTone,

    #[error("Invalid output length. Must be Short, Medium, or Long")]
    InvalidLength,
}

/// Checks a raw request. Only the first failure is reported, in the order
/// missing fields, tone, output length.
pub fn validate(request: &GenerationRequest) -> Result<ValidatedRequest, ValidationError> {
    let topic = non_blank(request.topic.as_deref());
    let input = non_blank(request.input.as_deref());
    let (Some(topic), Some(input)) = (topic, input) else {
        return Err(ValidationError::MissingField);
    };

    let tone = request
        .tone
        .as_deref()
        .and_then(|tone| tone.parse::<Tone>().ok())
        .ok_or(ValidationError::InvalidTone)?;

    let output_length = request
        .output_length
        .as_deref()
        .and_then(|length| length.parse::<OutputLength>().ok())
        .ok_or(ValidationError::InvalidLength)?;

    Ok(ValidatedRequest {
        topic: topic.to_string(),
        tone,
        output_length,
        input: input.to_string(),
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
