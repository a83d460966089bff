use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use generator_core::ValidationError;
use generator_sheets::PersistenceError;
use serde::Serialize;
use thiserror::Error;

use crate::body::BodyError;

pub const UNEXPECTED_GENERATE_MESSAGE: &str =
    "An unexpected error occurred while generating text";

/// Errors from `/generate` and request parsing.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    BadRequest(#[from] BodyError),

    #[error("{}", UNEXPECTED_GENERATE_MESSAGE)]
    Unexpected(#[from] anyhow::Error),
}

/// A failed `/save`.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Invalid request body: {0}")]
    BadRequest(#[from] BodyError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl SaveError {
    fn details(&self) -> Option<&str> {
        match self {
            SaveError::Persistence(err) => err.details(),
            SaveError::BadRequest(_) => None,
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    error: String,
}

#[derive(Serialize)]
struct SaveFailure<'a> {
    saved: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Unexpected(source) = self {
            log::error!("Error generating text: {:#}", source);
        }
        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.to_string(),
        })
    }
}

impl ResponseError for SaveError {
    fn status_code(&self) -> StatusCode {
        match self {
            SaveError::BadRequest(_) => StatusCode::BAD_REQUEST,
            SaveError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SaveError::BadRequest(_) => log::info!("Save rejected: {}", self),
            SaveError::Persistence(_) => log::error!("Save failed: {}", self),
        }
        HttpResponse::build(self.status_code()).json(SaveFailure {
            saved: false,
            error: self.to_string(),
            details: self.details(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn validation_errors_are_bad_requests() {
        let err = ApiError::from(ValidationError::InvalidTone);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = body_json(err.error_response()).await;
        assert_eq!(
            body,
            serde_json::json!({ "error": "Invalid tone. Must be Friendly, Professional, or Direct" })
        );
    }

    #[actix_web::test]
    async fn unexpected_errors_hide_details() {
        let err = ApiError::from(anyhow::anyhow!("socket closed"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(err.error_response()).await;
        assert_eq!(body["error"], UNEXPECTED_GENERATE_MESSAGE);
    }

    #[actix_web::test]
    async fn configuration_missing_omits_details() {
        let err = SaveError::from(PersistenceError::ConfigurationMissing {
            missing: vec!["PICA_SECRET_KEY"],
        });
        let body = body_json(err.error_response()).await;
        assert_eq!(body["saved"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Missing env vars. Need: PICA_SECRET_KEY"));
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn unreadable_save_body_is_bad_request() {
        let err = SaveError::from(BodyError::ContentType);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = body_json(err.error_response()).await;
        assert_eq!(
            body,
            serde_json::json!({
                "saved": false,
                "error": "Invalid request body: Content-Type must be application/json"
            })
        );
    }
}
