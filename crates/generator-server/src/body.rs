//! Reading JSON request bodies without the `web::Json` extractor, so that an
//! empty body can be told apart from one that fails to parse.

use actix_web::{HttpMessage, HttpRequest};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("Content-Type must be application/json")]
    ContentType,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type().to_ascii_lowercase();
    content_type == "application/json" || content_type.ends_with("+json")
}

/// `Ok(None)` for an empty or whitespace-only body. A non-empty body must be
/// declared as JSON and parse as `T`.
pub fn read_json<T: DeserializeOwned>(
    req: &HttpRequest,
    body: &[u8],
) -> Result<Option<T>, BodyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    if !is_json(req) {
        return Err(BodyError::ContentType);
    }
    Ok(Some(serde_json::from_slice(body)?))
}
