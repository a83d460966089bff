use actix_web::{web, HttpRequest, HttpResponse};
use generator_core::GenerationRequest;

use crate::body::{read_json, BodyError};
use crate::error::ApiError;
use crate::middleware::extract_trace_id;
use crate::state::AppState;

/// An empty body, or one not sent as JSON, is read as `{}` and so fails
/// validation on the missing fields.
pub async fn handler(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let trace_id = extract_trace_id(&http_req).unwrap_or_default();
    let body = body.map_err(|e| anyhow::anyhow!("failed to read request body: {e}"))?;

    let req = match read_json::<GenerationRequest>(&http_req, &body) {
        Ok(req) => req.unwrap_or_default(),
        Err(BodyError::ContentType) => GenerationRequest::default(),
        Err(e) => {
            log::info!("[{}] Unreadable generate request: {}", trace_id, e);
            return Err(e.into());
        }
    };

    match state.generation.generate(&req).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            log::info!("[{}] Rejected generate request: {}", trace_id, e);
            Err(e.into())
        }
    }
}
