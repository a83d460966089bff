use actix_web::{web, HttpRequest, HttpResponse};
use generator_core::{SaveDraft, SaveRecord};
use serde::Serialize;
use serde_json::Value;

use crate::body::read_json;
use crate::error::SaveError;
use crate::middleware::extract_trace_id;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub saved: bool,
    pub run_id: String,
    pub api_response: Value,
}

/// An empty body is saved as an empty draft. A body that cannot be read is
/// rejected before anything is appended.
pub async fn handler(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, SaveError> {
    let trace_id = extract_trace_id(&http_req).unwrap_or_default();
    let draft: SaveDraft = read_json(&http_req, &body)?.unwrap_or_default();
    let record = SaveRecord::from_draft(draft);

    log::info!("[{}] Saving run {}", trace_id, record.run_id);

    let outcome = state.store.save(&record).await?;

    Ok(HttpResponse::Ok().json(SaveResponse {
        saved: true,
        run_id: outcome.run_id,
        api_response: outcome.provider_response,
    }))
}
