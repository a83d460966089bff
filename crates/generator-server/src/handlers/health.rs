use actix_web::{HttpResponse, Responder};
use serde::Serialize;

use crate::state::SERVICE_NAME;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}
