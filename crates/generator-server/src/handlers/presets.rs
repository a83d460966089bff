use actix_web::{HttpResponse, Responder};
use generator_core::presets;

pub async fn handler() -> impl Responder {
    HttpResponse::Ok().json(presets())
}
