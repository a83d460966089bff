use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::io;

use crate::config::ServerConfig;
use crate::handlers;
use crate::middleware::TracingMiddleware;
use crate::state::AppState;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::health::root)).service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health::handler))
            .route("/presets", web::get().to(handlers::presets::handler))
            .route("/generate", web::post().to(handlers::generate::handler))
            .route("/save", web::post().to(handlers::save::handler)),
    );
}

/// `*` allows any origin; anything else is a comma separated allow-list.
pub fn build_cors(origins: &str) -> Cors {
    let origins = origins.trim();
    if origins.is_empty() || origins.split(',').any(|origin| origin.trim() == "*") {
        return Cors::permissive();
    }

    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let port = config.port;
    let cors_origins = config.cors_origins.clone();
    let state = web::Data::new(AppState::from_config(&config));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(build_cors(&cors_origins))
            .wrap(TracingMiddleware)
            .configure(app_config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test, HttpResponse};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn allow_list_echoes_known_origin() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors("http://localhost:5173, https://app.example.com"))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://app.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("https://app.example.com")
        );
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .and_then(|v| v.to_str().ok()),
            Some("true")
        );
    }

    #[actix_web::test]
    async fn allow_list_rejects_unknown_origin() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors("http://localhost:5173"))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example.com"))
            .to_request();
        if let Ok(resp) = test::try_call_service(&app, req).await {
            assert!(resp
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none());
        }
    }

    #[actix_web::test]
    async fn wildcard_is_permissive() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors("*"))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://anything.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_some());
    }
}
