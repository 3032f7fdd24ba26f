use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::config::service::ServiceKind;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: ServiceKind,
}

/// Liveness check, served outside the auth gate.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        service: app_state.service,
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
