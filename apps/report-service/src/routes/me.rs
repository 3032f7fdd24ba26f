use actix_web::{web, HttpResponse};

use crate::auth::Identity;

/// Echo the authenticated caller back.
async fn me(identity: Identity) -> HttpResponse {
    HttpResponse::Ok().json(identity)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(me));
}
