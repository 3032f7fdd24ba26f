use actix_web::web;

use crate::middleware::RequireIdentity;

pub mod health;
pub mod me;

/// Register the service's routes.
///
/// `/health` is public; everything under `/api` passes through
/// `RequireIdentity` first.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);

    cfg.service(
        web::scope("/api")
            .wrap(RequireIdentity)
            .configure(me::configure_routes),
    );
}
