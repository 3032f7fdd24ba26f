use actix_web::{web, App, HttpServer};
use report_service::config::Config;
use report_service::middleware::{RequestTrace, StructuredLogger};
use report_service::routes;
use report_service::state::AppState;
use report_service::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, systemd unit, or `set -a; . ./.env; set +a` locally).
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(
        service = %config.service,
        host = %config.host,
        port = config.port,
        security = ?config.security,
        "starting report service"
    );

    // The gate is built once here and shared read-only by every worker.
    let data = web::Data::new(AppState::new(config.service, &config.security));

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
