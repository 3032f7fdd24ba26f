#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod test_support;

// Re-exports for public API
pub use auth::{mint_access_token, AuthError, AuthGate, Identity};
pub use config::{Config, ServiceKind};
pub use error::AppError;
pub use extractors::BearerToken;
pub use middleware::{RequestTrace, RequireIdentity, StructuredLogger};
pub use state::{AppState, SecurityConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    service_test_support::logging::init();
}
