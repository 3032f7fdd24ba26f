//! Helpers for building an in-process service in tests.

pub mod app_builder;

pub use app_builder::{create_test_app, create_test_app_builder, TestAppBuilder};

use crate::config::service::ServiceKind;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Secret shared by tests that need a working gate.
pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET)
}

/// State for `service` verifying with [`test_security`].
pub fn test_state(service: ServiceKind) -> AppState {
    AppState::new(service, &test_security())
}
