use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::auth::{AuthError, AuthGate, Identity};
use crate::config::service::ServiceKind;

/// Application state shared by every worker
#[derive(Debug, Clone)]
pub struct AppState {
    /// Which report service this process is serving
    pub service: ServiceKind,
    /// Token verifier built once from the process-wide security config
    pub gate: Arc<AuthGate>,
}

impl AppState {
    pub fn new(service: ServiceKind, security: &SecurityConfig) -> Self {
        Self {
            service,
            gate: Arc::new(AuthGate::new(security)),
        }
    }

    pub fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        self.gate.authenticate(token)
    }
}
