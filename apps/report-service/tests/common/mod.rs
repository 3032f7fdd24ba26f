#![allow(dead_code)]

use std::time::SystemTime;

use proptest::prelude::ProptestConfig;
use report_service::test_support::test_security;
use report_service::mint_access_token;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    service_test_support::logging::init();
}

/// `Authorization` header pair for `token`.
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

/// A currently valid token for `user_id`, signed with the test secret.
pub fn valid_token(user_id: i64) -> String {
    mint_access_token(user_id, SystemTime::now(), &test_security()).expect("mint test token")
}

/// Proptest config honoring `PROPTEST_CASES` (default 32).
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(32)
        .max(1);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
