//! Security events written when the gate or the header check refuses a
//! request.
//!
//! No `mod common`: each test installs its own capturing subscriber.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use actix_web::test;
use report_service::test_support::{create_test_app, test_security, test_state, TEST_JWT_SECRET};
use report_service::{AuthGate, ServiceKind};
use serde_json::{json, Value};
use serial_test::serial;
use service_test_support::tokens::{now_secs, sign_claims};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;

/// Appends JSON log lines to a shared buffer.
#[derive(Clone)]
struct BufWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
    _guard: DefaultGuard,
}

impl Capture {
    fn install() -> Self {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let make_writer = {
            let buf = buf.clone();
            move || BufWriter(buf.clone())
        };
        let subscriber = Registry::default().with(
            fmt::Layer::default()
                .json()
                .with_ansi(false)
                .with_writer(make_writer),
        );
        let guard = tracing::subscriber::set_default(subscriber);
        Self { buf, _guard: guard }
    }

    fn raw(&self) -> String {
        String::from_utf8(self.buf.lock().unwrap().clone()).unwrap()
    }

    fn events(&self, name: &str) -> Vec<Value> {
        self.raw()
            .lines()
            .filter_map(|line| serde_json::from_str::<Value>(line).ok())
            .filter(|v| v["fields"]["event"] == name)
            .collect()
    }
}

fn reject_and_capture(token: &str) -> Value {
    let capture = Capture::install();

    let result = AuthGate::new(&test_security()).authenticate(token);
    assert!(result.is_err(), "token unexpectedly accepted");

    let logs = capture.raw();
    assert!(!logs.contains(token), "raw token leaked into logs: {logs}");

    let mut events = capture.events("SECURITY_AUTH_REJECTED");
    assert_eq!(events.len(), 1, "expected one rejection event in: {logs}");
    events.remove(0)
}

fn signed(claims: Value) -> String {
    sign_claims(&claims, TEST_JWT_SECRET.as_bytes())
}

#[core::prelude::v1::test]
#[serial]
fn rejection_events_carry_reason_codes() {
    let cases = [
        (
            signed(json!({"sub": "42", "exp": now_secs() - 30})),
            "token_expired",
        ),
        (
            signed(json!({"sub": "abc", "exp": now_secs() + 600})),
            "subject_invalid",
        ),
        (signed(json!({"exp": now_secs() + 600})), "subject_missing"),
        (
            sign_claims(
                &json!({"sub": "42", "exp": now_secs() + 600}),
                b"some-other-secret-some-other-secret",
            ),
            "invalid_signature",
        ),
        ("not-a-real-token".to_string(), "token_malformed"),
    ];

    for (token, reason) in cases {
        let event = reject_and_capture(&token);

        assert_eq!(event["level"], "WARN");
        assert_eq!(event["fields"]["reason"], reason, "token: {token}");
        let fingerprint = event["fields"]["token_fp"].as_str().unwrap();
        assert_eq!(fingerprint.len(), 12);
        assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[core::prelude::v1::test]
#[serial]
fn same_token_has_same_fingerprint() {
    let token = signed(json!({"sub": "abc", "exp": now_secs() + 600}));

    let first = reject_and_capture(&token);
    let second = reject_and_capture(&token);

    assert_eq!(first["fields"]["token_fp"], second["fields"]["token_fp"]);
}

#[actix_web::test]
#[serial]
async fn missing_header_logs_path_without_rejection_event() {
    let capture = Capture::install();
    let app = create_test_app(test_state(ServiceKind::Gri)).await;

    let req = test::TestRequest::get().uri("/api/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);

    let missing = capture.events("SECURITY_BEARER_MISSING");
    assert_eq!(missing.len(), 1, "logs: {}", capture.raw());
    assert_eq!(missing[0]["fields"]["path"], "/api/me");
    assert!(capture.events("SECURITY_AUTH_REJECTED").is_empty());
}
