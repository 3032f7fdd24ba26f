//! Request ids and the per-request span.
//!
//! No `mod common`: the span test installs its own subscriber.


use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use actix_web::{test, web, HttpResponse};
use report_service::test_support::{create_test_app, create_test_app_builder, test_state};
use report_service::ServiceKind;
use serde_json::Value;
use serial_test::serial;
use tracing::info;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;

const HEADER: &str = "x-request-id";

#[actix_web::test]
async fn generates_request_id_when_absent() {
    let app = create_test_app(test_state(ServiceKind::Gri)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    let id = resp.headers().get(HEADER).unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok(), "not a uuid: {id}");
}

#[actix_web::test]
async fn reuses_sane_inbound_request_id() {
    let app = create_test_app(test_state(ServiceKind::Gri)).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((HEADER, "upstream-id_42.a"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get(HEADER).unwrap(), "upstream-id_42.a");
}

#[actix_web::test]
async fn replaces_unsafe_inbound_request_id() {
    let app = create_test_app(test_state(ServiceKind::Gri)).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((HEADER, "has spaces; and=stuff"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let id = resp.headers().get(HEADER).unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[actix_web::test]
async fn rejected_requests_still_carry_request_id() {
    let app = create_test_app(test_state(ServiceKind::Gri)).await;

    let req = test::TestRequest::get().uri("/api/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 401);
    assert!(resp.headers().get(HEADER).is_some());
}

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

#[actix_web::test]
#[serial]
async fn handler_logs_inherit_request_span() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufWriter(buf.clone())
    };
    let subscriber = Registry::default().with(
        fmt::Layer::default()
            .json()
            .with_span_list(true)
            .with_current_span(true)
            .with_ansi(false)
            .with_writer(make_writer),
    );
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = create_test_app_builder(test_state(ServiceKind::Materiality))
        .with_routes(|cfg| {
            cfg.route(
                "/ping",
                web::get().to(|| async {
                    info!("inside handler");
                    HttpResponse::Ok().finish()
                }),
            );
        })
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/ping")
        .insert_header((HEADER, "trace-me-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let logs = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    let handler_line = logs
        .lines()
        .filter_map(|line| serde_json::from_str::<Value>(line).ok())
        .find(|v| v["fields"]["message"] == "inside handler")
        .expect("handler log line should be captured");

    let span = &handler_line["span"];
    assert_eq!(span["name"], "request");
    assert_eq!(span["request_id"], "trace-me-123");
    assert_eq!(span["service"], "materiality");
    assert_eq!(span["path"], "/ping");
}
