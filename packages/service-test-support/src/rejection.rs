//! Assertions for the rejection contract: 401, `WWW-Authenticate: Bearer`,
//! body `{"detail": ...}`.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{CONTENT_TYPE, WWW_AUTHENTICATE};
use actix_web::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Local mirror of the service's error body, so this crate does not depend
/// on the service.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DetailBody {
    detail: String,
}

/// Read a response body as JSON.
pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = actix_web::test::read_body(resp).await;
    serde_json::from_slice(&body).expect("Response body should be valid JSON")
}

/// Assert `resp` is a 401 rejection carrying exactly `expected_detail`.
pub async fn assert_unauthorized<B: MessageBody>(resp: ServiceResponse<B>, expected_detail: &str) {
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let headers = resp.headers().clone();
    let challenge = headers
        .get(WWW_AUTHENTICATE)
        .expect("WWW-Authenticate header should be present")
        .to_str()
        .expect("WWW-Authenticate header should be valid UTF-8");
    assert_eq!(challenge, "Bearer");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type {content_type:?}"
    );

    let body = actix_web::test::read_body(resp).await;
    let body: DetailBody =
        serde_json::from_slice(&body).expect("Response body should be {\"detail\": ...}");
    assert_eq!(body.detail, expected_detail);
}
