mod common;

use actix_web::test;
use report_service::test_support::{create_test_app, test_state};
use report_service::ServiceKind;
use serde_json::json;
use service_test_support::rejection::read_json;

#[actix_web::test]
async fn health_reports_service_name_for_each_service() {
    for service in ServiceKind::ALL {
        let app = create_test_app(test_state(service)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(
            read_json(resp).await,
            json!({"status": "healthy", "service": service.as_str()})
        );
    }
}

#[actix_web::test]
async fn health_ignores_bad_credentials() {
    let app = create_test_app(test_state(ServiceKind::Tcfd)).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
}
