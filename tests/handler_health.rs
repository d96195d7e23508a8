mod common;

use advent_calendar::api::handlers::health_handler;
use advent_calendar::domain::repositories::ScheduleRepository;
use axum::{Router, routing::get};
use axum_test::TestServer;

fn test_server(ctx: &common::TestContext) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(ctx.state.clone());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let ctx = common::create_test_state(11, 24);
    let server = test_server(&ctx);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["submissions_store"]["status"], "ok");
    assert_eq!(json["checks"]["schedule"]["status"], "ok");
    assert_eq!(json["checks"]["sms"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let ctx = common::create_test_state(11, 24);
    let server = test_server(&ctx);

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("submissions_store").is_some());
    assert!(json["checks"].get("schedule").is_some());
    assert!(json["checks"].get("sms").is_some());
}

#[tokio::test]
async fn test_health_reports_schedule_presence() {
    let ctx = common::create_test_state(11, 24);
    let server = test_server(&ctx);

    let before = server.get("/health").await.json::<serde_json::Value>();
    assert_eq!(
        before["checks"]["schedule"]["message"],
        "No schedule generated yet"
    );

    ctx.schedule_repository
        .replace(&common::sample_schedule(24))
        .await
        .unwrap();

    let after = server.get("/health").await.json::<serde_json::Value>();
    assert_eq!(
        after["checks"]["schedule"]["message"],
        "Schedule present: 24 days"
    );
}
