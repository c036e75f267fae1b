mod common;

use common::{TestApp, unreachable_gateway};
use reqwest::Client;

#[tokio::test]
async fn health_check_works() {
    // Health never calls the gateway, so an unreachable one is fine.
    let app = TestApp::spawn(&unreachable_gateway().await).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "document-facade");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = TestApp::spawn(&unreachable_gateway().await).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.headers().get("x-request-id").is_some());

    // An inbound id survives the round trip.
    let response = client
        .get(format!("{}/health", app.address))
        .header("x-request-id", "test-request-id")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("test-request-id")
    );
}
