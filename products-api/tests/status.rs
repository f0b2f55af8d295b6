use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;

use products_api::api::status::HealthStatus;
use products_api::orm::testing::test_rocket;

#[rocket::async_test]
async fn test_health_status() {
    let client = Client::tracked(test_rocket())
        .await
        .expect("valid rocket instance");

    let response = client.get("/status").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let health: HealthStatus = response.into_json().await.expect("valid status JSON");
    assert_eq!(health.status, "running");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[rocket::async_test]
async fn test_unknown_route_returns_json_404() {
    let client = Client::tracked(test_rocket())
        .await
        .expect("valid rocket instance");

    let response = client.get("/widgets").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    let body: serde_json::Value = response.into_json().await.expect("valid JSON");
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["path"], "/widgets");
    assert_eq!(body["status"], 404);
}
