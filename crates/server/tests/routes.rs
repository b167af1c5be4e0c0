use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

use migration::MigratorTrait;

async fn test_router() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = engine::Engine::builder().database(db).build();
    server::router(engine)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn bella() -> Value {
    json!({
        "tag_number": "GB0001",
        "name": "Bella",
        "breed": "Holstein",
        "date_of_birth": "2021-04-02",
        "gender": "Female",
        "weight": 540.0
    })
}

async fn create_cattle(router: &Router, payload: Value) -> Value {
    let response = router
        .clone()
        .oneshot(json_request("POST", "/api/cattle", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn health_reports_ok() {
    let router = test_router().await;

    let response = router.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn cattle_create_and_fetch() {
    let router = test_router().await;

    let created = create_cattle(&router, bella()).await;
    assert_eq!(created["tag_number"], "GB0001");
    assert_eq!(created["health_status"], "Healthy");
    assert_eq!(created["current_status"], "Active");

    let id = created["id"].as_i64().unwrap();
    let response = router
        .oneshot(get(&format!("/api/cattle/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Bella");
}

#[tokio::test]
async fn missing_cattle_is_404() {
    let router = test_router().await;

    let response = router.oneshot(get("/api/cattle/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_tag_is_409() {
    let router = test_router().await;
    create_cattle(&router, bella()).await;

    let response = router
        .oneshot(json_request("POST", "/api/cattle", bella()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_gender_is_422() {
    let router = test_router().await;

    let mut payload = bella();
    payload["gender"] = json!("Unknown");
    let response = router
        .oneshot(json_request("POST", "/api/cattle", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_filter_date_is_422() {
    let router = test_router().await;

    let response = router
        .oneshot(get("/api/milk?start_date=01/06/2024"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn milk_record_for_unknown_cattle_is_404() {
    let router = test_router().await;

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/milk",
            json!({"cattle_id": 42, "quantity_liters": 20.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_cattle_cascades_over_http() {
    let router = test_router().await;
    let created = create_cattle(&router, bella()).await;
    let id = created["id"].as_i64().unwrap();

    for _ in 0..2 {
        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/milk",
                json!({"cattle_id": id, "quantity_liters": 15.0}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/cattle/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(get(&format!("/api/milk?cattle_id={id}")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn milk_summary_covers_recent_records() {
    let router = test_router().await;
    let created = create_cattle(&router, bella()).await;
    let id = created["id"].as_i64().unwrap();

    // date_recorded defaults to today, inside the default 30-day window.
    for liters in [20.0, 30.0] {
        router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/milk",
                json!({"cattle_id": id, "quantity_liters": liters}),
            ))
            .await
            .unwrap();
    }

    let response = router.oneshot(get("/api/milk/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["total_liters"], 50.0);
    assert_eq!(body[0]["average_daily_liters"], 25.0);
    assert_eq!(body[0]["record_count"], 2);
    assert_eq!(body[0]["period_days"], 30);
}

#[tokio::test]
async fn milk_summary_without_records_is_an_empty_list() {
    let router = test_router().await;

    let response = router.oneshot(get("/api/milk/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn empty_analytics_window_is_404() {
    let router = test_router().await;

    let response = router
        .oneshot(get("/api/analytics/milk-production"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cattle_comparison_formats_names_with_tags() {
    let router = test_router().await;
    let created = create_cattle(&router, bella()).await;
    let id = created["id"].as_i64().unwrap();

    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/milk",
            json!({"cattle_id": id, "quantity_liters": 18.0}),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(get("/api/analytics/cattle-comparison"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["cattle_names"], json!(["Bella (GB0001)"]));
    assert_eq!(body["total_production"], json!([18.0]));
}

#[tokio::test]
async fn financial_overview_is_empty_not_missing() {
    let router = test_router().await;

    let response = router
        .oneshot(get("/api/analytics/financial-overview"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["expenses"]["categories"], json!([]));
    assert_eq!(body["revenue"]["sources"], json!([]));
    assert_eq!(body["revenue"]["amounts"], json!([]));
}

#[tokio::test]
async fn financial_overview_breaks_down_categories_and_sources() {
    let router = test_router().await;

    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/financial/expenses",
            json!({"category": "Feed", "description": "hay bales", "amount": 10.0}),
        ))
        .await
        .unwrap();
    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/financial/revenue",
            json!({"source": "Milk", "description": "weekly sale", "amount": 25.0}),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(get("/api/analytics/financial-overview"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["expenses"]["categories"], json!(["Feed"]));
    assert_eq!(body["expenses"]["amounts"], json!([10.0]));
    assert_eq!(body["revenue"]["sources"], json!(["Milk"]));
    assert_eq!(body["revenue"]["amounts"], json!([25.0]));
}

#[tokio::test]
async fn financial_summary_nets_expenses_against_revenue() {
    let router = test_router().await;

    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/financial/expenses",
            json!({"category": "Feed", "description": "hay bales", "amount": 300.0}),
        ))
        .await
        .unwrap();
    router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/financial/revenue",
            json!({"source": "Milk", "description": "weekly sale", "amount": 800.0}),
        ))
        .await
        .unwrap();

    let response = router.oneshot(get("/api/financial/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total_expenses"], 300.0);
    assert_eq!(body["total_revenue"], 800.0);
    assert_eq!(body["net_income"], 500.0);
}
