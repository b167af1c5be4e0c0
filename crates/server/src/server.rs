use axum::{Json, Router, routing::get};

use std::sync::Arc;

use crate::{analytics, cattle, feeding, financial, milk};
use api_types::health::HealthResponse;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/cattle", get(cattle::list).post(cattle::create))
        .route(
            "/api/cattle/{id}",
            get(cattle::get).put(cattle::update).delete(cattle::remove),
        )
        .route("/api/milk", get(milk::list).post(milk::create))
        .route("/api/milk/summary", get(milk::summary))
        .route(
            "/api/milk/{id}",
            get(milk::get).put(milk::update).delete(milk::remove),
        )
        .route("/api/feeding", get(feeding::list).post(feeding::create))
        .route(
            "/api/feeding/{id}",
            get(feeding::get).put(feeding::update).delete(feeding::remove),
        )
        .route(
            "/api/financial/expenses",
            get(financial::list_expenses).post(financial::create_expense),
        )
        .route(
            "/api/financial/expenses/{id}",
            get(financial::get_expense)
                .put(financial::update_expense)
                .delete(financial::remove_expense),
        )
        .route(
            "/api/financial/revenue",
            get(financial::list_revenue).post(financial::create_revenue),
        )
        .route(
            "/api/financial/revenue/{id}",
            get(financial::get_revenue)
                .put(financial::update_revenue)
                .delete(financial::remove_revenue),
        )
        .route("/api/financial/summary", get(financial::summary))
        .route(
            "/api/analytics/milk-production",
            get(analytics::milk_production),
        )
        .route(
            "/api/analytics/cattle-comparison",
            get(analytics::cattle_comparison),
        )
        .route(
            "/api/analytics/financial-overview",
            get(analytics::financial_overview),
        )
        .route(
            "/api/analytics/feeding-cost-analysis",
            get(analytics::feeding_cost_analysis),
        )
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
