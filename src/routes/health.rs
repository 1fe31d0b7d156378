use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::AppState;

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.products.read().await.len();

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "products": products,
        })),
    )
}
