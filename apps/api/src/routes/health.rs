use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports whether the model gateway initialized at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "model_initialized": state.pipeline.model_initialized(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "stylist-api"
    }))
}
