use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and whether the model artifacts loaded.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let model = if state.model.is_ready() { "ready" } else { "unready" };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "salary-api",
        "model": model,
        "model_error": state.model.unready_cause(),
        "artifacts": {
            "model": state.config.model_path.display().to_string(),
            "columns": state.config.columns_path.display().to_string()
        }
    }))
}
