pub mod form;
pub mod health;
pub mod predict;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route("/", get(form::handle_index))
        .route("/predict", post(form::handle_form_predict))
        // JSON API
        .route("/api/v1/predict", post(predict::handle_predict))
        .route("/api/v1/options", get(predict::handle_options))
        .with_state(state)
}
