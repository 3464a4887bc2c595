use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/categories", get(handlers::get_categories))
        .route("/api/calculate", post(handlers::post_calculate))
        .route(
            "/api/history",
            get(handlers::get_history).delete(handlers::clear_history),
        )
        .route("/api/history/:id", delete(handlers::delete_record))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
