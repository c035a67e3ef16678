pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::builder::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/builder/sessions",
            post(handlers::handle_open_session),
        )
        .route(
            "/api/v1/builder/sessions/:user_id/document",
            get(handlers::handle_get_document),
        )
        .route(
            "/api/v1/builder/sessions/:user_id/edits",
            post(handlers::handle_apply_edits),
        )
        .route(
            "/api/v1/builder/sessions/:user_id/navigate",
            post(handlers::handle_navigate),
        )
        .route(
            "/api/v1/builder/sessions/:user_id/save",
            post(handlers::handle_save),
        )
        .route(
            "/api/v1/builder/sessions/:user_id/preview",
            get(handlers::handle_preview),
        )
        .route(
            "/api/v1/builder/sessions/:user_id/export",
            get(handlers::handle_export),
        )
        .with_state(state)
}
