// src/api/http/router.rs
// HTTP router composition for the login front

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers::health_handler, login::login_page_handler};
use crate::auth::attach_session_cache;
use crate::state::AppState;

/// Main HTTP router for the login page and health endpoint
pub fn http_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(health_handler))

        // Login page
        .route("/login", get(login_page_handler))

        // Every request gets its own session cache
        .layer(middleware::from_fn(attach_session_cache))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
