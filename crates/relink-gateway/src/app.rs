use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, redirect_handler, shorten_handler, shorten_raw_handler};
use crate::state::AppState;

/// Request bodies above this size are refused with 413.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Self::router_with_body_limit(state, DEFAULT_BODY_LIMIT)
    }

    pub fn router_with_body_limit(state: AppState, body_limit: usize) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/shorten", post(shorten_handler))
            .route("/api/shorten/raw", post(shorten_raw_handler))
            .route("/api/redirect/{code}", get(redirect_handler))
            .route("/r/{code}", get(redirect_handler))
            .layer(DefaultBodyLimit::max(body_limit))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
