use axum::{
    routing::{get, post},
    Router,
};
use qa_agent::Responder;
use qa_core::config::QaConfig;
use std::sync::Arc;

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
///
/// Everything here is read-only after startup, so handlers never lock.
pub struct AppState {
    pub config: QaConfig,
    pub responder: Box<dyn Responder>,
}

impl AppState {
    pub fn new(config: QaConfig, responder: Box<dyn Responder>) -> Self {
        Self { config, responder }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(crate::http::ui::ui_handler))
        .route("/health", get(crate::http::health::health_handler))
        .route("/api/chat", post(crate::http::chat::chat_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
