pub mod config;
pub mod content;
pub mod email;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::content::ContentStore;
use crate::email::EmailDispatcher;
use crate::state::{AppState, SharedState};

pub fn build_app(
    config: Config,
    content_store: Option<Arc<dyn ContentStore>>,
    mailer: Option<Arc<dyn EmailDispatcher>>,
) -> Router {
    if content_store.is_none() {
        tracing::warn!("Content store not configured: photo uploads and content routes disabled");
    }
    if mailer.is_none() {
        tracing::warn!("Email dispatcher not configured: applications cannot be delivered");
    }

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        config,
        content_store,
        mailer,
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
