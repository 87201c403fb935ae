pub mod applications;
pub mod content;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Applications
        .route("/api/v1/applications", post(applications::submit))
        // Model directory
        .route("/api/v1/models", get(content::list_models))
        .route("/api/v1/models/{slug}", get(content::get_model))
        // Blog
        .route("/api/v1/posts", get(content::list_posts))
        .route("/api/v1/posts/{slug}", get(content::get_post))
}
