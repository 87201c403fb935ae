use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::content::{ContentStore, Model, Post};
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct PostParams {
    lang: Option<String>,
}

fn store(state: &SharedState) -> Result<&Arc<dyn ContentStore>, AppError> {
    state
        .content_store
        .as_ref()
        .ok_or_else(|| AppError::Internal("Content store not configured".to_string()))
}

pub async fn list_models(State(state): State<SharedState>) -> Result<Json<Vec<Model>>, AppError> {
    let models = store(&state)?
        .list_models()
        .await
        .map_err(AppError::Upstream)?;
    Ok(Json(models))
}

pub async fn get_model(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<Model>, AppError> {
    let model = store(&state)?
        .get_model(&slug)
        .await
        .map_err(AppError::Upstream)?
        .ok_or_else(|| AppError::NotFound("Model not found".to_string()))?;
    Ok(Json(model))
}

pub async fn list_posts(
    State(state): State<SharedState>,
    Query(params): Query<PostParams>,
) -> Result<Json<Vec<Post>>, AppError> {
    let posts = store(&state)?
        .list_posts(params.lang.as_deref())
        .await
        .map_err(AppError::Upstream)?;
    Ok(Json(posts))
}

pub async fn get_post(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, AppError> {
    let post = store(&state)?
        .get_post(&slug)
        .await
        .map_err(AppError::Upstream)?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;
    Ok(Json(post))
}
