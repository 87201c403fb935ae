use axum::Json;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::i18n::Language;
use crate::state::SharedState;
use crate::submission::{metadata, parser, pipeline};

#[derive(Deserialize)]
pub struct SubmitParams {
    lang: Option<String>,
}

/// Accept one application form post. The response body is always the
/// pipeline result; a faked spam success is indistinguishable from a
/// real one.
pub async fn submit(
    State(state): State<SharedState>,
    Query(params): Query<SubmitParams>,
    ConnectInfo(addr): ConnectInfo<std::net::SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let lang = params
        .lang
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or_default();

    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());

    let parsed = if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parser::parse_multipart(&headers, body).await
    } else {
        parser::parse_body(content_type, &body)
    };

    let parsed = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e }))).into_response();
        }
    };

    let meta = metadata::extract(&headers, Some(addr.ip()), &state.config.trusted_proxies);

    let result = pipeline::run(&state, &meta, lang, parsed.fields, parsed.attachments).await;

    let status = if result.succeeded {
        StatusCode::OK
    } else if result.field_errors.is_empty() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    (status, Json(result)).into_response()
}
