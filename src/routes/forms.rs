use axum::body::Bytes;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::forms::dispatch::{self, Outcome};
use crate::forms::{parser, variants};
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    Path(variant): Path<String>,
    ConnectInfo(addr): ConnectInfo<std::net::SocketAddr>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let variant = variants::find(&variant)
        .ok_or_else(|| AppError::NotFound(format!("Unknown form: {variant}")))?;

    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());

    let raw = if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parser::parse_multipart(&headers, body)
            .await
            .map_err(AppError::BadRequest)?
    } else {
        parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?
    };

    let outcome = dispatch::run(&state, variant, addr.ip(), raw).await?;

    let response = match outcome {
        Outcome::Created { id } => (
            StatusCode::CREATED,
            Json(json!({ "status": "created", "id": id })),
        ),
        Outcome::Forwarded => (
            StatusCode::CREATED,
            Json(json!({ "status": "forwarded" })),
        ),
        // Silent 200 for spam
        Outcome::Discarded => (StatusCode::OK, Json(json!({ "status": "ok" }))),
    };

    Ok(response.into_response())
}
