//! HTTP request handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::convert::convert;
use crate::error::ConvertError;
use crate::server::types::{ApiError, ConvertRequest, ErrorEnvelope, SuccessEnvelope};
use crate::server::AppState;

/// Static service descriptor served on `/` and `/api/index`.
#[derive(Debug, Serialize)]
pub struct ServiceIndex {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: ServiceEndpoints,
}

#[derive(Debug, Serialize)]
pub struct ServiceEndpoints {
    pub convert: &'static str,
}

/// Service info / health endpoint.
pub async fn service_index() -> impl IntoResponse {
    Json(ServiceIndex {
        name: "PDF to Image API",
        version: env!("CARGO_PKG_VERSION"),
        status: "healthy",
        endpoints: ServiceEndpoints {
            convert: "POST /api/convert",
        },
    })
}

/// `POST /api/convert`: fetch, rasterise, and return the document inline.
///
/// The body is read as raw bytes and parsed leniently: an absent or
/// unparseable body degrades to an empty request instead of an extractor
/// rejection, and the missing `url` then produces the documented 400.
pub async fn convert_pdf(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: ConvertRequest = if body.is_empty() {
        ConvertRequest::default()
    } else {
        serde_json::from_slice(&body).unwrap_or_default()
    };

    let url = request
        .url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .ok_or(ConvertError::MissingUrl)?;

    let config = request.into_config(&state.defaults)?;
    info!(
        "Convert request: url={}, format={}, scale={}",
        url, config.format, config.scale
    );

    let output = convert(&url, &config).await?;
    Ok(Json(SuccessEnvelope::new(output)))
}

/// JSON 405 for non-POST methods on `/api/convert`.
///
/// Installed as the convert route's method fallback so callers get the
/// documented envelope instead of axum's empty-body 405.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorEnvelope::new("METHOD_NOT_ALLOWED", "Only POST allowed")),
    )
}
