//! Wire types for the HTTP surface: request body, response envelopes, and
//! the error → status mapping.

use crate::config::{ConversionConfig, OutputFormat};
use crate::error::ConvertError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// The `POST /api/convert` request body.
///
/// Every field is optional; service defaults fill the gaps, and an absent or
/// unparseable body behaves like an empty one (the missing `url` is then the
/// first validation failure).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertRequest {
    pub url: Option<String>,
    pub format: Option<OutputFormat>,
    pub quality: Option<u8>,
    pub scale: Option<f32>,
    pub max_pages: Option<usize>,
}

impl ConvertRequest {
    /// Merge the request's optional fields over the service defaults.
    ///
    /// A wire `maxPages` of 0 is treated as absent: an explicit request for
    /// zero pages is a client bug, not intent. Caller-uncontrollable limits
    /// (byte cap, timeout) come from `base` untouched.
    pub fn into_config(self, base: &ConversionConfig) -> Result<ConversionConfig, ConvertError> {
        let mut builder = base.clone().into_builder();
        if let Some(format) = self.format {
            builder = builder.format(format);
        }
        if let Some(quality) = self.quality {
            builder = builder.quality(quality);
        }
        if let Some(scale) = self.scale {
            builder = builder.scale(scale);
        }
        if let Some(max_pages) = self.max_pages.filter(|&n| n > 0) {
            builder = builder.max_pages(max_pages);
        }
        builder.build()
    }
}

/// Success envelope: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope: `{ "success": false, "error": { code, message } }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}

/// Newtype adapter so pipeline errors can be returned straight from handlers.
#[derive(Debug)]
pub struct ApiError(pub ConvertError);

impl From<ConvertError> for ApiError {
    fn from(e: ConvertError) -> Self {
        ApiError(e)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            ConvertError::MissingUrl | ConvertError::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            ConvertError::DownloadFailed { .. } | ConvertError::DownloadTimeout { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ConvertError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ConvertError::CorruptPdf { .. }
            | ConvertError::RenderFailed { .. }
            | ConvertError::EncodeFailed { .. }
            | ConvertError::InvalidConfig(_)
            | ConvertError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Convert error: {}", self.0);
        } else {
            tracing::debug!("Convert rejected: {}", self.0);
        }

        let body = Json(ErrorEnvelope::new(self.0.wire_code(), self.0.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_camel_case_fields() {
        let req: ConvertRequest = serde_json::from_str(
            r#"{"url":"https://example.com/a.pdf","format":"jpg","quality":70,"scale":1.5,"maxPages":3}"#,
        )
        .unwrap();
        assert_eq!(req.url.as_deref(), Some("https://example.com/a.pdf"));
        assert_eq!(req.format, Some(OutputFormat::Jpeg));
        assert_eq!(req.quality, Some(70));
        assert_eq!(req.scale, Some(1.5));
        assert_eq!(req.max_pages, Some(3));
    }

    #[test]
    fn empty_body_parses_to_defaults() {
        let req: ConvertRequest = serde_json::from_str("{}").unwrap();
        assert!(req.url.is_none());
        assert!(req.format.is_none());
        assert!(req.max_pages.is_none());
    }

    #[test]
    fn into_config_applies_overrides_and_keeps_limits() {
        let base = ConversionConfig::default();
        let req: ConvertRequest =
            serde_json::from_str(r#"{"format":"jpeg","quality":50,"maxPages":2}"#).unwrap();
        let cfg = req.into_config(&base).unwrap();
        assert_eq!(cfg.format, OutputFormat::Jpeg);
        assert_eq!(cfg.quality, 50);
        assert_eq!(cfg.max_pages, Some(2));
        assert_eq!(cfg.max_pdf_bytes, base.max_pdf_bytes);
        assert_eq!(cfg.download_timeout_secs, base.download_timeout_secs);
    }

    #[test]
    fn zero_max_pages_on_the_wire_is_ignored() {
        let base = ConversionConfig::default();
        let req: ConvertRequest = serde_json::from_str(r#"{"maxPages":0}"#).unwrap();
        let cfg = req.into_config(&base).unwrap();
        assert_eq!(cfg.max_pages, None);
    }

    #[test]
    fn error_envelope_shape() {
        let v = serde_json::to_value(ErrorEnvelope::new("INVALID_URL", "URL is required")).unwrap();
        assert_eq!(v["success"], false);
        assert_eq!(v["error"]["code"], "INVALID_URL");
        assert_eq!(v["error"]["message"], "URL is required");
    }
}
