//! Error types for the pdf2image-api library.
//!
//! The conversion pipeline is fail-fast: any failure aborts the whole
//! request, so one error enum covers every stage. Variants carry stage
//! detail (URL, page number, byte counts) for logs and messages, but each
//! variant maps onto exactly one wire code via [`ConvertError::wire_code`]:
//! the HTTP surface exposes a flat taxonomy regardless of how the failure
//! happened internally.

use thiserror::Error;

/// All errors returned by the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Request errors ────────────────────────────────────────────────────
    /// No URL was supplied in the request.
    #[error("URL is required")]
    MissingUrl,

    /// The supplied URL is not a valid HTTP/HTTPS URL.
    #[error("Invalid URL '{input}': expected an http:// or https:// URL")]
    InvalidUrl { input: String },

    // ── Download errors ───────────────────────────────────────────────────
    /// The download request failed or returned a non-success status.
    #[error("Failed to download PDF from '{url}': {reason}")]
    DownloadFailed { url: String, reason: String },

    /// The download exceeded the configured timeout.
    #[error("Download timed out after {secs}s for '{url}'")]
    DownloadTimeout { url: String, secs: u64 },

    /// The PDF body exceeds the configured byte cap.
    #[error("PDF exceeds {}MB limit", .limit / (1024 * 1024))]
    TooLarge { bytes: u64, limit: u64 },

    // ── Render errors ─────────────────────────────────────────────────────
    /// pdfium could not parse the downloaded bytes as a PDF.
    #[error("Failed to parse PDF document: {detail}")]
    CorruptPdf { detail: String },

    /// pdfium returned an error while rasterising a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    /// Image transcoding failed for a specific page.
    #[error("Image encoding failed for page {page}: {detail}")]
    EncodeFailed { page: usize, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConvertError {
    /// The flat error code surfaced to API callers.
    pub fn wire_code(&self) -> &'static str {
        match self {
            ConvertError::MissingUrl | ConvertError::InvalidUrl { .. } => "INVALID_URL",
            ConvertError::DownloadFailed { .. } | ConvertError::DownloadTimeout { .. } => {
                "PDF_DOWNLOAD_FAILED"
            }
            ConvertError::TooLarge { .. } => "PDF_TOO_LARGE",
            ConvertError::CorruptPdf { .. }
            | ConvertError::RenderFailed { .. }
            | ConvertError::EncodeFailed { .. }
            | ConvertError::InvalidConfig(_)
            | ConvertError::Internal(_) => "RENDER_FAILED",
        }
    }
}
