//! Configuration for a PDF-to-image conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The service keeps one config as its
//! defaults and derives a per-request copy from the caller-supplied fields,
//! so every knob lives in one struct that is cheap to clone and easy to log.
//!
//! # Design choice: builder over constructor
//! Callers set only what they care about and rely on documented defaults for
//! the rest; limits that callers must not control (byte cap, timeout) are
//! simply never exposed on the wire.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default PDF byte cap: 10 MiB.
pub const DEFAULT_MAX_PDF_BYTES: u64 = 10 * 1024 * 1024;

/// Default download timeout in seconds.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 8;

/// Output image format for rendered pages.
///
/// `jpg` is accepted as a request alias for JPEG, matching what web clients
/// commonly send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG (default). Text stays crisp at any quality setting.
    #[default]
    Png,
    /// Lossy JPEG at the configured quality. Smaller payloads, no alpha.
    #[serde(alias = "jpg")]
    Jpeg,
}

impl OutputFormat {
    /// MIME type used in the emitted data URL.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Jpeg => write!(f, "jpeg"),
        }
    }
}

/// Configuration for a PDF-to-image conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2image_api::{ConversionConfig, OutputFormat};
///
/// let config = ConversionConfig::builder()
///     .format(OutputFormat::Jpeg)
///     .quality(70)
///     .scale(1.5)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Output image format. Default: PNG.
    pub format: OutputFormat,

    /// JPEG quality, 1–100. Default: 85. Ignored for PNG output.
    pub quality: u8,

    /// Render scale relative to the PDF's native point size. Default: 2.0.
    ///
    /// PDF pages are measured in points (72 per inch); a scale of 2.0 renders
    /// a US-Letter page at 1224 × 1584 px, which keeps body text readable on
    /// high-DPI displays without producing oversized payloads.
    pub scale: f32,

    /// Upper bound on the number of pages rendered. Default: no cap.
    pub max_pages: Option<usize>,

    /// Maximum accepted PDF size in bytes. Default: 10 MiB.
    ///
    /// The whole document is buffered in memory before parsing, and every
    /// rendered page is held until the response is assembled, so the byte cap
    /// is what keeps a single request's memory use bounded.
    pub max_pdf_bytes: u64,

    /// Download timeout in seconds. Default: 8.
    pub download_timeout_secs: u64,

    /// Maximum rendered dimension (width or height) in pixels. Default: 8192.
    ///
    /// A safety cap independent of `scale`: a large-format page at scale 8
    /// could otherwise ask pdfium for a gigapixel bitmap. When the cap bites,
    /// both dimensions shrink proportionally so the aspect ratio is kept.
    pub max_rendered_pixels: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            quality: 85,
            scale: 2.0,
            max_pages: None,
            max_pdf_bytes: DEFAULT_MAX_PDF_BYTES,
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            max_rendered_pixels: 8192,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Re-open this config as a builder, e.g. to apply per-request overrides
    /// on top of service defaults.
    pub fn into_builder(self) -> ConversionConfigBuilder {
        ConversionConfigBuilder { config: self }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.config.quality = quality.clamp(1, 100);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.config.scale = scale.clamp(0.1, 8.0);
        self
    }

    pub fn max_pages(mut self, n: usize) -> Self {
        self.config.max_pages = Some(n);
        self
    }

    pub fn max_pdf_bytes(mut self, bytes: u64) -> Self {
        self.config.max_pdf_bytes = bytes.max(1024);
        self
    }

    pub fn download_timeout_secs(mut self, secs: u64) -> Self {
        self.config.download_timeout_secs = secs.max(1);
        self
    }

    pub fn max_rendered_pixels(mut self, px: u32) -> Self {
        self.config.max_rendered_pixels = px.max(100);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, ConvertError> {
        let c = &self.config;
        if !c.scale.is_finite() {
            return Err(ConvertError::InvalidConfig(format!(
                "Scale must be a finite number, got {}",
                c.scale
            )));
        }
        if c.max_pages == Some(0) {
            return Err(ConvertError::InvalidConfig(
                "Page cap must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_contract() {
        let c = ConversionConfig::default();
        assert_eq!(c.format, OutputFormat::Png);
        assert_eq!(c.quality, 85);
        assert_eq!(c.scale, 2.0);
        assert_eq!(c.max_pages, None);
        assert_eq!(c.max_pdf_bytes, 10 * 1024 * 1024);
        assert_eq!(c.download_timeout_secs, 8);
    }

    #[test]
    fn builder_clamps_quality_and_scale() {
        let c = ConversionConfig::builder()
            .quality(0)
            .scale(100.0)
            .build()
            .unwrap();
        assert_eq!(c.quality, 1);
        assert_eq!(c.scale, 8.0);

        let c = ConversionConfig::builder()
            .quality(200)
            .scale(0.0)
            .build()
            .unwrap();
        assert_eq!(c.quality, 100);
        assert_eq!(c.scale, 0.1);
    }

    #[test]
    fn zero_page_cap_is_rejected() {
        let err = ConversionConfig::builder().max_pages(0).build().unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConfig(_)));
    }

    #[test]
    fn nan_scale_is_rejected() {
        let err = ConversionConfig::builder()
            .scale(f32::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConfig(_)));
    }

    #[test]
    fn format_accepts_jpg_alias() {
        let f: OutputFormat = serde_json::from_str("\"jpg\"").unwrap();
        assert_eq!(f, OutputFormat::Jpeg);
        let f: OutputFormat = serde_json::from_str("\"jpeg\"").unwrap();
        assert_eq!(f, OutputFormat::Jpeg);
        let f: OutputFormat = serde_json::from_str("\"png\"").unwrap();
        assert_eq!(f, OutputFormat::Png);
    }

    #[test]
    fn format_mime_types() {
        assert_eq!(OutputFormat::Png.mime_type(), "image/png");
        assert_eq!(OutputFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(OutputFormat::Jpeg.to_string(), "jpeg");
    }
}
