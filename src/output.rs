//! Output types: the data model of a completed conversion.
//!
//! Wire names are camelCase because the JSON contract is consumed by web
//! clients. Everything here is transient: built once per request, serialised
//! into the response, and dropped.

use crate::config::OutputFormat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One rendered page, ready for inline display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    /// 1-indexed page number within the source document.
    pub page: usize,
    /// `data:<mime>;base64,<payload>` representation of the encoded image.
    pub data_url: String,
    /// Pixel width of the encoded image.
    pub width: u32,
    /// Pixel height of the encoded image.
    pub height: u32,
}

/// Request-level metadata echoed back alongside the pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionMetadata {
    /// The URL as supplied by the caller (before any share-link rewrite).
    pub source_url: String,
    /// Output format the pages were encoded in.
    pub format: OutputFormat,
    /// Render scale that was applied.
    pub scale: f32,
    /// Completion timestamp (RFC 3339, UTC).
    pub processed_at: DateTime<Utc>,
}

/// The complete result of one conversion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOutput {
    /// Page count of the source document.
    pub total_pages: usize,
    /// Number of pages actually rendered (`min(totalPages, maxPages)`).
    pub rendered_pages: usize,
    /// Rendered pages in document order.
    pub pages: Vec<RenderedPage>,
    /// Echoed request metadata.
    pub metadata: ConversionMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_serialises_camel_case() {
        let out = ConversionOutput {
            total_pages: 3,
            rendered_pages: 1,
            pages: vec![RenderedPage {
                page: 1,
                data_url: "data:image/png;base64,AAAA".into(),
                width: 100,
                height: 200,
            }],
            metadata: ConversionMetadata {
                source_url: "https://example.com/doc.pdf".into(),
                format: OutputFormat::Png,
                scale: 2.0,
                processed_at: Utc::now(),
            },
        };

        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["totalPages"], 3);
        assert_eq!(v["renderedPages"], 1);
        assert_eq!(v["pages"][0]["dataUrl"], "data:image/png;base64,AAAA");
        assert_eq!(v["metadata"]["sourceUrl"], "https://example.com/doc.pdf");
        assert_eq!(v["metadata"]["format"], "png");
        // chrono's serde emits RFC 3339
        assert!(v["metadata"]["processedAt"].as_str().unwrap().contains('T'));
    }
}
