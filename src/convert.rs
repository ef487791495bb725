//! The conversion pipeline entry point.
//!
//! A straight-line sequence with early-exit error branches: resolve the URL,
//! download within the configured caps, rasterise, transcode, assemble. No
//! state survives the call, and any failure (including a failure on a
//! single page) aborts the whole request rather than returning partial
//! results.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::output::{ConversionMetadata, ConversionOutput, RenderedPage};
use crate::pipeline::{encode, fetch, render, resolve};
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info};

/// Convert the PDF at `url` into inline page images.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `url` — HTTP/HTTPS URL of the PDF (share links are rewritten)
/// * `config` — conversion configuration, including service limits
///
/// # Errors
/// Returns `Err(ConvertError)` on the first failing stage; there are no
/// partial results.
pub async fn convert(
    url: &str,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    let total_start = Instant::now();
    info!("Starting conversion: {}", url);

    // ── Step 1: Resolve URL ──────────────────────────────────────────────
    let pdf_url = resolve::resolve_source_url(url)?;

    // ── Step 2: Download ─────────────────────────────────────────────────
    let pdf_bytes = fetch::fetch_pdf(&pdf_url, config).await?;

    // ── Step 3: Rasterise ────────────────────────────────────────────────
    let render_start = Instant::now();
    let (total_pages, rendered) = render::render_pages(pdf_bytes, config).await?;
    debug!(
        "Rendered {} pages in {}ms",
        rendered.len(),
        render_start.elapsed().as_millis()
    );

    // ── Step 4: Transcode ────────────────────────────────────────────────
    let mut pages = Vec::with_capacity(rendered.len());
    for (page_num, img) in &rendered {
        let encoded = encode::encode_page(img, config.format, config.quality).map_err(|e| {
            ConvertError::EncodeFailed {
                page: *page_num,
                detail: e.to_string(),
            }
        })?;
        pages.push(RenderedPage {
            page: *page_num,
            data_url: encoded.data_url,
            width: encoded.width,
            height: encoded.height,
        });
    }

    // ── Step 5: Assemble ─────────────────────────────────────────────────
    let output = ConversionOutput {
        total_pages,
        rendered_pages: pages.len(),
        pages,
        metadata: ConversionMetadata {
            source_url: url.to_string(),
            format: config.format,
            scale: config.scale,
            processed_at: Utc::now(),
        },
    };

    info!(
        "Conversion complete: {}/{} pages, {}ms total",
        output.rendered_pages,
        output.total_pages,
        total_start.elapsed().as_millis()
    );

    Ok(output)
}
