//! PDF rasterisation: render pages to `DynamicImage` via pdfium.
//!
//! ## Why spawn_blocking?
//!
//! The `pdfium-render` crate wraps the pdfium C++ library, which uses
//! thread-local state internally and is not safe to call from async contexts.
//! `tokio::task::spawn_blocking` moves the work onto a dedicated thread pool
//! thread designed for blocking operations, preventing the Tokio worker
//! threads from stalling during CPU-heavy rendering.
//!
//! ## Sizing
//!
//! PDF pages are measured in points; the target bitmap is
//! `floor(points × scale)` per dimension. `max_rendered_pixels` caps the
//! longest edge, shrinking both dimensions proportionally, so pdfium never
//! allocates an unbounded bitmap for outsized source pages.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use tracing::{debug, info};

/// Rasterise the leading pages of an in-memory PDF.
///
/// Renders `min(total_pages, config.max_pages)` pages in document order.
/// This runs inside `spawn_blocking` since pdfium operations are CPU-bound.
///
/// # Returns
/// The source document's page count and a vector of
/// `(page_number_1based, DynamicImage)` tuples.
pub async fn render_pages(
    pdf_bytes: Vec<u8>,
    config: &ConversionConfig,
) -> Result<(usize, Vec<(usize, DynamicImage)>), ConvertError> {
    let scale = config.scale;
    let max_pages = config.max_pages;
    let max_pixels = config.max_rendered_pixels;

    tokio::task::spawn_blocking(move || {
        render_pages_blocking(&pdf_bytes, scale, max_pages, max_pixels)
    })
    .await
    .map_err(|e| ConvertError::Internal(format!("Render task panicked: {}", e)))?
}

/// Blocking implementation of page rendering.
fn render_pages_blocking(
    pdf_bytes: &[u8],
    scale: f32,
    max_pages: Option<usize>,
    max_pixels: u32,
) -> Result<(usize, Vec<(usize, DynamicImage)>), ConvertError> {
    let pdfium = Pdfium::default();

    let document = pdfium
        .load_pdf_from_byte_slice(pdf_bytes, None)
        .map_err(|e| ConvertError::CorruptPdf {
            detail: format!("{:?}", e),
        })?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    let pages_to_render = max_pages.map_or(total_pages, |m| total_pages.min(m));
    info!(
        "PDF loaded: {} pages, rendering {}",
        total_pages, pages_to_render
    );

    let mut results = Vec::with_capacity(pages_to_render);

    for idx in 0..pages_to_render {
        let page_num = idx + 1;
        let page = pages
            .get(idx as u16)
            .map_err(|e| ConvertError::RenderFailed {
                page: page_num,
                detail: format!("{:?}", e),
            })?;

        let (width, height) = target_dimensions(
            page.width().value,
            page.height().value,
            scale,
            max_pixels,
        );

        let render_config = PdfRenderConfig::new()
            .set_target_width(width)
            .set_target_height(height);

        let bitmap =
            page.render_with_config(&render_config)
                .map_err(|e| ConvertError::RenderFailed {
                    page: page_num,
                    detail: format!("{:?}", e),
                })?;

        let image = bitmap.as_image();
        debug!(
            "Rendered page {} -> {}x{} px",
            page_num,
            image.width(),
            image.height()
        );

        results.push((page_num, image));
    }

    Ok((total_pages, results))
}

/// Compute the target bitmap dimensions for a page.
///
/// Scales the page's point size, then shrinks both dimensions proportionally
/// if the longest edge exceeds `max_pixels`.
fn target_dimensions(width_pts: f32, height_pts: f32, scale: f32, max_pixels: u32) -> (i32, i32) {
    let target_w = (width_pts * scale).floor().max(1.0);
    let target_h = (height_pts * scale).floor().max(1.0);

    let longest = target_w.max(target_h);
    let shrink = if longest > max_pixels as f32 {
        max_pixels as f32 / longest
    } else {
        1.0
    };

    (
        (target_w * shrink).floor().max(1.0) as i32,
        (target_h * shrink).floor().max(1.0) as i32,
    )
}
