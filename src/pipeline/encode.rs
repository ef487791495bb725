//! Image encoding: `DynamicImage` → base64 data URL.
//!
//! PNG is the default: rendered text survives lossless compression intact.
//! JPEG is offered for callers that trade crispness for payload size; pdfium
//! bitmaps carry an alpha channel, which JPEG cannot represent, so the JPEG
//! path converts to RGB8 first.

use crate::config::OutputFormat;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::io::Cursor;
use tracing::debug;

/// An encoded page image plus its final pixel dimensions.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Encode a rasterised page as a base64 data URL in the requested format.
pub fn encode_page(
    img: &DynamicImage,
    format: OutputFormat,
    quality: u8,
) -> Result<EncodedImage, image::ImageError> {
    let mut buf = Vec::new();

    match format {
        OutputFormat::Png => {
            img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
        }
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel; drop it before encoding.
            let rgb = img.to_rgb8();
            let mut cursor = Cursor::new(&mut buf);
            let encoder = JpegEncoder::new_with_quality(&mut cursor, quality);
            rgb.write_with_encoder(encoder)?;
        }
    }

    let b64 = STANDARD.encode(&buf);
    debug!(
        "Encoded {}x{} page -> {} bytes base64 ({})",
        img.width(),
        img.height(),
        b64.len(),
        format
    );

    Ok(EncodedImage {
        data_url: format!("data:{};base64,{}", format.mime_type(), b64),
        width: img.width(),
        height: img.height(),
    })
}
