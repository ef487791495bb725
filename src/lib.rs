//! # pdf2image-api
//!
//! Fetch a remote PDF, rasterise every page with pdfium, and return the
//! pages as inline base64 data URLs in a single JSON response.
//!
//! ## Why this crate?
//!
//! Web clients that want to *display* a shared PDF (slide embeds, link
//! previews, thumbnails) do not want a PDF: they want images they can drop
//! into an `<img>` tag. This service does exactly that one hop: given a URL
//! (including share links whose PDF hides behind an export path), it answers
//! with ready-to-render page images and nothing is stored anywhere.
//!
//! ## Pipeline Overview
//!
//! ```text
//! POST /api/convert { url, format?, quality?, scale?, maxPages? }
//!  │
//!  ├─ 1. Resolve  validate the URL, rewrite known share links
//!  ├─ 2. Fetch    download with timeout + byte caps (reqwest)
//!  ├─ 3. Render   rasterise pages via pdfium (CPU-bound, spawn_blocking)
//!  ├─ 4. Encode   PNG / JPEG → base64 data URLs
//!  └─ 5. Respond  one JSON envelope with every page inline
//! ```
//!
//! The pipeline is fail-fast: the first error on any stage (or any page)
//! aborts the request, and the caller gets a flat `{ code, message }` error
//! envelope. There is no queue, no cache, and no per-request state that
//! outlives the response.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2image_api::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve("0.0.0.0:8080", AppState::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! Or drive the pipeline directly, without the HTTP layer:
//!
//! ```rust,no_run
//! use pdf2image_api::{convert, ConversionConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConversionConfig::default();
//! let output = convert("https://example.com/slides.pdf", &config).await?;
//! println!("{} pages rendered", output.rendered_pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2image-api` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when embedding only the library:
//! ```toml
//! pdf2image-api = { version = "1.0", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod server;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, OutputFormat};
pub use convert::convert;
pub use error::ConvertError;
pub use output::{ConversionMetadata, ConversionOutput, RenderedPage};
