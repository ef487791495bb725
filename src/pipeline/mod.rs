//! Pipeline stages for PDF-to-image conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. switch rendering backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! resolve ──▶ fetch ──▶ render ──▶ encode
//! (validate/  (reqwest,  (pdfium)   (PNG/JPEG +
//!  rewrite)    caps)                 base64)
//! ```
//!
//! 1. [`resolve`] — validate the caller's URL and rewrite known share links
//!    to their PDF-export form
//! 2. [`fetch`]   — download the document with timeout and byte caps; the
//!    only stage with network I/O
//! 3. [`render`]  — rasterise pages; runs in `spawn_blocking` because pdfium
//!    is not async-safe
//! 4. [`encode`]  — transcode each bitmap and wrap it as a base64 data URL

pub mod encode;
pub mod fetch;
pub mod render;
pub mod resolve;
