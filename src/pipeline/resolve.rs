//! URL resolution: validate the caller's URL and rewrite share links.
//!
//! Gamma share links (`gamma.app/docs/<id>` or `gamma.app/embed/<id>`) point
//! at an HTML viewer, not the document itself; the PDF lives behind the
//! deterministic `/export/pdf` path. Rewriting here keeps the download stage
//! a dumb byte fetcher with no platform knowledge.

use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static GAMMA_SHARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"gamma\.app/(?:docs|embed)/([a-zA-Z0-9]+)").unwrap());

/// Check if the input string looks like an HTTP(S) URL.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Validate the caller-supplied URL and return the URL to actually download.
///
/// Gamma share links are rewritten to their PDF-export form; every other
/// valid URL passes through unchanged.
pub fn resolve_source_url(url: &str) -> Result<String, ConvertError> {
    if url.trim().is_empty() {
        return Err(ConvertError::MissingUrl);
    }
    if !is_url(url) {
        return Err(ConvertError::InvalidUrl {
            input: url.to_string(),
        });
    }

    if url.contains("gamma.app") {
        if let Some(caps) = GAMMA_SHARE_RE.captures(url) {
            let rewritten = format!("https://gamma.app/docs/{}/export/pdf", &caps[1]);
            debug!("Rewrote share link {} -> {}", url, rewritten);
            return Ok(rewritten);
        }
    }

    Ok(url.to_string())
}
