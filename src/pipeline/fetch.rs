//! PDF download: bounded fetch of the resolved URL into memory.
//!
//! ## Why a browser User-Agent?
//!
//! Document-sharing platforms (and plenty of CDNs) refuse or redirect
//! requests from obvious bot agents. Presenting a mainstream browser UA with
//! an `Accept: application/pdf` preference is what makes export URLs resolve
//! to the actual document.
//!
//! The byte cap is enforced twice: `Content-Length`, when present, rejects
//! oversized documents before a single body byte is buffered, and the
//! buffered length is re-checked afterwards since servers may omit or
//! understate the header.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use std::time::Duration;
use tracing::{debug, info};

/// Browser-like agent; bare bot agents get refused by share platforms.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Download the PDF at `url`, subject to the configured timeout and byte cap.
pub async fn fetch_pdf(url: &str, config: &ConversionConfig) -> Result<Vec<u8>, ConvertError> {
    info!("Downloading PDF from: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.download_timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ConvertError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/pdf,*/*")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ConvertError::DownloadTimeout {
                    url: url.to_string(),
                    secs: config.download_timeout_secs,
                }
            } else {
                ConvertError::DownloadFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

    if !response.status().is_success() {
        return Err(ConvertError::DownloadFailed {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    if let Some(len) = response.content_length() {
        debug!("Content-Length: {} bytes", len);
        if len > config.max_pdf_bytes {
            return Err(ConvertError::TooLarge {
                bytes: len,
                limit: config.max_pdf_bytes,
            });
        }
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ConvertError::DownloadTimeout {
                    url: url.to_string(),
                    secs: config.download_timeout_secs,
                }
            } else {
                ConvertError::DownloadFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

    if bytes.len() as u64 > config.max_pdf_bytes {
        return Err(ConvertError::TooLarge {
            bytes: bytes.len() as u64,
            limit: config.max_pdf_bytes,
        });
    }

    info!("Downloaded {} bytes", bytes.len());
    Ok(bytes.to_vec())
}
