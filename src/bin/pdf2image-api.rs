//! Server binary for pdf2image-api.
//!
//! A thin shim over the library crate that maps CLI flags and environment
//! variables to service configuration and starts the HTTP listener.

use anyhow::{Context, Result};
use clap::Parser;
use pdf2image_api::server::{serve, AppState};
use pdf2image_api::ConversionConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "pdf2image-api", version, about = "PDF to Image API server")]
struct Args {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "PDF2IMAGE_ADDR", default_value = "0.0.0.0:8080")]
    addr: String,

    /// Maximum accepted PDF size in bytes.
    #[arg(long, env = "PDF2IMAGE_MAX_PDF_BYTES", default_value_t = pdf2image_api::config::DEFAULT_MAX_PDF_BYTES)]
    max_pdf_bytes: u64,

    /// Download timeout in seconds.
    #[arg(long, env = "PDF2IMAGE_DOWNLOAD_TIMEOUT_SECS", default_value_t = pdf2image_api::config::DEFAULT_DOWNLOAD_TIMEOUT_SECS)]
    download_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdf2image_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let defaults = ConversionConfig::builder()
        .max_pdf_bytes(args.max_pdf_bytes)
        .download_timeout_secs(args.download_timeout_secs)
        .build()
        .context("invalid service configuration")?;

    tracing::info!("Starting PDF to Image API server");
    serve(&args.addr, AppState::new(defaults))
        .await
        .with_context(|| format!("failed to serve on {}", args.addr))?;

    Ok(())
}
