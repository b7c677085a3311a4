use crate::app_context::AppContext;
use crate::cli::Args;
use crate::fetch::HttpImageFetcher;
use crate::storage::env::StorageConfig;
use crate::storage::s3::S3Storage;
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

mod app_context;
mod cli;
mod fetch;
mod health;
mod http;
mod images;
mod logging;
mod storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    // Loaded before logging so that `RUST_LOG` may come from the file too.
    let env_file_result = storage::load_env_file(&args.env_file);
    logging::init();
    match env_file_result {
        Ok(()) => tracing::info!("Loaded environment from `{}`.", args.env_file.display()),
        Err(err) if err.not_found() => tracing::info!(
            "No `{}` file found, using the process environment only.",
            args.env_file.display()
        ),
        Err(err) => tracing::warn!("Failed to load `{}`: {}", args.env_file.display(), err),
    }

    storage::init();
    let storage_config = StorageConfig::from_env().context("Invalid storage configuration")?;
    tracing::info!(?storage_config, "Initialized storage configuration.");
    let storage = S3Storage::new(&storage_config);
    let fetcher = HttpImageFetcher::new(
        Duration::from_secs(args.fetch_timeout_secs),
        args.max_image_bytes,
    )
        .context("Failed to build the HTTP client")?;
    let app_context = AppContext::new(Arc::new(fetcher), Arc::new(storage));

    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .with_context(|| format!("Failed to bind to {}", args.listen_address))?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router).await.context("Server error")?;
    Ok(())
}
