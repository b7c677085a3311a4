use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "image-resize-service")]
#[command(about = "Resizes remote images and uploads them to S3")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:8080")]
    pub listen_address: SocketAddr,
    /// `.env`-style file with the storage settings. Variables already present in the
    /// environment take precedence over the ones from the file.
    #[arg(long)]
    #[arg(default_value = ".env")]
    pub env_file: PathBuf,
    /// Timeout of the request fetching the source image.
    #[arg(long)]
    #[arg(default_value_t = 30)]
    pub fetch_timeout_secs: u64,
    /// Origin allowed to call the API from a browser. May be repeated.
    #[arg(long = "allowed-origin")]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value_t = 64 * 1024)]
    pub max_body_bytes: usize,
    /// Largest source image the service downloads.
    #[arg(long)]
    #[arg(default_value_t = 20 * 1024 * 1024)]
    pub max_image_bytes: usize,
}
