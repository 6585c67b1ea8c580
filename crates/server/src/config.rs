//! Server configuration from command-line flags and the environment.

use clap::Parser;
use header_theme_branding::DEFAULT_TOLERANCE;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default request body limit for logo uploads (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Parser, Debug, Clone)]
#[command(name = "header-theme-server")]
#[command(about = "Serves the logo and themed header style of the banking assistant")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "HEADER_THEME_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Directory the logo and header style are stored in.
    #[arg(long, env = "HEADER_THEME_STORE_DIR", default_value = "uploads")]
    pub store_dir: PathBuf,

    /// Color grouping tolerance for dominant color extraction (0-100).
    #[arg(
        long,
        env = "HEADER_THEME_TOLERANCE",
        default_value_t = DEFAULT_TOLERANCE,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub tolerance: u8,

    /// Largest accepted upload request, in bytes.
    #[arg(long, env = "HEADER_THEME_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Comma-separated CORS origins. Empty allows any origin.
    #[arg(long, env = "HEADER_THEME_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Cloud Storage bucket. When set, blobs go to the bucket and fall back
    /// to the store directory if the bucket is unreachable.
    #[cfg(feature = "gcs")]
    #[arg(long, env = "HEADER_THEME_GCS_BUCKET")]
    pub gcs_bucket: Option<String>,

    /// Object name prefix inside the bucket.
    #[cfg(feature = "gcs")]
    #[arg(long, env = "HEADER_THEME_GCS_PREFIX", default_value = header_theme_branding::DEFAULT_GCS_PREFIX)]
    pub gcs_prefix: String,

    /// OAuth2 access token for the bucket.
    #[cfg(feature = "gcs")]
    #[arg(long, env = "HEADER_THEME_GCS_TOKEN", hide_env_values = true)]
    pub gcs_token: Option<String>,

    /// Cloud Storage API endpoint, for emulators.
    #[cfg(feature = "gcs")]
    #[arg(long, env = "HEADER_THEME_GCS_API", default_value = header_theme_branding::DEFAULT_GCS_API)]
    pub gcs_api: String,
}
