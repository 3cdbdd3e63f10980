use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use tripsync_server::config::AppConfig;
use tripsync_server::http_server::{self, AppState};

#[derive(Parser, Debug)]
#[command(name = "tripsync-daemon", about = "TripSync travel-planning server")]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:3000
    #[arg(long)]
    bind: Option<String>,

    /// Google AI API key (falls back to GOOGLE_AI_KEY)
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Gemini model to use
    #[arg(short = 'o', long)]
    model: Option<String>,

    /// JWT signing secret (falls back to TRIPSYNC_JWT_SECRET)
    #[arg(long)]
    jwt_secret: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; ignore a missing file.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tripsync_server=debug".into()),
        )
        .init();

    info!("Starting TripSync daemon");

    let args = Args::parse();

    // Load config from file (or defaults), then env, then CLI args.
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::default(),
    }
    .apply_env();

    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(api_key) = args.api_key {
        config.gemini.api_key = Some(api_key);
    }
    if let Some(model) = args.model {
        config.gemini.model_name = Some(model);
    }
    if let Some(secret) = args.jwt_secret {
        config.jwt_secret = secret;
    }

    if !config.gemini.has_credential() {
        info!("No Gemini API key configured; trip generation will use fallback output");
    }

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind_addr))?;

    let state = AppState::new(config);
    http_server::run_server(state, addr).await
}
