use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use imagist::application::{ServerConfig, serve};
use imagist::infrastructure::workers_ai::{DEFAULT_MODEL, WORKERS_AI_URL};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(author, version, about = "Serve AI-generated images from text prompts", long_about = None)]
struct Cli {
    #[arg(long, env = "IMAGIST_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    bind_address: SocketAddr,

    /// Base URL of the Workers AI REST API.
    #[arg(long, env = "IMAGIST_UPSTREAM_URL", default_value = WORKERS_AI_URL)]
    upstream_url: String,

    /// Cloudflare account the model runs under.
    #[arg(long, env = "IMAGIST_ACCOUNT_ID")]
    account_id: Option<String>,

    #[arg(long, env = "IMAGIST_API_TOKEN")]
    api_token: Option<String>,

    /// Text-to-image model identifier.
    #[arg(long, env = "IMAGIST_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    if cli.account_id.is_none() || cli.api_token.is_none() {
        tracing::warn!(
            "no Workers AI credentials configured - generation requests will fail upstream"
        );
    }

    let config = ServerConfig {
        bind_address: cli.bind_address,
        upstream_url: cli.upstream_url,
        account_id: cli.account_id.unwrap_or_default(),
        api_token: cli.api_token.unwrap_or_default(),
        model: cli.model,
    };

    serve(config).await
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if logging cannot be initialized
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
