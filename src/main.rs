use anyhow::Result;
use clap::Parser;
use pdq_connect_exporter::{config::Config, server};
use secrecy::ExposeSecret;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/Default.toml")]
    config: String,

    /// PDQ Connect API base URL (overrides config)
    #[arg(long, env = "PDQ_BASE_URL")]
    pdq_base_url: Option<String>,

    /// PDQ Connect API key (overrides config)
    #[arg(long, env = "PDQ_API_KEY")]
    pdq_api_key: Option<String>,

    /// Port to listen on for metrics
    #[arg(short, long, env = "EXPORTER_PORT", default_value = "8000")]
    port: u16,

    /// Address to bind to
    #[arg(short, long, env = "EXPORTER_ADDR", default_value = "0.0.0.0")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting PDQ Connect Prometheus Exporter v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(&args.config)?;

    // Override with CLI arguments if provided
    if let Some(base_url) = args.pdq_base_url {
        config.pdq.base_url = base_url;
    }
    if let Some(api_key) = args.pdq_api_key {
        config.pdq.api_key = secrecy::SecretString::new(api_key.into());
    }
    config.server.port = args.port;
    config.server.addr = args.addr;

    // The key is never shipped in source or config defaults; refuse to start
    // without one rather than polling with guaranteed 401s.
    if config.pdq.api_key.expose_secret().is_empty() {
        anyhow::bail!(
            "No PDQ Connect API key configured; set PDQ_API_KEY or pdq.api_key in the config file"
        );
    }

    info!("Configuration loaded successfully");
    info!("PDQ Connect API: {}", config.pdq.base_url);
    info!(
        "Metrics endpoint: http://{}:{}/metrics",
        config.server.addr, config.server.port
    );

    // Start the metrics server
    if let Err(e) = server::start(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
