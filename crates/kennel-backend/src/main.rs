//! Kennel backend - in-memory dog registry served over HTTP

use clap::Parser;
use kennel_backend::error::{DaemonError, DaemonResult};
use kennel_backend::{KennelConfig, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Kennel backend CLI
#[derive(Parser)]
#[command(name = "kennel-backend")]
#[command(about = "Kennel - in-memory dog registry", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "KENNEL_CONFIG")]
    config: Option<String>,

    /// Listen address, overrides the configuration
    #[arg(short, long, env = "KENNEL_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level, overrides the configuration
    #[arg(long, env = "KENNEL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "KENNEL_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    let mut config = KennelConfig::load(cli.config.as_deref())
        .map_err(|e| DaemonError::Config(e.to_string()))?;

    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Server::new(config).run().await
}
