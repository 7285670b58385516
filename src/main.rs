use anyhow::Result;
use clap::Parser;
use sdg_infographic::models::Config;
use sdg_infographic::relay::Relay;
use sdg_infographic::startup::build_router;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "sdg-infographic")]
#[command(about = "Serve the faith & SDG infographic generator")]
struct CliArgs {
    /// Interface to bind (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT).
    #[arg(long, short)]
    port: Option<u16>,

    /// Directory holding the browser client (overrides STATIC_DIR).
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,
}

impl CliArgs {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sdg_infographic=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let mut config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    args.apply(&mut config);

    let relay = Arc::new(Relay::from_config(&config, reqwest::Client::new()));
    let app = build_router(relay, &config.static_dir);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Server running at http://localhost:{}", config.port);
    axum::serve(listener, app).await.map_err(|e| {
        error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = CliArgs::parse_from(["sdg-infographic", "--port", "8081", "--static-dir", "web"]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.port, 8081);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.static_dir, PathBuf::from("web"));
    }

    #[test]
    fn test_cli_rejects_invalid_port() {
        assert!(CliArgs::try_parse_from(["sdg-infographic", "--port", "http"]).is_err());
    }
}
