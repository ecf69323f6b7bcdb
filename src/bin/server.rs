//! HTTP server binary for the URL resolution gateway
//!
//! Starts an HTTP server that resolves bilibili video URLs to playable
//! CDN addresses and serves the browser page.
//!
//! # Usage
//!
//! ```bash
//! bili-gateway --port 8080 --host 0.0.0.0
//! ```
//!
//! # API Endpoints
//!
//! - `GET /api/parse?url=...`: Resolve a video URL
//! - `GET /ping`: Health check endpoint

use clap::Parser;
use std::path::PathBuf;

/// HTTP gateway resolving video URLs to playable CDN addresses
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "::")]
    host: String,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let loader = bili_gateway::config::ConfigLoader::new();
    let mut settings = loader.load(cli.config.as_deref())?;
    settings.server.host = cli.host.clone();
    settings.server.port = cli.port;

    let app = bili_gateway::server::create_app(settings)?;

    let addr = parse_and_bind_address(&cli.host, cli.port).await?;

    tracing::info!(
        "bili-gateway v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse the host string into a bindable socket address.
///
/// Binding to the IPv6 any-address is attempted first; when the host
/// network stack refuses it, the IPv4 any-address is used instead.
pub async fn parse_and_bind_address(host: &str, port: u16) -> anyhow::Result<std::net::SocketAddr> {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

    if let Ok(ip) = host.parse::<IpAddr>() {
        if ip == IpAddr::V6(Ipv6Addr::UNSPECIFIED) {
            let addr = SocketAddr::new(ip, port);
            return match tokio::net::TcpListener::bind(addr).await {
                Ok(_) => Ok(addr),
                Err(e) => {
                    tracing::warn!(
                        "Could not listen on [::]:{port} (Caused by {e}), falling back to 0.0.0.0"
                    );
                    Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port))
                }
            };
        }
        return Ok(SocketAddr::new(ip, port));
    }

    anyhow::bail!("Invalid host address: {host}. Use '::' for IPv6 or '0.0.0.0' for IPv4");
}
