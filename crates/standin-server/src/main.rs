//! Standin stub server - CLI entry point.

use anyhow::Result;
use clap::Parser;
use standin_server::{MockRegistry, StubServer};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "standin-server",
    about = "Programmable HTTP stub server that replays registered responses for integration and UI tests",
    version
)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "12001")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, env = "LOG_LEVEL", default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = Arc::new(MockRegistry::new());
    let server = StubServer::bind(SocketAddr::new(args.host, args.port), registry).await?;

    tokio::select! {
        result = server.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");
            Ok(())
        }
    }
}
