use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tally_server::{run_server, CliArgs, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse();
    let config = ServerConfig::from_args(args);

    run_server(config).await
}
