//! Entry point: parse CLI, load the dataset once, serve forever.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use shotplus::{dataset::Dataset, server, DATA_ENV_VAR, DEFAULT_DATA_FILE, DEFAULT_PORT, PORT_ENV_VAR};
use tracing_subscriber::EnvFilter;

/// Shot+ statistics web service.
#[derive(Debug, Parser)]
#[command(name = "shotplus", version, about)]
struct Cli {
    /// Path to the Shot+ results CSV.
    #[arg(long, env = DATA_ENV_VAR, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Port to listen on.
    #[arg(long, env = PORT_ENV_VAR, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let dataset = Dataset::from_path(&cli.data)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    server::run_server(dataset, addr).await
}
