//! DeepDoc static host.
//!
//! Serves the compiled search client. The search service itself runs
//! elsewhere; its URL is baked into the client at build time.

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use deepdoc_core::Config;

/// Command-line interface for the DeepDoc static host.
#[derive(Parser)]
#[command(name = "deepdoc-server", version, about = "Serve the DeepDoc search client")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "DEEPDOC_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides server.address)
    #[arg(short, long)]
    address: Option<String>,

    /// Directory holding the compiled site (overrides server.site_root)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(address) = &self.address {
            config.server.address = address.clone();
        }
        if let Some(site_root) = &self.site_root {
            config.server.site_root = site_root.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    let mut config = Config::load_with_env(cli.config.as_deref())?;
    cli.apply(&mut config);

    let address: SocketAddr = config
        .server
        .address
        .parse()
        .wrap_err_with(|| format!("invalid listen address {}", config.server.address))?;
    let site_root = &config.server.site_root;
    if !site_root.join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html; build the frontend first",
            site_root.display()
        );
    }

    let router = server::create_router(site_root);
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, site_root = %site_root.display(), "serving DeepDoc");

    axum::serve(listener, router).await?;
    Ok(())
}
