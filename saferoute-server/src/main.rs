use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use saferoute_core::prelude::*;
use saferoute_server::{AppState, config::ServiceConfig, serve};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Safe route navigator service
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the TOML configuration
    #[arg(short, long, default_value = "saferoute.toml")]
    config: PathBuf,
    /// Overrides `bind` from the configuration
    #[arg(long)]
    bind: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::load(&cli.config)?;
    let bind = cli.bind.unwrap_or_else(|| config.bind.clone());

    let graph = create_location_graph(&LocationGraphConfig::new(&config.graph_path))?;
    let alert = config.resolve_alert(|key| std::env::var(key).ok())?;
    info!(?alert, "Alert delivery configured");

    // Built outside the runtime: the blocking client owns its own runtime
    let dispatcher = Arc::new(TelegramDispatcher::new(alert)?);
    let state = AppState::new(graph, dispatcher.clone(), &config.user_name);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(state, &bind, config.request_timeout()))?;
    drop(runtime);

    // Last handle to the blocking client must go away off the runtime
    drop(dispatcher);
    Ok(())
}
