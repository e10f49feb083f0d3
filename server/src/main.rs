mod api;
mod cleanup;
mod config;
mod registry;
mod web_server;

use clap::Parser;
use tictactoe_engine::{log, logger};

use cleanup::CleanupTask;
use config::ServerConfig;
use registry::GameRegistry;

#[derive(Parser)]
#[command(name = "tictactoe_server", about = "Tic-tac-toe over HTTP with a browser front end")]
struct Args {
    /// Path to the YAML config file; defaults are used if it is absent.
    #[arg(long, default_value = "tictactoe_server.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let config = ServerConfig::load(&args.config)?;
    let registry = GameRegistry::new();

    let cleanup = CleanupTask::new(
        registry.clone(),
        config.cleanup_check_interval(),
        config.game_inactivity_timeout(),
    );
    tokio::spawn(async move { cleanup.run().await });

    web_server::run(registry, &config).await?;

    log!("Server shut down gracefully");
    Ok(())
}
