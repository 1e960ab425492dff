//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use mlb_roster::{
    cli::{Commands, MlbRoster},
    commands::{evaluate_trade::handle_evaluate_trade, serve::handle_serve, sync::handle_sync},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let app = MlbRoster::parse();

    match app.command {
        Commands::Sync {
            db,
            api_base,
            sport_id,
            verbose,
        } => {
            handle_sync(db, api_base, sport_id, verbose).await?;
        }

        Commands::Serve { db, host, port } => handle_serve(db, &host, port).await?,

        Commands::EvaluateTrade { file, json } => {
            handle_evaluate_trade(&file, json)?;
        }
    }

    Ok(())
}
