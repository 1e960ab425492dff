//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::SportId;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pull teams, affiliates and rosters from the Stats API into the local store.
    ///
    /// Fetches every top-level club for the sport, each club's affiliates, and
    /// the roster of every team found. Failed affiliate/roster fetches are
    /// reported and skipped.
    Sync {
        /// SQLite database path (or set `MLB_ROSTER_DB` env var).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Stats API base URL (or set `MLB_STATS_API_BASE` env var).
        #[clap(long)]
        api_base: Option<String>,

        /// Stats API sport id (1 = MLB).
        #[clap(long, default_value_t = SportId::default())]
        sport_id: SportId,

        /// Print per-team progress and the failure list when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Serve the read-only JSON API over the local store.
    Serve {
        /// SQLite database path (or set `MLB_ROSTER_DB` env var).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Interface to bind.
        #[clap(long, default_value = crate::DEFAULT_HOST)]
        host: String,

        /// Port to listen on.
        #[clap(long, short, default_value_t = crate::DEFAULT_PORT)]
        port: u16,
    },

    /// Evaluate a trade proposal read from a JSON file.
    ///
    /// The file holds `players_a`, `players_b` (each player with `value` and
    /// `salary`), `budget_a` and `budget_b`.
    EvaluateTrade {
        /// Path to the proposal JSON.
        #[clap(long, short)]
        file: PathBuf,

        /// Output the decision as JSON instead of a text line.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "mlb-roster",
    version,
    about = "Sync MLB teams and rosters into SQLite and serve them as JSON"
)]
pub struct MlbRoster {
    #[clap(subcommand)]
    pub command: Commands,
}
