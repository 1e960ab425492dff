//! MLB Roster Library
//!
//! Syncs MLB clubs, their minor-league affiliates and every team's roster from
//! the public MLB Stats API into a local SQLite store, and exposes that store
//! through a small read-only JSON API.
//!
//! ## Components
//!
//! - **Store** (`storage`): two tables, `teams` and `players`, with upsert-by-id writes
//! - **Ingestion** (`ingest`): league -> teams -> affiliates -> rosters, best effort per team
//! - **Query service** (`server`): `GET /teams` and `GET /players/{teamId}`
//! - **Trade evaluator** (`trade`): value balance and budget checks on a proposal
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_roster::{ingest::sync, mlb::http::StatsApiClient, storage::RosterDatabase, SportId};
//!
//! # async fn example() -> mlb_roster::Result<()> {
//! let mut db = RosterDatabase::open("mlb.db")?;
//! let client = StatsApiClient::new(mlb_roster::DEFAULT_API_BASE);
//! let report = sync(&client, &mut db, SportId::default()).await?;
//! println!("{} players stored", report.players);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export MLB_ROSTER_DB=/var/lib/mlb/mlb.db
//! export MLB_STATS_API_BASE=https://statsapi.mlb.com
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod ingest;
pub mod mlb;
pub mod server;
pub mod storage;
pub mod trade;

// Re-export commonly used types
pub use cli::types::{PlayerId, SportId, TeamId};
pub use error::{MlbError, Result};
pub use trade::{evaluate_trade, TradeDecision, TradePlayer};

pub const DB_PATH_ENV_VAR: &str = "MLB_ROSTER_DB";
pub const API_BASE_ENV_VAR: &str = "MLB_STATS_API_BASE";

pub const DEFAULT_API_BASE: &str = "https://statsapi.mlb.com";
pub const MLB_SPORT_ID: u32 = 1;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
