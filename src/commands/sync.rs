//! Sync command: pull the league from the Stats API into the local store

use std::path::PathBuf;

use tracing::warn;

use crate::{
    ingest::{sync, SyncReport},
    mlb::http::StatsApiClient,
    storage::{resolve_database_path, RosterDatabase},
    Result, SportId,
};

/// Handle the sync command
pub async fn handle_sync(
    db: Option<PathBuf>,
    api_base: Option<String>,
    sport_id: SportId,
    verbose: bool,
) -> Result<SyncReport> {
    let db_path = resolve_database_path(db)?;
    let client = StatsApiClient::from_env(api_base);

    if verbose {
        println!("Database: {}", db_path.display());
        println!("Stats API: {}", client.base_url());
    }
    println!("Syncing teams, affiliates and rosters for sport {}...", sport_id);

    let mut db = RosterDatabase::open(&db_path)?;
    let report = sync(&client, &mut db, sport_id).await?;

    println!(
        "✓ Synced {} teams, {} affiliates, {} players",
        report.top_level_teams, report.affiliates, report.players
    );

    if !report.is_complete() {
        println!("{} team(s) skipped after fetch errors", report.failures.len());
        if verbose {
            for failure in &report.failures {
                println!("  - {}", failure);
            }
        }
    }

    let orphans = db.orphaned_players()?;
    if !orphans.is_empty() {
        warn!(count = orphans.len(), "players reference teams missing from the store");
    }

    if verbose {
        println!(
            "Store now holds {} teams and {} players",
            db.count_teams()?,
            db.count_players()?
        );
    }

    Ok(report)
}
