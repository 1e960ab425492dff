//! Serve command: run the JSON API over the local store

use std::path::PathBuf;

use crate::{
    server::{serve, StoreHandle},
    storage::{resolve_database_path, RosterDatabase},
    Result,
};

use super::resolve_bind_addr;

/// Handle the serve command. Runs until the process is stopped.
pub async fn handle_serve(db: Option<PathBuf>, host: &str, port: u16) -> Result<()> {
    let addr = resolve_bind_addr(host, port)?;
    let db_path = resolve_database_path(db)?;

    // Requests open the store read-only, so the file and tables must exist first
    let db = RosterDatabase::open(&db_path)?;
    let teams = db.count_teams()?;
    drop(db);

    if teams == 0 {
        println!("Store at {} is empty; run `mlb-roster sync` first", db_path.display());
    }

    println!("Serving {} on http://{}", db_path.display(), addr);
    serve(addr, StoreHandle::new(db_path)).await
}
