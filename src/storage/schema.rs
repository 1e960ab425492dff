//! Database schema and connection management

use crate::error::MlbError;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Connection to the roster store.
///
/// Each value owns exactly one connection; callers open one per unit of work
/// and drop it when done.
pub struct RosterDatabase {
    pub(crate) conn: Connection,
}

impl RosterDatabase {
    /// Open (or create) the database file at `path` and ensure tables exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Open an existing database file for reads only.
    ///
    /// Fails if the file does not exist; never creates directories or tables.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Create an in-memory database (tests and dry runs)
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Bundled SQLite enforces foreign keys by default; rows written during a
        // partial sync may reference teams that are not stored yet
        self.conn.pragma_update(None, "foreign_keys", false)?;

        // parent_id is NULL for top-level clubs
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                location_name TEXT NOT NULL,
                abbreviation TEXT NOT NULL,
                parent_id INTEGER REFERENCES teams(team_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                jersey_number TEXT,
                position TEXT NOT NULL,
                team_id INTEGER NOT NULL REFERENCES teams(team_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_teams_parent ON teams(parent_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_team ON players(team_id)",
            [],
        )?;

        Ok(())
    }
}

/// Path: ~/.cache/mlb-roster/mlb.db
pub fn default_database_path() -> crate::Result<PathBuf> {
    let cache_dir = cache_dir().ok_or_else(|| MlbError::Config {
        message: "Could not determine cache directory".to_string(),
    })?;
    Ok(cache_dir.join("mlb-roster").join("mlb.db"))
}

/// Pick the database path: explicit flag, then `MLB_ROSTER_DB`, then the cache dir default.
pub fn resolve_database_path(explicit: Option<PathBuf>) -> crate::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match std::env::var(crate::DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => default_database_path(),
    }
}
