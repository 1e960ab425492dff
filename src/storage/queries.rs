//! Upserts and read queries

use super::{models::*, schema::RosterDatabase};
use crate::{PlayerId, TeamId};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

const UPSERT_TEAM_SQL: &str = "INSERT OR REPLACE INTO teams
     (team_id, name, location_name, abbreviation, parent_id)
     VALUES (?, ?, ?, ?, ?)";

const UPSERT_PLAYER_SQL: &str = "INSERT OR REPLACE INTO players
     (player_id, name, jersey_number, position, team_id)
     VALUES (?, ?, ?, ?, ?)";

impl RosterDatabase {
    /// Insert a team, or overwrite every column of an existing row with the same id
    pub fn upsert_team(&mut self, team: &Team) -> Result<()> {
        self.conn.execute(
            UPSERT_TEAM_SQL,
            params![
                team.team_id.as_i64(),
                team.name,
                team.location_name,
                team.abbreviation,
                team.parent_id.map(|p| p.as_i64())
            ],
        )?;
        Ok(())
    }

    /// Insert a player, or overwrite every column of an existing row with the same id
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        self.conn.execute(
            UPSERT_PLAYER_SQL,
            params![
                player.player_id.as_i64(),
                player.name,
                player.jersey_number,
                player.position,
                player.team_id.as_i64()
            ],
        )?;
        Ok(())
    }

    /// Upsert a whole roster inside one transaction. Returns the number of rows written.
    pub fn upsert_roster(&mut self, players: &[Player]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(UPSERT_PLAYER_SQL)?;
            for player in players {
                stmt.execute(params![
                    player.player_id.as_i64(),
                    player.name,
                    player.jersey_number,
                    player.position,
                    player.team_id.as_i64()
                ])?;
            }
        }
        tx.commit()?;
        Ok(players.len())
    }

    /// All top-level clubs (no parent, or parent pointing at itself), storage order
    pub fn list_top_level_teams(&self) -> Result<Vec<TeamSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_id, name FROM teams
             WHERE parent_id IS NULL OR parent_id = team_id
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(TeamSummary {
                id: TeamId::new(row.get(0)?),
                name: row.get(1)?,
            })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Players currently on `team_id`, storage order. Unknown teams yield an empty list.
    pub fn list_players(&self, team_id: TeamId) -> Result<Vec<PlayerSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, position FROM players
             WHERE team_id = ?
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map(params![team_id.as_i64()], |row| {
            Ok(PlayerSummary {
                id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
                position: row.get(2)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Full team row by id
    pub fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                "SELECT team_id, name, location_name, abbreviation, parent_id
                 FROM teams WHERE team_id = ?",
                params![team_id.as_i64()],
                |row| self.row_to_team(row),
            )
            .optional()?;
        Ok(team)
    }

    /// Full player row by id
    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT player_id, name, jersey_number, position, team_id
                 FROM players WHERE player_id = ?",
                params![player_id.as_i64()],
                |row| {
                    Ok(Player {
                        player_id: PlayerId::new(row.get(0)?),
                        name: row.get(1)?,
                        jersey_number: row.get(2)?,
                        position: row.get(3)?,
                        team_id: TeamId::new(row.get(4)?),
                    })
                },
            )
            .optional()?;
        Ok(player)
    }

    /// Affiliates linked to `parent_id`, excluding the parent itself
    pub fn list_affiliates(&self, parent_id: TeamId) -> Result<Vec<Team>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_id, name, location_name, abbreviation, parent_id
             FROM teams
             WHERE parent_id = ?1 AND team_id != ?1
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map(params![parent_id.as_i64()], |row| self.row_to_team(row))?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    pub fn count_teams(&self) -> Result<u64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM teams", [], |row| row.get(0))?;
        Ok(n as u64)
    }

    pub fn count_players(&self) -> Result<u64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(n as u64)
    }

    /// Players whose `team_id` has no matching team row
    pub fn orphaned_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT p.player_id, p.name, p.jersey_number, p.position, p.team_id
             FROM players p
             LEFT JOIN teams t ON t.team_id = p.team_id
             WHERE t.team_id IS NULL
             ORDER BY p.rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Player {
                player_id: PlayerId::new(row.get(0)?),
                name: row.get(1)?,
                jersey_number: row.get(2)?,
                position: row.get(3)?,
                team_id: TeamId::new(row.get(4)?),
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    fn row_to_team(&self, row: &Row) -> rusqlite::Result<Team> {
        let parent: Option<i64> = row.get(4)?;
        Ok(Team {
            team_id: TeamId::new(row.get(0)?),
            name: row.get(1)?,
            location_name: row.get(2)?,
            abbreviation: row.get(3)?,
            parent_id: parent.map(TeamId::new),
        })
    }
}
