//! League sync: top-level clubs -> affiliates -> rosters.
//!
//! Runs sequentially against the Stats API and writes through to the store
//! as it goes. Affiliate and roster fetches are best effort: a failure is
//! logged, recorded in the [`SyncReport`], and that team's subtree is
//! skipped. There is no retry and no rollback; repeated runs converge
//! because every write is an upsert.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    mlb::http::StatsApiClient, storage::RosterDatabase, MlbError, Result, SportId, TeamId,
};


/// Which per-team fetch failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStage {
    Affiliates,
    Roster,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStage::Affiliates => write!(f, "affiliates"),
            SyncStage::Roster => write!(f, "roster"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncFailure {
    pub team_id: TeamId,
    pub stage: SyncStage,
    pub message: String,
}

impl fmt::Display for SyncFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to fetch {} for team {}: {}",
            self.stage, self.team_id, self.message
        )
    }
}

/// Counts of what one sync run wrote, plus the subtrees it skipped
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyncReport {
    pub top_level_teams: usize,
    pub affiliates: usize,
    pub players: usize,
    pub failures: Vec<SyncFailure>,
}

impl SyncReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, team_id: TeamId, stage: SyncStage, err: &MlbError) {
        let failure = SyncFailure {
            team_id,
            stage,
            message: err.to_string(),
        };
        warn!(team_id = %team_id, stage = %stage, error = %err, "skipping subtree");
        self.failures.push(failure);
    }
}

/// Sync every club for `sport_id`, each club's affiliates, and every team's roster.
///
/// Fails only if the top-level team list cannot be fetched (or is empty) or
/// the store rejects a write.
pub async fn sync(
    client: &StatsApiClient,
    db: &mut RosterDatabase,
    sport_id: SportId,
) -> Result<SyncReport> {
    let clubs = client.get_teams(sport_id).await?;
    if clubs.is_empty() {
        return Err(MlbError::NoData);
    }
    info!(sport_id = %sport_id, clubs = clubs.len(), "fetched top-level teams");

    let mut report = SyncReport::default();
    let mut club_ids = Vec::with_capacity(clubs.len());

    for club in clubs {
        club_ids.push(club.id);
        db.upsert_team(&club.into_team(None))?;
        report.top_level_teams += 1;
    }

    for club_id in club_ids {
        sync_roster(client, db, club_id, &mut report).await?;

        let affiliates = match client.get_affiliates(club_id).await {
            Ok(affiliates) => affiliates,
            Err(e) => {
                report.record(club_id, SyncStage::Affiliates, &e);
                continue;
            }
        };

        for affiliate in affiliates {
            let affiliate_id = affiliate.id;
            // The affiliates endpoint lists the parent club too
            if affiliate_id == club_id {
                debug!(team_id = %club_id, "skipping parent in its own affiliate list");
                continue;
            }

            db.upsert_team(&affiliate.into_team(Some(club_id)))?;
            report.affiliates += 1;

            sync_roster(client, db, affiliate_id, &mut report).await?;
        }

        debug!(team_id = %club_id, "club subtree done");
    }

    info!(
        top_level_teams = report.top_level_teams,
        affiliates = report.affiliates,
        players = report.players,
        failures = report.failures.len(),
        "sync finished"
    );

    Ok(report)
}

async fn sync_roster(
    client: &StatsApiClient,
    db: &mut RosterDatabase,
    team_id: TeamId,
    report: &mut SyncReport,
) -> Result<()> {
    let roster = match client.get_roster(team_id).await {
        Ok(roster) => roster,
        Err(e) => {
            report.record(team_id, SyncStage::Roster, &e);
            return Ok(());
        }
    };

    let players: Vec<_> = roster
        .into_iter()
        .map(|entry| entry.into_player(team_id))
        .collect();

    report.players += db.upsert_roster(&players)?;
    debug!(team_id = %team_id, players = players.len(), "roster stored");
    Ok(())
}
