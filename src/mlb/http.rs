//! HTTP client for the MLB Stats API

use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{ApiTeam, RosterEntry, RosterEnvelope, TeamsEnvelope};
use crate::{Result, SportId, TeamId};

#[cfg(test)]
mod tests;

/// Thin async client over the three Stats API endpoints the sync needs.
#[derive(Debug, Clone)]
pub struct StatsApiClient {
    client: Client,
    base_url: String,
}

impl StatsApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL from the flag, then `MLB_STATS_API_BASE`, then the public API.
    pub fn from_env(explicit: Option<String>) -> Self {
        let base_url = explicit
            .or_else(|| std::env::var(crate::API_BASE_ENV_VAR).ok())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| crate::DEFAULT_API_BASE.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let res = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    /// `GET /api/v1/teams?sportId={sport_id}`
    pub async fn get_teams(&self, sport_id: SportId) -> Result<Vec<ApiTeam>> {
        let envelope: TeamsEnvelope = self
            .get_json("/api/v1/teams", &[("sportId", sport_id.to_string())])
            .await?;
        Ok(envelope.teams)
    }

    /// `GET /api/v1/teams/affiliates?teamIds={team_id}`
    ///
    /// The response usually lists the parent club alongside its affiliates.
    pub async fn get_affiliates(&self, team_id: TeamId) -> Result<Vec<ApiTeam>> {
        let envelope: TeamsEnvelope = self
            .get_json("/api/v1/teams/affiliates", &[("teamIds", team_id.to_string())])
            .await?;
        Ok(envelope.teams)
    }

    /// `GET /api/v1/teams/{team_id}/roster`
    pub async fn get_roster(&self, team_id: TeamId) -> Result<Vec<RosterEntry>> {
        let envelope: RosterEnvelope = self
            .get_json(&format!("/api/v1/teams/{team_id}/roster"), &[])
            .await?;
        Ok(envelope.roster)
    }
}
