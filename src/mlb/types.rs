//! Wire types for the MLB Stats API (`/api/v1`).
//!
//! Only the fields the store keeps are decoded; everything else in the
//! payloads is ignored.

use crate::storage::{Player, Team};
use crate::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// Envelope shared by `/teams` and `/teams/affiliates`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamsEnvelope {
    #[serde(default)]
    pub teams: Vec<ApiTeam>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiTeam {
    pub id: TeamId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "locationName", default)]
    pub location_name: String,
    #[serde(default)]
    pub abbreviation: String,
}

impl ApiTeam {
    pub fn into_team(self, parent_id: Option<TeamId>) -> Team {
        Team {
            team_id: self.id,
            name: self.name,
            location_name: self.location_name,
            abbreviation: self.abbreviation,
            parent_id,
        }
    }
}

/// Envelope for `/teams/{id}/roster`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterEnvelope {
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterEntry {
    pub person: Person,
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub position: Option<ApiPosition>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Person {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiPosition {
    #[serde(default)]
    pub abbreviation: String,
}

impl RosterEntry {
    pub fn into_player(self, team_id: TeamId) -> Player {
        // The API sends "" for players without a number
        let jersey_number = self
            .jersey_number
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Player {
            player_id: self.person.id,
            name: self.person.full_name,
            jersey_number,
            position: self.position.map(|p| p.abbreviation).unwrap_or_default(),
            team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_defaults_for_missing_fields() {
        let envelope: TeamsEnvelope = serde_json::from_value(json!({
            "copyright": "ignored",
            "teams": [{"id": 147, "name": "New York Yankees"}]
        }))
        .unwrap();

        let team = envelope.teams[0].clone().into_team(None);
        assert_eq!(team.team_id, TeamId::new(147));
        assert_eq!(team.location_name, "");
        assert_eq!(team.abbreviation, "");
        assert!(team.parent_id.is_none());
    }

    #[test]
    fn test_missing_list_key_is_empty() {
        let teams: TeamsEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(teams.teams.is_empty());

        let roster: RosterEnvelope = serde_json::from_value(json!({"link": "/x"})).unwrap();
        assert!(roster.roster.is_empty());
    }

    #[test]
    fn test_roster_entry_into_player() {
        let entry: RosterEntry = serde_json::from_value(json!({
            "person": {"id": 592450, "fullName": "Aaron Judge", "link": "/api/v1/people/592450"},
            "jerseyNumber": "99",
            "position": {"code": "9", "name": "Outfielder", "abbreviation": "RF"},
            "status": {"code": "A"}
        }))
        .unwrap();

        let player = entry.into_player(TeamId::new(147));
        assert_eq!(player.player_id, PlayerId::new(592450));
        assert_eq!(player.name, "Aaron Judge");
        assert_eq!(player.jersey_number.as_deref(), Some("99"));
        assert_eq!(player.position, "RF");
        assert_eq!(player.team_id, TeamId::new(147));
    }

    #[test]
    fn test_blank_jersey_and_missing_position() {
        let entry: RosterEntry = serde_json::from_value(json!({
            "person": {"id": 1, "fullName": "Prospect"},
            "jerseyNumber": ""
        }))
        .unwrap();

        let player = entry.into_player(TeamId::new(2));
        assert_eq!(player.jersey_number, None);
        assert_eq!(player.position, "");
    }
}
