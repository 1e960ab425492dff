//! Data models for the storage layer

use crate::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// A club or affiliate row.
///
/// `parent_id` is `None` for top-level clubs and set to the parent club's id
/// for affiliates. A row whose parent is itself also counts as top-level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub location_name: String,
    pub abbreviation: String,
    pub parent_id: Option<TeamId>,
}

impl Team {
    pub fn is_top_level(&self) -> bool {
        match self.parent_id {
            None => true,
            Some(parent) => parent == self.team_id,
        }
    }
}

/// A rostered player; belongs to exactly one team at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub jersey_number: Option<String>,
    pub position: String,
    pub team_id: TeamId,
}

/// `GET /teams` projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
}

/// `GET /players/{teamId}` projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: i64, parent: Option<i64>) -> Team {
        Team {
            team_id: TeamId::new(id),
            name: "Team".to_string(),
            location_name: String::new(),
            abbreviation: String::new(),
            parent_id: parent.map(TeamId::new),
        }
    }

    #[test]
    fn test_is_top_level() {
        assert!(team(1, None).is_top_level());
        assert!(team(1, Some(1)).is_top_level());
        assert!(!team(2, Some(1)).is_top_level());
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = PlayerSummary {
            id: PlayerId::new(100),
            name: "Pat Pitcher".to_string(),
            position: "P".to_string(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 100, "name": "Pat Pitcher", "position": "P"})
        );
    }
}
