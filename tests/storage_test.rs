//! Store tests through the public API, on an on-disk database

use mlb_roster::{storage::*, PlayerId, TeamId};
use tempfile::TempDir;

fn team(id: i64, name: &str, parent: Option<i64>) -> Team {
    Team {
        team_id: TeamId::new(id),
        name: name.to_string(),
        location_name: "Anywhere".to_string(),
        abbreviation: "ANY".to_string(),
        parent_id: parent.map(TeamId::new),
    }
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("mlb.db");

    {
        let mut db = RosterDatabase::open(&path).unwrap();
        db.upsert_team(&team(147, "New York Yankees", None)).unwrap();
        db.upsert_team(&team(531, "Scranton/Wilkes-Barre RailRiders", Some(147)))
            .unwrap();
        db.upsert_player(&Player {
            player_id: PlayerId::new(1),
            name: "Someone".to_string(),
            jersey_number: None,
            position: "2B".to_string(),
            team_id: TeamId::new(531),
        })
        .unwrap();
    }

    let db = RosterDatabase::open(&path).unwrap();
    assert_eq!(db.count_teams().unwrap(), 2);
    assert_eq!(
        db.list_top_level_teams().unwrap(),
        vec![TeamSummary {
            id: TeamId::new(147),
            name: "New York Yankees".to_string()
        }]
    );
    assert_eq!(db.list_players(TeamId::new(531)).unwrap().len(), 1);
}

#[test]
fn test_upsert_is_idempotent() {
    let mut db = RosterDatabase::new_in_memory().unwrap();

    for _ in 0..2 {
        db.upsert_team(&team(1, "Club", None)).unwrap();
        db.upsert_team(&team(2, "Affiliate", Some(1))).unwrap();
        db.upsert_roster(&[Player {
            player_id: PlayerId::new(100),
            name: "Pat".to_string(),
            jersey_number: Some("1".to_string()),
            position: "P".to_string(),
            team_id: TeamId::new(2),
        }])
        .unwrap();
    }

    assert_eq!(db.count_teams().unwrap(), 2);
    assert_eq!(db.count_players().unwrap(), 1);
    assert!(db.orphaned_players().unwrap().is_empty());
}

#[test]
fn test_affiliates_never_listed_as_top_level() {
    let mut db = RosterDatabase::new_in_memory().unwrap();
    db.upsert_team(&team(1, "Club", None)).unwrap();
    for id in 2..6 {
        db.upsert_team(&team(id, "Affiliate", Some(1))).unwrap();
    }

    let top = db.list_top_level_teams().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(db.list_affiliates(TeamId::new(1)).unwrap().len(), 4);
}
