//! Unit tests for the Stats API client, run against a mock server

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_get_teams_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .and(query_param("sportId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "copyright": "Copyright 2024 MLB Advanced Media, L.P.",
            "teams": [
                {"id": 147, "name": "New York Yankees", "locationName": "Bronx", "abbreviation": "NYY"},
                {"id": 111, "name": "Boston Red Sox", "locationName": "Boston", "abbreviation": "BOS"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = StatsApiClient::new(mock_server.uri());
    let teams = client.get_teams(SportId::default()).await.unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].id, TeamId::new(147));
    assert_eq!(teams[1].abbreviation, "BOS");
}

#[tokio::test]
async fn test_get_affiliates_uses_team_ids_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/affiliates"))
        .and(query_param("teamIds", "147"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [
                {"id": 147, "name": "New York Yankees"},
                {"id": 531, "name": "Scranton/Wilkes-Barre RailRiders"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = StatsApiClient::new(format!("{}/", mock_server.uri()));
    let affiliates = client.get_affiliates(TeamId::new(147)).await.unwrap();

    assert_eq!(affiliates.len(), 2);
    assert_eq!(affiliates[1].id, TeamId::new(531));
}

#[tokio::test]
async fn test_get_roster_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/531/roster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roster": [
                {
                    "person": {"id": 100, "fullName": "Pat Pitcher"},
                    "jerseyNumber": "45",
                    "position": {"abbreviation": "P"}
                }
            ],
            "teamId": 531
        })))
        .mount(&mock_server)
        .await;

    let client = StatsApiClient::new(mock_server.uri());
    let roster = client.get_roster(TeamId::new(531)).await.unwrap();

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].person.full_name, "Pat Pitcher");
}

#[tokio::test]
async fn test_http_error_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/9/roster"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = StatsApiClient::new(mock_server.uri());
    let result = client.get_roster(TeamId::new(9)).await;

    match result {
        Err(crate::MlbError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = StatsApiClient::new(mock_server.uri());
    assert!(client.get_teams(SportId::default()).await.is_err());
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = StatsApiClient::new("http://localhost:1234///");
    assert_eq!(client.base_url(), "http://localhost:1234");
}
