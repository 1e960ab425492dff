//! Unit tests for command helpers

use super::evaluate_trade::{handle_evaluate_trade, load_proposal};
use super::*;
use crate::trade::{RejectReason, TradeDecision};
use std::io::Write;

#[test]
fn test_resolve_bind_addr() {
    let addr = resolve_bind_addr("127.0.0.1", 5000).unwrap();
    assert_eq!(addr.to_string(), "127.0.0.1:5000");

    let addr = resolve_bind_addr("localhost", 8080).unwrap();
    assert_eq!(addr.to_string(), "127.0.0.1:8080");

    let addr = resolve_bind_addr("[::1]", 80).unwrap();
    assert_eq!(addr.to_string(), "[::1]:80");
}

#[test]
fn test_resolve_bind_addr_invalid() {
    match resolve_bind_addr("not a host", 5000) {
        Err(MlbError::Config { message }) => assert!(message.contains("not a host")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}

#[test]
fn test_evaluate_trade_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "players_a": [{{"name": "Starter", "value": 6.0, "salary": 30.0}}],
            "players_b": [{{"name": "Prospect", "value": 5.0, "salary": 1.0}}],
            "budget_a": 50.0,
            "budget_b": 20.0
        }}"#
    )
    .unwrap();

    let decision = handle_evaluate_trade(file.path(), true).unwrap();
    assert_eq!(
        decision,
        TradeDecision::Rejected {
            reason: RejectReason::BudgetExceeded
        }
    );
}

#[test]
fn test_load_proposal_errors() {
    let missing = load_proposal(std::path::Path::new("/definitely/not/here.json"));
    assert!(matches!(missing, Err(MlbError::Io(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(matches!(load_proposal(file.path()), Err(MlbError::Json(_))));
}
