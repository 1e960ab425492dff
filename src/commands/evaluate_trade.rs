//! Evaluate-trade command: run the trade evaluator on a proposal file

use std::path::Path;

use crate::{
    trade::{TradeDecision, TradeProposal},
    Result,
};

/// Read a proposal from `path`
pub fn load_proposal(path: &Path) -> Result<TradeProposal> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Handle the evaluate-trade command
pub fn handle_evaluate_trade(path: &Path, as_json: bool) -> Result<TradeDecision> {
    let proposal = load_proposal(path)?;
    let decision = proposal.evaluate();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        let value_a: f64 = proposal.players_a.iter().map(|p| p.value).sum();
        let value_b: f64 = proposal.players_b.iter().map(|p| p.value).sum();
        println!(
            "Team A gives {} player(s) worth {:.2}; team B gives {} worth {:.2}",
            proposal.players_a.len(),
            value_a,
            proposal.players_b.len(),
            value_b
        );
        println!("Decision: {}", decision);
    }

    Ok(decision)
}
