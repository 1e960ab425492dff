//! Trade proposal evaluation.
//!
//! A proposal moves `players_a` from team A to team B and `players_b` from
//! team B to team A. It is rejected when the summed player values differ by
//! more than [`BALANCE_THRESHOLD`], or when any incoming player's salary
//! exceeds the receiving team's budget.

use serde::{Deserialize, Serialize};

/// Largest allowed gap between the two sides' total value
pub const BALANCE_THRESHOLD: f64 = 5.0;

/// A player as seen by the evaluator; only `value` and `salary` matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePlayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: f64,
    pub salary: f64,
}

impl TradePlayer {
    pub fn new(value: f64, salary: f64) -> Self {
        Self {
            id: None,
            name: None,
            value,
            salary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeProposal {
    /// Leaving team A, joining team B
    pub players_a: Vec<TradePlayer>,
    /// Leaving team B, joining team A
    pub players_b: Vec<TradePlayer>,
    pub budget_a: f64,
    pub budget_b: f64,
}

impl TradeProposal {
    pub fn evaluate(&self) -> TradeDecision {
        evaluate_trade(&self.players_a, &self.players_b, self.budget_a, self.budget_b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    #[serde(rename = "Unbalanced trade")]
    Unbalanced,
    #[serde(rename = "Budget exceeded")]
    BudgetExceeded,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Unbalanced => write!(f, "Unbalanced trade"),
            RejectReason::BudgetExceeded => write!(f, "Budget exceeded"),
        }
    }
}

/// Serialises as `{"status":"approved"}` or `{"status":"rejected","reason":"..."}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TradeDecision {
    Approved,
    Rejected { reason: RejectReason },
}

impl TradeDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, TradeDecision::Approved)
    }
}

impl std::fmt::Display for TradeDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeDecision::Approved => write!(f, "approved"),
            TradeDecision::Rejected { reason } => write!(f, "rejected: {reason}"),
        }
    }
}

/// Balance check first, then budgets. Both comparisons are strict.
pub fn evaluate_trade(
    players_a: &[TradePlayer],
    players_b: &[TradePlayer],
    budget_a: f64,
    budget_b: f64,
) -> TradeDecision {
    let value_a: f64 = players_a.iter().map(|p| p.value).sum();
    let value_b: f64 = players_b.iter().map(|p| p.value).sum();

    if (value_a - value_b).abs() > BALANCE_THRESHOLD {
        return TradeDecision::Rejected {
            reason: RejectReason::Unbalanced,
        };
    }

    // Incoming players must fit the receiving team's budget
    let over_a = players_b.iter().any(|p| p.salary > budget_a);
    let over_b = players_a.iter().any(|p| p.salary > budget_b);
    if over_a || over_b {
        return TradeDecision::Rejected {
            reason: RejectReason::BudgetExceeded,
        };
    }

    TradeDecision::Approved
}
