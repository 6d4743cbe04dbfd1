//! Release plan types

use serde::{Deserialize, Serialize};

/// Running counts of positive- vs negative-sentiment selections for one plan.
///
/// Balances accumulate across every training episode of a run; they are
/// never reset between episodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanBalance {
    pub positive: u64,
    pub negative: u64,
}

impl PlanBalance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one selected requirement. A sentiment of exactly zero
    /// counts as negative.
    pub fn record(&mut self, sentiment: f64) {
        if sentiment > 0.0 {
            self.positive += 1;
        } else {
            self.negative += 1;
        }
    }

    /// More positive than negative selections so far.
    pub fn leans_positive(&self) -> bool {
        self.positive > self.negative
    }

    /// More negative than positive selections so far.
    pub fn leans_negative(&self) -> bool {
        self.negative > self.positive
    }
}

/// Final assignment of requirement descriptions to one release plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAssignment {
    /// Plan index, in the order capacities were declared.
    pub plan_id: usize,

    /// Assigned descriptions, in pick order.
    pub requirements: Vec<String>,
}

impl PlanAssignment {
    pub fn new(plan_id: usize) -> Self {
        Self {
            plan_id,
            requirements: Vec::new(),
        }
    }

    /// Number of requirements assigned to this plan.
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}
