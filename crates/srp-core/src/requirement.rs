//! Requirement types

use serde::{Deserialize, Serialize};

/// Stable index of a requirement for the duration of a run.
///
/// Indices are established once, after deduplication of the raw description
/// list, and do not change during training or extraction.
pub type RequirementId = usize;

/// A candidate feature text with its precomputed sentiment polarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Opaque feature description, e.g. "Add login".
    pub description: String,

    /// Compound polarity score. Positive means favorable; a score of
    /// exactly zero counts as negative everywhere in the planner.
    pub sentiment: f64,
}

impl Requirement {
    pub fn new(description: impl Into<String>, sentiment: f64) -> Self {
        Self {
            description: description.into(),
            sentiment,
        }
    }

    /// Whether the reward rule treats this requirement as positive.
    pub fn is_positive(&self) -> bool {
        self.sentiment > 0.0
    }
}
