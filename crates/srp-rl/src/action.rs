//! Action and Reward types for the planning policy

use serde::{Deserialize, Serialize};

/// Reward value from the balancing rule
pub type Reward = f64;

/// Action taken on a drawn requirement during a simulated step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Leave the requirement out of the plan.
    Skip,

    /// Select the requirement into the plan.
    Select,
}

impl Action {
    /// Convert action to index into a Q-table row.
    pub fn to_index(self) -> usize {
        match self {
            Action::Skip => 0,
            Action::Select => 1,
        }
    }

    /// Create action from a Q-table row index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Action::Skip),
            1 => Some(Action::Select),
            _ => None,
        }
    }

    /// Number of discrete actions
    pub fn action_space_size() -> usize {
        2
    }
}
