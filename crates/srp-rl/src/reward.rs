//! Balancing reward for simulated selections
//!
//! The rule rewards moves that keep a plan's positive/negative sentiment
//! split close to even and penalizes moves that widen an existing skew.

use srp_core::PlanBalance;

use crate::action::{Action, Reward};

/// Reward for a move that narrows or preserves the plan's sentiment split.
pub const REWARD_BALANCED: Reward = 10.0;

/// Penalty for a move that widens an existing skew.
pub const REWARD_SKEWED: Reward = -10.0;

/// Score a single (balance, action, sentiment) triple.
///
/// Skipping always scores zero. Selecting scores against the plan's
/// current skew: picking a positive-sentiment requirement into an
/// already positive-leaning plan is penalized, and symmetrically for
/// negative. A sentiment of exactly zero counts as negative.
///
/// Stateless and side-effect-free; the caller updates the balance after
/// deciding to select.
pub fn balance_reward(balance: &PlanBalance, action: Action, sentiment: f64) -> Reward {
    match action {
        Action::Skip => 0.0,
        Action::Select => {
            if sentiment > 0.0 {
                if balance.leans_positive() {
                    REWARD_SKEWED
                } else {
                    REWARD_BALANCED
                }
            } else if balance.leans_negative() {
                REWARD_SKEWED
            } else {
                REWARD_BALANCED
            }
        }
    }
}
