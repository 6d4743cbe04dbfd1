//! Episode-driven Q-table training
//!
//! Each episode simulates, for every plan, exactly `capacity` selection
//! steps against the balancing reward and applies a temporal-difference
//! update to the plan's slice of the Q-table.

use std::collections::HashSet;

use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info};

use srp_core::{PlanBalance, PlannerError, Requirement, Result};

use crate::action::Action;
use crate::qtable::QTable;
use crate::reward::balance_reward;

/// Q-learning hyperparameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainingConfig {
    /// Step size toward the new estimate
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Weight on the next state's best value
    #[serde(default = "default_gamma")]
    pub gamma: f64,

    /// Probability of a forced-selection exploration step
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Number of simulated passes over all plans
    #[serde(default = "default_episodes")]
    pub episodes: usize,
}

fn default_alpha() -> f64 {
    0.1
}
fn default_gamma() -> f64 {
    0.6
}
fn default_epsilon() -> f64 {
    0.1
}
fn default_episodes() -> usize {
    1000
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            gamma: default_gamma(),
            epsilon: default_epsilon(),
            episodes: default_episodes(),
        }
    }
}

impl TrainingConfig {
    /// Reject non-finite or out-of-range hyperparameters.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("gamma", self.gamma),
            ("epsilon", self.epsilon),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlannerError::Config(format!(
                    "{name} must be a finite value in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Result of a training run.
#[derive(Debug)]
pub struct TrainingOutcome {
    /// Learned value table, shape `n_plans x n_requirements x 2`.
    pub q_table: QTable,

    /// Cumulative per-plan selection counts over every episode of the run.
    pub balances: Vec<PlanBalance>,
}

/// Tabular Q-learning trainer
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train a Q-table for the given plans and requirements.
    ///
    /// Runs `episodes` full passes. Per plan and episode the simulation
    /// draws `capacity` requirement indices uniformly (redrawing any index
    /// already selected for that plan this episode), picks an action
    /// epsilon-greedily, scores it with the balancing reward and updates
    /// the table. Exploration is biased: an epsilon draw forces `Select`
    /// rather than a uniform action.
    ///
    /// Balances carry over between episodes; the returned counters are
    /// cumulative over the whole run.
    pub fn train(
        &self,
        capacities: &[usize],
        requirements: &[Requirement],
        rng: &mut impl Rng,
    ) -> Result<TrainingOutcome> {
        self.config.validate()?;

        let n_requirements = requirements.len();
        let n_plans = capacities.len();

        if n_requirements == 0 {
            return Err(PlannerError::Input("no requirements to plan".to_string()));
        }
        if n_plans == 0 {
            return Err(PlannerError::Input("no release plans declared".to_string()));
        }
        for (plan_id, &capacity) in capacities.iter().enumerate() {
            if capacity > n_requirements {
                return Err(PlannerError::Config(format!(
                    "plan {plan_id} capacity {capacity} exceeds requirement count {n_requirements}"
                )));
            }
        }

        info!(
            n_plans,
            n_requirements,
            episodes = self.config.episodes,
            "starting Q-table training"
        );

        let TrainingConfig {
            alpha,
            gamma,
            epsilon,
            episodes,
        } = self.config.clone();

        let mut q_table = QTable::new(n_plans, n_requirements);
        let mut balances = vec![PlanBalance::new(); n_plans];

        for episode in 0..episodes {
            // Per-episode selections, reset every pass. Balances are not.
            let mut selected_for_plan: Vec<HashSet<usize>> =
                vec![HashSet::new(); n_plans];

            for plan_id in 0..n_plans {
                for _ in 0..capacities[plan_id] {
                    let mut state = rng.gen_range(0..n_requirements);
                    while selected_for_plan[plan_id].contains(&state) {
                        state = rng.gen_range(0..n_requirements);
                    }

                    // Exploration forces selection; exploitation is greedy.
                    let action = if rng.gen::<f64>() < epsilon {
                        Action::Select
                    } else {
                        q_table.best_action(plan_id, state)
                    };

                    let sentiment = requirements[state].sentiment;
                    let reward = balance_reward(&balances[plan_id], action, sentiment);

                    // Next state is the cyclically following requirement
                    // index, not the index actually drawn next.
                    let next_state = (state + 1) % n_requirements;
                    let updated = (1.0 - alpha) * q_table.get(plan_id, state, action)
                        + alpha * (reward + gamma * q_table.max_value(plan_id, next_state));
                    q_table.set(plan_id, state, action, updated);

                    if action == Action::Select {
                        selected_for_plan[plan_id].insert(state);
                        balances[plan_id].record(sentiment);
                    }
                }
            }

            if episode % 100 == 0 {
                debug!(episode, "training progress");
            }
        }

        info!("training complete");

        Ok(TrainingOutcome { q_table, balances })
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn requirements() -> Vec<Requirement> {
        vec![
            Requirement::new("Add login", 0.6),
            Requirement::new("Fix crash", -0.7),
            Requirement::new("Improve onboarding", 0.4),
            Requirement::new("Remove broken export", -0.3),
        ]
    }

    #[test]
    fn test_table_shape_and_finiteness() {
        let trainer = Trainer::default();
        let mut rng = StdRng::seed_from_u64(7);

        let outcome = trainer.train(&[2, 1], &requirements(), &mut rng).unwrap();

        assert_eq!(outcome.q_table.shape(), (2, 4, 2));
        assert!(outcome.q_table.is_finite());
        assert_eq!(outcome.balances.len(), 2);
    }

    #[test]
    fn test_seeded_training_is_reproducible() {
        let trainer = Trainer::new(TrainingConfig {
            episodes: 50,
            ..TrainingConfig::default()
        });

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let outcome_a = trainer.train(&[2], &requirements(), &mut rng_a).unwrap();
        let outcome_b = trainer.train(&[2], &requirements(), &mut rng_b).unwrap();

        assert_eq!(outcome_a.q_table, outcome_b.q_table);
        assert_eq!(outcome_a.balances, outcome_b.balances);
    }

    #[test]
    fn test_balances_accumulate_across_episodes() {
        let trainer = Trainer::new(TrainingConfig {
            epsilon: 1.0, // every step selects
            episodes: 10,
            ..TrainingConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = trainer.train(&[2], &requirements(), &mut rng).unwrap();
        let balance = outcome.balances[0];

        // 10 episodes x 2 forced selections, never reset between episodes.
        assert_eq!(balance.positive + balance.negative, 20);
    }

    #[test]
    fn test_zero_capacity_plan_is_untouched() {
        let trainer = Trainer::new(TrainingConfig {
            episodes: 20,
            ..TrainingConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(11);

        let outcome = trainer.train(&[0, 2], &requirements(), &mut rng).unwrap();

        assert_eq!(outcome.balances[0], PlanBalance::new());
        for req in 0..4 {
            assert_eq!(outcome.q_table.get(0, req, Action::Skip), 0.0);
            assert_eq!(outcome.q_table.get(0, req, Action::Select), 0.0);
        }
    }

    #[test]
    fn test_empty_requirements_rejected() {
        let trainer = Trainer::default();
        let mut rng = StdRng::seed_from_u64(1);

        let err = trainer.train(&[1], &[], &mut rng).unwrap_err();
        assert!(matches!(err, PlannerError::Input(_)));
    }

    #[test]
    fn test_empty_capacities_rejected() {
        let trainer = Trainer::default();
        let mut rng = StdRng::seed_from_u64(1);

        let err = trainer.train(&[], &requirements(), &mut rng).unwrap_err();
        assert!(matches!(err, PlannerError::Input(_)));
    }

    #[test]
    fn test_capacity_exceeding_requirements_rejected() {
        let trainer = Trainer::default();
        let mut rng = StdRng::seed_from_u64(1);

        let err = trainer.train(&[5], &requirements(), &mut rng).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }

    #[test]
    fn test_invalid_hyperparameters_rejected() {
        let mut rng = StdRng::seed_from_u64(1);

        for config in [
            TrainingConfig {
                alpha: -0.1,
                ..TrainingConfig::default()
            },
            TrainingConfig {
                gamma: 1.5,
                ..TrainingConfig::default()
            },
            TrainingConfig {
                epsilon: f64::NAN,
                ..TrainingConfig::default()
            },
        ] {
            let err = Trainer::new(config)
                .train(&[1], &requirements(), &mut rng)
                .unwrap_err();
            assert!(matches!(err, PlannerError::Config(_)));
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = TrainingConfig::default();
        assert_eq!(config.alpha, 0.1);
        assert_eq!(config.gamma, 0.6);
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.episodes, 1000);
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let config: TrainingConfig = serde_json::from_str(r#"{"episodes": 25}"#).unwrap();
        assert_eq!(config.episodes, 25);
        assert_eq!(config.alpha, 0.1);
        assert_eq!(config.gamma, 0.6);
        assert_eq!(config.epsilon, 0.1);
    }
}
