//! SRP RL - Q-learning engine for strategic release planning
//!
//! This crate learns, per release plan, a tabular value estimate over
//! (requirement, action) pairs from a sentiment-balancing reward, then
//! greedily extracts a mutually exclusive requirement-to-plan assignment.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]

pub mod action;
pub mod allocator;
pub mod qtable;
pub mod reward;
pub mod trainer;

pub use action::{Action, Reward};
pub use allocator::{allocate, allocate_with_exclusions};
pub use qtable::QTable;
pub use reward::balance_reward;
pub use trainer::{Trainer, TrainingConfig, TrainingOutcome};
