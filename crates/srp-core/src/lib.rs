//! SRP Core - Shared types for the strategic release planner
//!
//! This crate provides the foundational types used across all srp components.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod plan;
pub mod requirement;

pub use error::{PlannerError, Result};
pub use plan::{PlanAssignment, PlanBalance};
pub use requirement::{Requirement, RequirementId};
