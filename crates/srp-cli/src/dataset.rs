//! Dataset loading for the planner
//!
//! A dataset file holds the raw requirement descriptions and the ordered
//! per-plan capacities:
//!
//! ```json
//! {
//!   "requirements": ["Add login", "Fix crash"],
//!   "capacities": [1, 1]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use srp_core::{PlannerError, Result};

/// Raw planning input: requirement descriptions plus plan capacities.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub requirements: Vec<String>,
    pub capacities: Vec<usize>,
}

impl Dataset {
    /// Load and validate a JSON dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&contents)?;
        dataset.validate()?;

        info!(
            path = %path.display(),
            requirements = dataset.requirements.len(),
            plans = dataset.capacities.len(),
            "dataset loaded"
        );

        Ok(dataset)
    }

    fn validate(&self) -> Result<()> {
        if self.requirements.is_empty() {
            return Err(PlannerError::Input(
                "dataset contains no requirements".to_string(),
            ));
        }
        if self.capacities.is_empty() {
            return Err(PlannerError::Input(
                "dataset declares no release plans".to_string(),
            ));
        }
        Ok(())
    }

    /// Distinct descriptions with the first occurrence winning.
    ///
    /// The returned order fixes the requirement indices for the rest of
    /// the run.
    pub fn deduplicated_requirements(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.requirements
            .iter()
            .filter(|description| seen.insert(description.as_str()))
            .cloned()
            .collect()
    }
}
