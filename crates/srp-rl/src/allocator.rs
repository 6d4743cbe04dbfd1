//! Greedy extraction of the final requirement-to-plan assignment

use std::collections::BTreeSet;

use tracing::debug;

use srp_core::{PlanAssignment, PlannerError, Requirement, Result};

use crate::qtable::QTable;

/// Extract a mutually exclusive assignment from a trained Q-table.
///
/// Plans are processed in index order, so earlier plans have first
/// choice. Each plan greedily takes up to `capacity` of the remaining
/// requirements by highest `max_a Q[plan, requirement, a]`, with ties
/// broken toward the lowest index. A plan whose candidates run out is
/// under-filled, not an error.
pub fn allocate(
    q_table: &QTable,
    capacities: &[usize],
    requirements: &[Requirement],
) -> Result<Vec<PlanAssignment>> {
    let mut globally_selected = BTreeSet::new();
    allocate_with_exclusions(q_table, capacities, requirements, &mut globally_selected)
}

/// Same as [`allocate`], but extending a caller-owned exclusivity set.
///
/// Indices already in `globally_selected` are never assigned; every index
/// picked here is added to it. The set grows monotonically.
pub fn allocate_with_exclusions(
    q_table: &QTable,
    capacities: &[usize],
    requirements: &[Requirement],
    globally_selected: &mut BTreeSet<usize>,
) -> Result<Vec<PlanAssignment>> {
    let n_requirements = requirements.len();

    if q_table.n_plans() != capacities.len() {
        return Err(PlannerError::Config(format!(
            "Q-table covers {} plans but {} capacities were declared",
            q_table.n_plans(),
            capacities.len()
        )));
    }
    if q_table.n_requirements() != n_requirements {
        return Err(PlannerError::Config(format!(
            "Q-table covers {} requirements but {} were provided",
            q_table.n_requirements(),
            n_requirements
        )));
    }

    let mut assignments = Vec::with_capacity(capacities.len());

    for (plan_id, &capacity) in capacities.iter().enumerate() {
        let mut assignment = PlanAssignment::new(plan_id);

        for _ in 0..capacity {
            let best = best_available(q_table, plan_id, n_requirements, globally_selected);

            // Starved allocation: the plan stays under-filled.
            let Some(best_req) = best else {
                debug!(plan_id, assigned = assignment.len(), "candidates exhausted");
                break;
            };

            globally_selected.insert(best_req);
            assignment
                .requirements
                .push(requirements[best_req].description.clone());
        }

        debug!(plan_id, assigned = assignment.len(), capacity, "plan extracted");
        assignments.push(assignment);
    }

    Ok(assignments)
}

/// Highest-valued requirement index not yet globally selected.
///
/// Ascending scan with strict improvement keeps ties on the lowest index.
fn best_available(
    q_table: &QTable,
    plan_id: usize,
    n_requirements: usize,
    globally_selected: &BTreeSet<usize>,
) -> Option<usize> {
    let mut best_req = None;
    let mut best_value = f64::NEG_INFINITY;

    for req_id in 0..n_requirements {
        if globally_selected.contains(&req_id) {
            continue;
        }
        let value = q_table.max_value(plan_id, req_id);
        if value > best_value {
            best_value = value;
            best_req = Some(req_id);
        }
    }

    best_req
}
