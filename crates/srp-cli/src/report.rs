//! Console report output

use srp_core::{PlanAssignment, Requirement};

/// Print the final assignment, one block per release plan.
pub fn print_assignments(assignments: &[PlanAssignment]) {
    for assignment in assignments {
        println!("Release Plan {}:", assignment.plan_id + 1);
        println!("Selected requirement count: {}", assignment.len());
        for description in &assignment.requirements {
            println!("  - {description}");
        }
        println!();
    }
}

/// Print the per-requirement sentiment table.
pub fn print_scores(requirements: &[Requirement]) {
    println!("{:>10}  description", "sentiment");
    for requirement in requirements {
        println!("{:>10.4}  {}", requirement.sentiment, requirement.description);
    }
}
