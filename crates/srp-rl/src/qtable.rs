//! Tabular value estimates over (plan, requirement, action) triples

use ndarray::Array3;

use crate::action::Action;

/// Q-value table of shape `n_plans x n_requirements x 2`.
///
/// Entries initialize to zero and are mutated only by the trainer;
/// extraction reads the table without modifying it.
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    values: Array3<f64>,
}

impl QTable {
    /// Create a zero-initialized table.
    pub fn new(n_plans: usize, n_requirements: usize) -> Self {
        Self {
            values: Array3::zeros((n_plans, n_requirements, Action::action_space_size())),
        }
    }

    pub fn n_plans(&self) -> usize {
        self.values.shape()[0]
    }

    pub fn n_requirements(&self) -> usize {
        self.values.shape()[1]
    }

    /// Table dimensions as `(n_plans, n_requirements, n_actions)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        let shape = self.values.shape();
        (shape[0], shape[1], shape[2])
    }

    pub fn get(&self, plan_id: usize, requirement_id: usize, action: Action) -> f64 {
        self.values[(plan_id, requirement_id, action.to_index())]
    }

    pub fn set(&mut self, plan_id: usize, requirement_id: usize, action: Action, value: f64) {
        self.values[(plan_id, requirement_id, action.to_index())] = value;
    }

    /// Highest value over both actions for a (plan, requirement) row.
    pub fn max_value(&self, plan_id: usize, requirement_id: usize) -> f64 {
        let skip = self.values[(plan_id, requirement_id, 0)];
        let select = self.values[(plan_id, requirement_id, 1)];
        skip.max(select)
    }

    /// Greedy action for a row. Ties resolve to `Skip`, matching the
    /// first-maximum argmax rule.
    pub fn best_action(&self, plan_id: usize, requirement_id: usize) -> Action {
        let skip = self.values[(plan_id, requirement_id, 0)];
        let select = self.values[(plan_id, requirement_id, 1)];
        if select > skip {
            Action::Select
        } else {
            Action::Skip
        }
    }

    /// True when every entry is a finite number.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_zero_init() {
        let table = QTable::new(3, 5);
        assert_eq!(table.shape(), (3, 5, 2));
        assert_eq!(table.n_plans(), 3);
        assert_eq!(table.n_requirements(), 5);

        for plan in 0..3 {
            for req in 0..5 {
                assert_eq!(table.get(plan, req, Action::Skip), 0.0);
                assert_eq!(table.get(plan, req, Action::Select), 0.0);
            }
        }
    }

    #[test]
    fn test_set_and_max_value() {
        let mut table = QTable::new(1, 2);
        table.set(0, 0, Action::Select, 4.5);
        table.set(0, 0, Action::Skip, -1.0);

        assert_eq!(table.max_value(0, 0), 4.5);
        assert_eq!(table.max_value(0, 1), 0.0);
    }

    #[test]
    fn test_best_action_tie_is_skip() {
        let table = QTable::new(1, 1);
        assert_eq!(table.best_action(0, 0), Action::Skip);
    }

    #[test]
    fn test_best_action_prefers_higher_value() {
        let mut table = QTable::new(1, 1);
        table.set(0, 0, Action::Select, 2.0);
        assert_eq!(table.best_action(0, 0), Action::Select);

        table.set(0, 0, Action::Skip, 3.0);
        assert_eq!(table.best_action(0, 0), Action::Skip);
    }

    #[test]
    fn test_is_finite() {
        let mut table = QTable::new(1, 1);
        assert!(table.is_finite());

        table.set(0, 0, Action::Select, f64::NAN);
        assert!(!table.is_finite());
    }
}
