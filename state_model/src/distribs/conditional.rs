//! Conditional tables - one categorical table per parent assignment.

use std::collections::BTreeMap;

use super::{CategoricalTable, ProbDistribution};
use crate::assignment::Assignment;
use crate::values::Value;

/// Conditional probability table P(head | condition).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionalTable {
    distribs: BTreeMap<Assignment, CategoricalTable>,
}

impl ConditionalTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the distribution that holds under `condition`.
    pub fn with_distrib(mut self, condition: Assignment, distrib: CategoricalTable) -> Self {
        self.add_distrib(condition, distrib);
        self
    }

    /// Add or replace the distribution that holds under `condition`.
    pub fn add_distrib(&mut self, condition: Assignment, distrib: CategoricalTable) {
        self.distribs.insert(condition, distrib);
    }

    /// Get the distribution for a condition.
    pub fn distrib(&self, condition: &Assignment) -> Option<&CategoricalTable> {
        self.distribs.get(condition)
    }

    /// Iterate over the conditions of the table.
    pub fn conditions(&self) -> impl Iterator<Item = &Assignment> {
        self.distribs.keys()
    }

    /// Get the number of conditions.
    pub fn len(&self) -> usize {
        self.distribs.len()
    }

    /// Check if the table has no condition.
    pub fn is_empty(&self) -> bool {
        self.distribs.is_empty()
    }
}

impl ProbDistribution for ConditionalTable {
    /// Unknown conditions have probability 0 for every head.
    fn prob(&self, condition: &Assignment, head: &Assignment) -> f64 {
        self.distribs
            .get(condition)
            .map(|distrib| distrib.prob(head))
            .unwrap_or(0.0)
    }

    fn values(&self, variable: &str) -> Vec<Value> {
        let mut values: Vec<Value> = self
            .distribs
            .values()
            .flat_map(|distrib| ProbDistribution::values(distrib, variable))
            .collect();
        values.sort();
        values.dedup();
        values
    }

    fn is_well_formed(&self) -> bool {
        self.distribs.values().all(|distrib| distrib.is_well_formed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprinkler() -> ConditionalTable {
        ConditionalTable::new()
            .with_distrib(
                Assignment::single("rain", true),
                CategoricalTable::new()
                    .with_row(Assignment::single("sprinkler", true), 0.01)
                    .with_row(Assignment::single("sprinkler", false), 0.99),
            )
            .with_distrib(
                Assignment::single("rain", false),
                CategoricalTable::new()
                    .with_row(Assignment::single("sprinkler", true), 0.4)
                    .with_row(Assignment::single("sprinkler", false), 0.6),
            )
    }

    #[test]
    fn test_conditional_prob() {
        let table = sprinkler();
        let on = Assignment::single("sprinkler", true);

        assert!((table.prob(&Assignment::single("rain", true), &on) - 0.01).abs() < 1e-12);
        assert!((table.prob(&Assignment::single("rain", false), &on) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_condition() {
        let table = sprinkler();
        let on = Assignment::single("sprinkler", true);
        assert_eq!(table.prob(&Assignment::single("rain", "maybe"), &on), 0.0);
    }

    #[test]
    fn test_values_and_well_formed() {
        let table = sprinkler();
        assert_eq!(
            table.values("sprinkler"),
            vec![Value::Boolean(false), Value::Boolean(true)]
        );
        assert!(table.is_well_formed());
        assert_eq!(table.len(), 2);
    }
}
