//! Categorical tables - probability per assignment of the head variables.

use std::collections::BTreeMap;

use super::{ProbDistribution, PROB_TOLERANCE};
use crate::assignment::Assignment;
use crate::values::Value;

/// Unconditional probability table over assignments of one or more variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoricalTable {
    rows: BTreeMap<Assignment, f64>,
}

impl CategoricalTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn with_row(mut self, head: Assignment, prob: f64) -> Self {
        self.add_row(head, prob);
        self
    }

    /// Add or replace a row.
    pub fn add_row(&mut self, head: Assignment, prob: f64) {
        self.rows.insert(head, prob);
    }

    /// Probability of a head assignment, 0 when absent.
    pub fn prob(&self, head: &Assignment) -> f64 {
        self.rows.get(head).copied().unwrap_or(0.0)
    }

    /// Iterate over the rows in assignment order.
    pub fn rows(&self) -> impl Iterator<Item = (&Assignment, f64)> {
        self.rows.iter().map(|(head, prob)| (head, *prob))
    }

    /// Sum of all the probabilities in the table.
    pub fn total_prob(&self) -> f64 {
        self.rows.values().sum()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the most likely row.
    pub fn best(&self) -> Option<(&Assignment, f64)> {
        self.rows().fold(None, |best, (head, prob)| match best {
            Some((_, best_prob)) if best_prob >= prob => best,
            _ => Some((head, prob)),
        })
    }
}

impl ProbDistribution for CategoricalTable {
    fn prob(&self, _condition: &Assignment, head: &Assignment) -> f64 {
        CategoricalTable::prob(self, head)
    }

    fn values(&self, variable: &str) -> Vec<Value> {
        let mut values: Vec<Value> = self
            .rows
            .keys()
            .filter_map(|head| head.value(variable).cloned())
            .collect();
        values.sort();
        values.dedup();
        values
    }

    fn is_well_formed(&self) -> bool {
        (self.total_prob() - 1.0).abs() < PROB_TOLERANCE
    }
}

impl FromIterator<(Assignment, f64)> for CategoricalTable {
    fn from_iter<T: IntoIterator<Item = (Assignment, f64)>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for CategoricalTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (head, prob) in self.rows() {
            writeln!(f, "P({}):={}", head, prob)?;
        }
        Ok(())
    }
}
