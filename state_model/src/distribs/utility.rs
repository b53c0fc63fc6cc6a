//! Utility tables - utility per assignment.

use std::collections::{BTreeMap, BTreeSet};

use super::UtilityFunction;
use crate::assignment::Assignment;

/// Table mapping assignments (typically of action variables) to utilities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UtilityTable {
    rows: BTreeMap<Assignment, f64>,
}

impl UtilityTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn with_util(mut self, assignment: Assignment, util: f64) -> Self {
        self.set_util(assignment, util);
        self
    }

    /// Set the utility of an assignment.
    pub fn set_util(&mut self, assignment: Assignment, util: f64) {
        self.rows.insert(assignment, util);
    }

    /// Utility of an assignment, 0 when absent.
    pub fn util(&self, assignment: &Assignment) -> f64 {
        self.get(assignment).unwrap_or(0.0)
    }

    /// Utility of an assignment, if the table has a row for it.
    pub fn get(&self, assignment: &Assignment) -> Option<f64> {
        self.rows.get(assignment).copied()
    }

    /// Check if the table has a row for the assignment.
    pub fn has_row(&self, assignment: &Assignment) -> bool {
        self.rows.contains_key(assignment)
    }

    /// Iterate over the rows in assignment order.
    pub fn rows(&self) -> impl Iterator<Item = (&Assignment, f64)> {
        self.rows.iter().map(|(assignment, util)| (assignment, *util))
    }

    /// Variables appearing in the rows of the table.
    pub fn variables(&self) -> BTreeSet<String> {
        self.rows
            .keys()
            .flat_map(|assignment| assignment.variables().map(str::to_string))
            .collect()
    }

    /// Get the row with the highest utility; the first one in assignment order on ties.
    pub fn best(&self) -> Option<(&Assignment, f64)> {
        self.rows().fold(None, |best, (assignment, util)| match best {
            Some((_, best_util)) if best_util >= util => best,
            _ => Some((assignment, util)),
        })
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl UtilityFunction for UtilityTable {
    /// Looks up the input restricted to the variables of the table.
    fn utility(&self, input: &Assignment) -> f64 {
        self.util(&input.trimmed(self.variables()))
    }
}

impl std::fmt::Display for UtilityTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (assignment, util) in self.rows() {
            writeln!(f, "U({}):={}", assignment, util)?;
        }
        Ok(())
    }
}
