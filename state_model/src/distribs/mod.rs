//! Local distributions attached to the nodes of the network.
//!
//! - **CategoricalTable**: unconditional probability table
//! - **ConditionalTable**: one categorical table per parent assignment
//! - **UtilityTable**: utility per assignment

mod categorical;
mod conditional;
mod utility;

pub use categorical::*;
pub use conditional::*;
pub use utility::*;

use std::fmt::Debug;

use crate::assignment::Assignment;
use crate::values::Value;

/// Tolerance used when checking that a table sums to one.
pub const PROB_TOLERANCE: f64 = 1e-6;

/// A (conditional) probability distribution of a chance node.
pub trait ProbDistribution: Debug + Send + Sync {
    /// Probability of `head` given the parent assignment `condition`.
    fn prob(&self, condition: &Assignment, head: &Assignment) -> f64;

    /// Distinct values the variable takes in the distribution.
    fn values(&self, variable: &str) -> Vec<Value>;

    /// Check that every row of the distribution sums to one.
    fn is_well_formed(&self) -> bool;
}

/// A utility function attached to a utility node.
pub trait UtilityFunction: Debug + Send + Sync {
    /// Utility of the given state-and-action assignment.
    fn utility(&self, input: &Assignment) -> f64;

    /// Notify the function that a variable was renamed.
    fn modify_variable_id(&self, _old_id: &str, _new_id: &str) {}
}
