//! Enumeration of all the assignments over a set of variable domains.

use std::collections::BTreeMap;

use crate::assignment::Assignment;
use crate::values::Value;

/// Domains of a set of variables, keyed (and ordered) by variable identifier.
pub type Domains = BTreeMap<String, Vec<Value>>;

/// Number of assignments [`all_combinations`] would produce.
///
/// Saturates at `usize::MAX` instead of overflowing.
pub fn combination_count(domains: &Domains) -> usize {
    domains
        .values()
        .fold(1usize, |count, domain| count.saturating_mul(distinct(domain).len()))
}

/// Build every assignment that picks one value per variable.
///
/// Variables are expanded in identifier order, and repeated values in a
/// domain are only used once, so the returned assignments are all distinct.
/// An empty set of domains yields a single empty assignment; a variable with
/// an empty domain yields no assignment at all.
pub fn all_combinations(domains: &Domains) -> Vec<Assignment> {
    let mut combinations = vec![Assignment::new()];

    for (variable, domain) in domains {
        let domain = distinct(domain);
        let mut extended = Vec::with_capacity(combinations.len() * domain.len());
        for partial in &combinations {
            for value in &domain {
                extended.push(partial.clone().with(variable.as_str(), (*value).clone()));
            }
        }
        combinations = extended;
    }

    combinations
}

fn distinct(domain: &[Value]) -> Vec<&Value> {
    let mut values: Vec<&Value> = Vec::with_capacity(domain.len());
    for value in domain {
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}
