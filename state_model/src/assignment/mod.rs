//! Assignments - bindings of variable identifiers to values.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::values::Value;

/// Suffix marking the "next-state" copy of a variable.
pub const PRIME_MARKER: char = '\'';

/// An immutable mapping from variable identifiers to values.
///
/// Variables are kept sorted by identifier, so two assignments are equal
/// exactly when they bind the same variables to the same values, whatever
/// the order in which they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    bindings: BTreeMap<String, Value>,
}

impl Assignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assignment with a single binding.
    pub fn single(variable: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new().with(variable, value)
    }

    /// Add a binding, replacing any previous value for the variable.
    pub fn with(mut self, variable: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bindings.insert(variable.into(), value.into());
        self
    }

    /// Union of two assignments; bindings of `overrides` win on shared variables.
    pub fn compose(base: &Assignment, overrides: &Assignment) -> Self {
        let mut bindings = base.bindings.clone();
        bindings.extend(
            overrides
                .bindings
                .iter()
                .map(|(var, value)| (var.clone(), value.clone())),
        );
        Self { bindings }
    }

    /// Keep only the variables listed in `keep`.
    pub fn trimmed<I, S>(&self, keep: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keep: HashSet<String> = keep.into_iter().map(|s| s.as_ref().to_string()).collect();
        self.filtered(|var| keep.contains(var))
    }

    /// Drop the variables listed in `drop`.
    pub fn trimmed_inverse<I, S>(&self, drop: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let drop: HashSet<String> = drop.into_iter().map(|s| s.as_ref().to_string()).collect();
        self.filtered(|var| !drop.contains(var))
    }

    fn filtered(&self, keep: impl Fn(&str) -> bool) -> Self {
        Self {
            bindings: self
                .bindings
                .iter()
                .filter(|(var, _)| keep(var))
                .map(|(var, value)| (var.clone(), value.clone()))
                .collect(),
        }
    }

    /// Check if every binding of `other` is present, with an equal value, in this assignment.
    pub fn contains(&self, other: &Assignment) -> bool {
        other
            .bindings
            .iter()
            .all(|(var, value)| self.bindings.get(var) == Some(value))
    }

    /// Check if the two assignments agree on every variable they share.
    pub fn consistent_with(&self, other: &Assignment) -> bool {
        other.bindings.iter().all(|(var, value)| {
            self.bindings
                .get(var)
                .map(|own| own == value)
                .unwrap_or(true)
        })
    }

    /// Strip one trailing prime marker from every variable that carries it.
    pub fn remove_primes(&self) -> Self {
        Self {
            bindings: self
                .bindings
                .iter()
                .map(|(var, value)| {
                    let base = var.strip_suffix(PRIME_MARKER).unwrap_or(var);
                    (base.to_string(), value.clone())
                })
                .collect(),
        }
    }

    /// Get the value bound to a variable.
    pub fn value(&self, variable: &str) -> Option<&Value> {
        self.bindings.get(variable)
    }

    /// Get the value bound to a variable, `None` when unbound.
    pub fn value_or_none(&self, variable: &str) -> Value {
        self.value(variable).cloned().unwrap_or_default()
    }

    /// Check if the variable is bound.
    pub fn contains_var(&self, variable: &str) -> bool {
        self.bindings.contains_key(variable)
    }

    /// Iterate over the bound variables, in identifier order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Iterate over the bindings, in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(var, value)| (var.as_str(), value))
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Return a copy where `old_id` is bound under `new_id` instead.
    pub fn renamed(&self, old_id: &str, new_id: &str) -> Self {
        Self {
            bindings: self
                .bindings
                .iter()
                .map(|(var, value)| {
                    let var = if var == old_id { new_id } else { var.as_str() };
                    (var.to_string(), value.clone())
                })
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Assignment
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(var, value)| (var.into(), value.into()))
                .collect(),
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .bindings
            .iter()
            .map(|(var, value)| format!("{}={}", var, value))
            .collect();
        write!(f, "{}", parts.join(" ^ "))
    }
}
