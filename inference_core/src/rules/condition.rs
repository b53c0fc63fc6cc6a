//! Conditions checked against assignments.

use state_model::Assignment;

use super::template::Template;

/// How the value of a variable is compared with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equal,
    Unequal,
}

/// Compares the value of one variable with an expected value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicCondition {
    variable: Template,
    value: Template,
    relation: Relation,
}

impl BasicCondition {
    pub fn new(variable: impl Into<Template>, value: impl Into<Template>, relation: Relation) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
            relation,
        }
    }

    pub fn equal(variable: impl Into<Template>, value: impl Into<Template>) -> Self {
        Self::new(variable, value, Relation::Equal)
    }

    pub fn unequal(variable: impl Into<Template>, value: impl Into<Template>) -> Self {
        Self::new(variable, value, Relation::Unequal)
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Check the condition against `input`.
    ///
    /// Slots in the variable or value are filled from `input` first; a slot
    /// that stays unfilled makes the condition unsatisfied. An unbound
    /// variable is compared as `None`.
    pub fn is_satisfied_by(&self, input: &Assignment) -> bool {
        let variable = self.variable.fill(input);
        let expected = self.value.fill(input);
        if variable.is_under_specified() || expected.is_under_specified() {
            return false;
        }

        let actual = input.value_or_none(variable.as_str());
        let expected = expected.to_value();
        match self.relation {
            Relation::Equal => actual == expected,
            Relation::Unequal => actual != expected,
        }
    }
}

impl std::fmt::Display for BasicCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self.relation {
            Relation::Equal => "=",
            Relation::Unequal => "!=",
        };
        write!(f, "{}{}{}", self.variable, op, self.value)
    }
}

/// A condition on the values of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    Basic(BasicCondition),
    /// Conjunction of conditions; empty means always satisfied.
    Complex(Vec<Condition>),
}

impl Condition {
    /// A condition satisfied by every assignment.
    pub fn always() -> Self {
        Condition::Complex(Vec::new())
    }

    pub fn is_satisfied_by(&self, input: &Assignment) -> bool {
        match self {
            Condition::Basic(basic) => basic.is_satisfied_by(input),
            Condition::Complex(conditions) => conditions.iter().all(|c| c.is_satisfied_by(input)),
        }
    }
}

impl From<BasicCondition> for Condition {
    fn from(basic: BasicCondition) -> Self {
        Condition::Basic(basic)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Basic(basic) => write!(f, "{}", basic),
            Condition::Complex(conditions) if conditions.is_empty() => write!(f, "true"),
            Condition::Complex(conditions) => {
                let parts: Vec<String> = conditions.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(" ^ "))
            }
        }
    }
}
