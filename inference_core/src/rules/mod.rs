//! The contract between utility distributions and the rules they wrap.
//!
//! Rule anchoring itself happens elsewhere: a distribution only sees an
//! [`AnchoredRule`], which maps an input assignment to a [`RuleOutput`]
//! of weighted effects.

mod condition;
mod effect;
mod template;

pub use condition::*;
pub use effect::*;
pub use template::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use state_model::Assignment;

use crate::error::RuleError;

/// Kind of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleType {
    /// Probability rule, producing distributions over output variables.
    Prob,
    /// Utility rule, producing utilities for action values.
    Util,
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleType::Prob => write!(f, "prob"),
            RuleType::Util => write!(f, "util"),
        }
    }
}

/// Weight attached to an effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Parameter {
    /// A constant.
    Fixed(f64),
    /// Read from the numeric value of a variable of the input.
    Bound(String),
}

impl Parameter {
    /// Evaluate the parameter against the input of the rule.
    pub fn value(&self, input: &Assignment) -> Result<f64, RuleError> {
        match self {
            Parameter::Fixed(value) => Ok(*value),
            Parameter::Bound(variable) => input
                .value(variable)
                .and_then(|value| value.as_double())
                .ok_or_else(|| RuleError::UnboundParameter(variable.clone())),
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parameter::Fixed(value) => write!(f, "{}", value),
            Parameter::Bound(variable) => write!(f, "{}", variable),
        }
    }
}

/// The effects a rule produces for one input, each with its parameter.
#[derive(Debug, Clone, Default)]
pub struct RuleOutput {
    effects: Vec<(Effect, Parameter)>,
}

impl RuleOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an effect.
    pub fn with_effect(mut self, effect: impl Into<Effect>, parameter: Parameter) -> Self {
        self.add_effect(effect, parameter);
        self
    }

    pub fn add_effect(&mut self, effect: impl Into<Effect>, parameter: Parameter) {
        self.effects.push((effect.into(), parameter));
    }

    pub fn effects(&self) -> impl Iterator<Item = (&Effect, &Parameter)> {
        self.effects.iter().map(|(effect, parameter)| (effect, parameter))
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Fill the slots of every effect from `input`.
    pub fn fill(&self, input: &Assignment) -> RuleOutput {
        Self {
            effects: self
                .effects
                .iter()
                .map(|(effect, parameter)| (effect.fill(input), parameter.clone()))
                .collect(),
        }
    }
}

/// A rule anchored in the current dialogue state.
pub trait AnchoredRule: std::fmt::Debug + std::fmt::Display + Send + Sync {
    fn rule_type(&self) -> RuleType;

    /// Variables the rule produces values for, possibly primed.
    fn output_variables(&self) -> BTreeSet<String>;

    /// External parameters the rule depends on.
    fn parameters(&self) -> BTreeSet<String>;

    /// The output of the first case of the rule that applies to `input`.
    fn matching_output(&self, input: &Assignment) -> Result<RuleOutput, RuleError>;
}

/// An anchored rule made of guarded cases, tried in order.
///
/// The output of the first case whose condition holds is returned, with
/// its effects filled from the input; when none holds the output is empty.
#[derive(Debug, Clone)]
pub struct CaseRule {
    id: String,
    rule_type: RuleType,
    output_variables: BTreeSet<String>,
    parameters: BTreeSet<String>,
    cases: Vec<(Condition, RuleOutput)>,
}

impl CaseRule {
    pub fn new(id: impl Into<String>, rule_type: RuleType) -> Self {
        Self {
            id: id.into(),
            rule_type,
            output_variables: BTreeSet::new(),
            parameters: BTreeSet::new(),
            cases: Vec::new(),
        }
    }

    /// Builder method to declare an output variable.
    pub fn with_output_variable(mut self, variable: impl Into<String>) -> Self {
        self.output_variables.insert(variable.into());
        self
    }

    /// Builder method to declare an external parameter.
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameters.insert(parameter.into());
        self
    }

    /// Builder method to append a case.
    pub fn with_case(mut self, condition: impl Into<Condition>, output: RuleOutput) -> Self {
        self.cases.push((condition.into(), output));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl AnchoredRule for CaseRule {
    fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    fn output_variables(&self) -> BTreeSet<String> {
        self.output_variables.clone()
    }

    fn parameters(&self) -> BTreeSet<String> {
        self.parameters.clone()
    }

    fn matching_output(&self, input: &Assignment) -> Result<RuleOutput, RuleError> {
        Ok(self
            .cases
            .iter()
            .find(|(condition, _)| condition.is_satisfied_by(input))
            .map(|(_, output)| output.fill(input))
            .unwrap_or_default())
    }
}

impl std::fmt::Display for CaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.rule_type)
    }
}
