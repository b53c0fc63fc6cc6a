//! Effects produced by rule outputs.

use serde::{Deserialize, Serialize};

use state_model::Assignment;

use super::condition::{BasicCondition, Condition};
use super::template::Template;

/// Whether an effect sets a value or rules it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    /// The variable takes the value.
    Assign,
    /// The variable does not take the value.
    Discard,
}

/// A single variable/value statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicEffect {
    variable: Template,
    value: Template,
    kind: EffectType,
}

impl BasicEffect {
    pub fn new(variable: impl Into<Template>, value: impl Into<Template>, kind: EffectType) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
            kind,
        }
    }

    pub fn assign(variable: impl Into<Template>, value: impl Into<Template>) -> Self {
        Self::new(variable, value, EffectType::Assign)
    }

    pub fn discard(variable: impl Into<Template>, value: impl Into<Template>) -> Self {
        Self::new(variable, value, EffectType::Discard)
    }

    pub fn variable(&self) -> &Template {
        &self.variable
    }

    pub fn value(&self) -> &Template {
        &self.value
    }

    pub fn kind(&self) -> EffectType {
        self.kind
    }

    /// Fill the slots of the variable and value from `input`.
    pub fn fill(&self, input: &Assignment) -> BasicEffect {
        Self {
            variable: self.variable.fill(input),
            value: self.value.fill(input),
            kind: self.kind,
        }
    }

    /// Condition that holds when the effect is realised.
    pub fn to_condition(&self) -> BasicCondition {
        match self.kind {
            EffectType::Assign => BasicCondition::equal(self.variable.clone(), self.value.clone()),
            EffectType::Discard => BasicCondition::unequal(self.variable.clone(), self.value.clone()),
        }
    }
}

impl std::fmt::Display for BasicEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self.kind {
            EffectType::Assign => ":=",
            EffectType::Discard => "!=",
        };
        write!(f, "{}{}{}", self.variable, op, self.value)
    }
}

/// A conjunction of basic effects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Effect {
    sub_effects: Vec<BasicEffect>,
}

impl Effect {
    pub fn new(sub_effects: impl IntoIterator<Item = BasicEffect>) -> Self {
        Self {
            sub_effects: sub_effects.into_iter().collect(),
        }
    }

    pub fn sub_effects(&self) -> &[BasicEffect] {
        &self.sub_effects
    }

    /// Fill the slots of every sub-effect from `input`.
    pub fn fill(&self, input: &Assignment) -> Effect {
        Self::new(self.sub_effects.iter().map(|effect| effect.fill(input)))
    }

    /// Conjunction of the conditions of every sub-effect.
    pub fn to_condition(&self) -> Condition {
        Condition::Complex(
            self.sub_effects
                .iter()
                .map(|effect| Condition::Basic(effect.to_condition()))
                .collect(),
        )
    }
}

impl From<BasicEffect> for Effect {
    fn from(effect: BasicEffect) -> Self {
        Self::new([effect])
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sub_effects.is_empty() {
            return write!(f, "Void");
        }
        let parts: Vec<String> = self.sub_effects.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(" ^ "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::condition::Relation;

    #[test]
    fn test_assign_becomes_equality() {
        let effect = BasicEffect::assign("a_m", "Confirm");
        assert_eq!(effect.to_condition().relation(), Relation::Equal);
    }

    #[test]
    fn test_discard_becomes_inequality() {
        let effect = BasicEffect::discard("a_m", "Confirm");
        assert_eq!(effect.to_condition().relation(), Relation::Unequal);
    }

    #[test]
    fn test_effect_condition_is_conjunction() {
        let effect = Effect::new([
            BasicEffect::assign("a_m", "Confirm"),
            BasicEffect::discard("a_u", "Reject"),
        ]);
        let condition = effect.to_condition();

        assert!(condition.is_satisfied_by(&Assignment::new().with("a_m", "Confirm").with("a_u", "Ok")));
        assert!(!condition.is_satisfied_by(&Assignment::new().with("a_m", "Confirm").with("a_u", "Reject")));
    }

    #[test]
    fn test_fill_resolves_slots() {
        let effect = Effect::new([
            BasicEffect::assign("a_m", "Confirm({X})"),
            BasicEffect::discard("{var}", "1"),
        ]);
        let filled = effect.fill(&Assignment::new().with("X", "Blue").with("var", "turn"));

        assert_eq!(filled.to_string(), "a_m:=Confirm(Blue) ^ turn!=1");
        assert_eq!(filled.sub_effects()[1].kind(), EffectType::Discard);
        assert!(filled
            .to_condition()
            .is_satisfied_by(&Assignment::new().with("a_m", "Confirm(Blue)").with("turn", 2.0)));
    }

    #[test]
    fn test_empty_effect_always_holds() {
        assert!(Effect::default().to_condition().is_satisfied_by(&Assignment::new()));
        assert_eq!(Effect::default().to_string(), "Void");
    }

    #[test]
    fn test_display() {
        let effect = Effect::new([BasicEffect::assign("a_m", "Greet"), BasicEffect::discard("x", "1")]);
        assert_eq!(effect.to_string(), "a_m:=Greet ^ x!=1");
    }
}
