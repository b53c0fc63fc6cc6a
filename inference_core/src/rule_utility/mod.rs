//! Utility distributions defined by utility rules.
//!
//! The utility of an assignment is read from the output of the rule:
//! 1. **Split**: the rule's output variables are the actions, every other
//!    variable is the rule input
//! 2. **Matching**: the rule produces weighted effects for the input
//! 3. **Scoring**: the weights of the effects realised by the actions
//!    (with primes removed) are summed

mod cache;

pub use cache::*;

use std::sync::Arc;
use tracing::{trace, warn};

use state_model::{Assignment, UtilityFunction};

use crate::config::InferenceConfig;
use crate::error::{InferenceError, Result, RuleError};
use crate::rules::{AnchoredRule, RuleType};

/// Utility function backed by an anchored utility rule.
#[derive(Debug)]
pub struct RuleUtilDistribution {
    rule: Arc<dyn AnchoredRule>,
    cache: UtilityCache,
}

impl RuleUtilDistribution {
    /// Create a distribution with default configuration.
    ///
    /// Fails if the rule is not a utility rule.
    pub fn new(rule: Arc<dyn AnchoredRule>) -> Result<Self> {
        Self::with_config(rule, &InferenceConfig::default())
    }

    /// Create a distribution with the given configuration.
    ///
    /// Utilities are cached only when caching is enabled and the rule has
    /// no external parameters.
    pub fn with_config(rule: Arc<dyn AnchoredRule>, config: &InferenceConfig) -> Result<Self> {
        if rule.rule_type() != RuleType::Util {
            return Err(InferenceError::Configuration(format!(
                "rule {} must be a utility rule, found a {} rule",
                rule,
                rule.rule_type()
            )));
        }

        let cache = if config.cache_utilities && rule.parameters().is_empty() {
            UtilityCache::enabled()
        } else {
            UtilityCache::Disabled
        };
        Ok(Self { rule, cache })
    }

    pub fn rule(&self) -> &dyn AnchoredRule {
        self.rule.as_ref()
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_enabled()
    }

    /// Number of utilities currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn is_well_formed(&self) -> bool {
        true
    }

    /// Utility of a full assignment of rule inputs and actions.
    ///
    /// Never fails: an error while matching the rule is logged and the
    /// utility is 0.
    pub fn util(&self, full: &Assignment) -> f64 {
        let outputs = self.rule.output_variables();
        let input = full.trimmed_inverse(&outputs);
        let actions = full.trimmed(&outputs);

        if let Some(util) = self.cache.get(&input, &actions) {
            trace!(input = %input, actions = %actions, util, "Utility cache hit");
            return util;
        }

        let util = match self.compute_util(&input, &actions) {
            Ok(util) => util,
            Err(e) => {
                warn!(
                    rule = %self.rule,
                    input = %input,
                    actions = %actions,
                    error = %e,
                    "Could not extract utility, using 0"
                );
                0.0
            }
        };
        self.cache.store(input, actions, util);
        util
    }

    fn compute_util(&self, input: &Assignment, actions: &Assignment) -> std::result::Result<f64, RuleError> {
        let formatted = actions.remove_primes();
        let output = self.rule.matching_output(input)?;

        let mut total = 0.0;
        for (effect, parameter) in output.effects() {
            if effect.to_condition().is_satisfied_by(&formatted) {
                total += parameter.value(input)?;
            }
        }

        if !total.is_finite() {
            return Err(RuleError::NonFiniteUtility(total));
        }
        Ok(total)
    }
}

impl UtilityFunction for RuleUtilDistribution {
    fn utility(&self, input: &Assignment) -> f64 {
        self.util(input)
    }

    fn modify_variable_id(&self, _old_id: &str, _new_id: &str) {
        self.clear_cache();
    }
}

impl Clone for RuleUtilDistribution {
    /// Shares the rule; the copy starts with an empty cache.
    fn clone(&self) -> Self {
        Self {
            rule: Arc::clone(&self.rule),
            cache: self.cache.fresh(),
        }
    }
}

impl std::fmt::Display for RuleUtilDistribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rule)
    }
}
