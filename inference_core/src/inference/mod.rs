//! Naive inference - exact answers by enumeration of the full joint.
//!
//! Every query works the same way:
//! 1. **Enumeration**: list every assignment of the chance (and, for
//!    utility queries, action) variables of the network
//! 2. **Weighting**: give each assignment its joint probability
//! 3. **Selection**: keep the rows that agree with the evidence
//! 4. **Aggregation**: sum, normalise or average over the kept rows
//!
//! The cost grows exponentially with the number of variables, so the
//! engine is meant for the small networks of a dialogue state.

mod queries;

pub use queries::*;

use std::collections::BTreeMap;
use tracing::{debug, warn};

use state_model::{
    all_combinations, combination_count, Assignment, BNetwork, CategoricalTable, ChanceNode,
    ConditionalTable, Domains, UtilityTable,
};

use crate::config::InferenceConfig;
use crate::error::{InferenceError, Result};

/// An algorithm answering probability, utility and reduction queries.
pub trait InferenceAlgorithm {
    /// Posterior distribution of the query variables given the evidence.
    fn query_prob(&self, query: &ProbQuery<'_>) -> Result<CategoricalTable>;

    /// Expected utility of each assignment of the query variables.
    fn query_util(&self, query: &UtilQuery<'_>) -> Result<UtilityTable>;

    /// A smaller network over the retained variables with the same posterior.
    fn reduce(&self, query: &ReductionQuery<'_>) -> Result<BNetwork>;
}

/// Exact inference by enumeration.
#[derive(Debug, Clone, Default)]
pub struct NaiveInference {
    config: InferenceConfig,
}

impl NaiveInference {
    /// Create an inference engine with the given configuration.
    pub fn new(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Create an inference engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(InferenceConfig::default())
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Joint probability of every assignment of the network variables.
    ///
    /// Chance variables are always included; action variables only when
    /// `include_actions` is set, each weighted by its uniform prior. Each
    /// joint probability is the product of the node probabilities, summed
    /// in log space.
    pub fn full_joint(
        &self,
        network: &BNetwork,
        include_actions: bool,
    ) -> Result<BTreeMap<Assignment, f64>> {
        let mut domains = Domains::new();
        for node in network.chance_nodes() {
            domains.insert(node.id().to_string(), node.values());
        }
        if include_actions {
            for node in network.action_nodes() {
                domains.insert(node.id().to_string(), node.values());
            }
        }
        self.check_size(&domains)?;

        let mut joint = BTreeMap::new();
        for assignment in all_combinations(&domains) {
            let mut log_prob = 0.0;
            for node in network.chance_nodes() {
                let value = assignment.value_or_none(node.id());
                log_prob += node.prob(&assignment, &value).log10();
            }
            if include_actions {
                for node in network.action_nodes() {
                    let value = assignment.value_or_none(node.id());
                    log_prob += node.prob(&value).log10();
                }
            }
            joint.insert(assignment, 10f64.powf(log_prob));
        }

        debug!(
            network = %network.id(),
            rows = joint.len(),
            include_actions,
            "Computed full joint"
        );
        Ok(joint)
    }

    fn check_size(&self, domains: &Domains) -> Result<()> {
        let count = combination_count(domains);
        if count > self.config.max_assignments {
            return Err(InferenceError::TooManyAssignments {
                count,
                limit: self.config.max_assignments,
            });
        }
        Ok(())
    }

    fn chance_domains(&self, network: &BNetwork, vars: &[String]) -> Result<Domains> {
        let mut domains = Domains::new();
        for var in vars {
            let node = network
                .chance_node(var)
                .ok_or_else(|| InferenceError::UnknownVariable(var.clone()))?;
            domains.insert(var.clone(), node.values());
        }
        self.check_size(&domains)?;
        Ok(domains)
    }
}

impl InferenceAlgorithm for NaiveInference {
    /// Sums the joint rows containing both the query assignment and the
    /// evidence, then normalises the sums.
    fn query_prob(&self, query: &ProbQuery<'_>) -> Result<CategoricalTable> {
        let network = query.network();
        let domains = self.chance_domains(network, query.query_vars())?;
        let joint = self.full_joint(network, false)?;

        let consistent: Vec<(&Assignment, f64)> = joint
            .iter()
            .filter(|(row, _)| row.contains(query.evidence()))
            .map(|(row, prob)| (row, *prob))
            .collect();

        let mut weights = BTreeMap::new();
        for query_assignment in all_combinations(&domains) {
            let mass: f64 = consistent
                .iter()
                .filter(|(row, _)| row.contains(&query_assignment))
                .map(|(_, prob)| prob)
                .sum();
            weights.insert(query_assignment, mass);
        }

        let table: CategoricalTable = normalise(weights, query.evidence())?.into_iter().collect();
        debug!(
            vars = ?query.query_vars(),
            evidence = %query.evidence(),
            rows = table.len(),
            "Answered probability query"
        );
        Ok(table)
    }

    /// Averages the summed utility-node outputs over the joint rows
    /// consistent with the evidence, for each assignment of the query
    /// variables.
    fn query_util(&self, query: &UtilQuery<'_>) -> Result<UtilityTable> {
        let network = query.network();
        let mut domains = Domains::new();
        for var in query.query_vars() {
            let node = network
                .node(var)
                .ok_or_else(|| InferenceError::UnknownVariable(var.clone()))?;
            domains.insert(var.clone(), node.values());
        }
        self.check_size(&domains)?;

        let joint = self.full_joint(network, true)?;
        let consistent: Vec<(&Assignment, f64)> = joint
            .iter()
            .filter(|(row, _)| row.contains(query.evidence()))
            .map(|(row, prob)| (row, *prob))
            .collect();

        let total_prob: f64 = consistent.iter().map(|(_, prob)| prob).sum();
        if total_prob <= 0.0 || !total_prob.is_finite() {
            return Err(InferenceError::DegenerateQuery(format!(
                "evidence {} has no probability mass",
                query.evidence()
            )));
        }

        let mut table = UtilityTable::new();
        for action in all_combinations(&domains) {
            let mut total_utility = 0.0;
            for (state, prob) in &consistent {
                let state_and_action = Assignment::compose(state, &action);
                let utility: f64 = network
                    .utility_nodes()
                    .map(|node| node.utility(&state_and_action))
                    .sum();
                total_utility += utility * prob;
            }
            table.set_util(action, total_utility / total_prob);
        }

        debug!(
            vars = ?query.query_vars(),
            evidence = %query.evidence(),
            rows = table.len(),
            "Answered utility query"
        );
        Ok(table)
    }

    /// Rebuilds each retained variable, in order, with a conditional table
    /// over its input nodes. The table rows are probability queries on the
    /// original network, given the evidence and the parent assignment.
    fn reduce(&self, query: &ReductionQuery<'_>) -> Result<BNetwork> {
        let network = query.network();
        let mut reduced = BNetwork::new();

        for var in query.sorted_vars() {
            if network.chance_node(var).is_none() {
                return Err(InferenceError::UnknownVariable(var.clone()));
            }
            let inputs: Vec<String> = query.input_nodes(var).into_iter().collect();
            let parent_domains = self.chance_domains(network, &inputs)?;

            let mut table = ConditionalTable::new();
            for parents in all_combinations(&parent_domains) {
                let evidence = Assignment::compose(query.evidence(), &parents);
                let sub_query = ProbQuery::new(network, [var.as_str()], evidence);
                match self.query_prob(&sub_query) {
                    Ok(distrib) => table.add_distrib(parents, distrib),
                    Err(InferenceError::DegenerateQuery(_)) => {
                        warn!(
                            var = %var,
                            parents = %parents,
                            "Parent assignment has no probability mass, skipping"
                        );
                    }
                    Err(e) => return Err(e),
                }
            }

            reduced.add_node(ChanceNode::new(var.as_str(), table).with_inputs(inputs))?;
        }

        debug!(
            network = %network.id(),
            reduced = %reduced.id(),
            nodes = reduced.len(),
            "Reduced network"
        );
        Ok(reduced)
    }
}

fn normalise(
    weights: BTreeMap<Assignment, f64>,
    evidence: &Assignment,
) -> Result<BTreeMap<Assignment, f64>> {
    let total: f64 = weights.values().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(InferenceError::DegenerateQuery(format!(
            "evidence {} has no probability mass",
            evidence
        )));
    }
    Ok(weights
        .into_iter()
        .map(|(assignment, weight)| (assignment, weight / total))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use crate::rule_utility::RuleUtilDistribution;
    use crate::rules::{
        AnchoredRule, BasicCondition, BasicEffect, CaseRule, Parameter, RuleOutput, RuleType,
    };
    use proptest::prelude::*;
    use state_model::{ActionNode, UtilityNode, Value};
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const EPSILON: f64 = 1e-9;

    fn prior(var: &str, p_true: f64) -> CategoricalTable {
        CategoricalTable::new()
            .with_row(Assignment::single(var, true), p_true)
            .with_row(Assignment::single(var, false), 1.0 - p_true)
    }

    fn conditional(var: &str, parent: &str, if_true: f64, if_false: f64) -> ConditionalTable {
        ConditionalTable::new()
            .with_distrib(Assignment::single(parent, true), prior(var, if_true))
            .with_distrib(Assignment::single(parent, false), prior(var, if_false))
    }

    /// A -> B with P(A) = 0.3, P(B|A) = 0.8 and P(B|!A) = 0.1.
    fn two_nodes() -> BNetwork {
        BNetwork::new()
            .with_node(ChanceNode::new("A", prior("A", 0.3)))
            .and_then(|n| n.with_node(ChanceNode::new("B", conditional("B", "A", 0.8, 0.1)).with_input("A")))
            .unwrap()
    }

    /// A -> B -> C.
    fn chain() -> BNetwork {
        let mut network = two_nodes();
        network
            .add_node(ChanceNode::new("C", conditional("C", "B", 0.9, 0.2)).with_input("B"))
            .unwrap();
        network
    }

    /// A and an action a_m, scored by a utility table over both.
    fn decision() -> BNetwork {
        let utilities = UtilityTable::new()
            .with_util(Assignment::new().with("A", true).with("a_m", "Confirm"), 2.0)
            .with_util(Assignment::new().with("A", false).with("a_m", "Confirm"), -1.0)
            .with_util(Assignment::new().with("A", true).with("a_m", "Reject"), 0.0)
            .with_util(Assignment::new().with("A", false).with("a_m", "Reject"), 0.0);

        let mut network = two_nodes();
        network.add_node(ActionNode::new("a_m", ["Confirm", "Reject"])).unwrap();
        network
            .add_node(UtilityNode::new("U", utilities).with_inputs(["A", "a_m"]))
            .unwrap();
        network
    }

    fn prob_of(table: &CategoricalTable, var: &str, value: impl Into<Value>) -> f64 {
        table.prob(&Assignment::single(var, value))
    }

    #[test]
    fn test_marginal_of_child() {
        let network = two_nodes();
        let engine = NaiveInference::with_defaults();

        let table = engine
            .query_prob(&ProbQuery::new(&network, ["B"], Assignment::new()))
            .unwrap();

        assert!((prob_of(&table, "B", true) - 0.31).abs() < EPSILON);
        assert!((prob_of(&table, "B", false) - 0.69).abs() < EPSILON);
    }

    #[test]
    fn test_posterior_given_evidence() {
        let network = two_nodes();
        let engine = NaiveInference::with_defaults();

        let table = engine
            .query_prob(&ProbQuery::new(&network, ["A"], Assignment::single("B", true)))
            .unwrap();

        assert!((prob_of(&table, "A", true) - 0.24 / 0.31).abs() < EPSILON);
        assert!((table.total_prob() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_joint_query() {
        let network = chain();
        let engine = NaiveInference::with_defaults();

        let table = engine
            .query_prob(&ProbQuery::new(&network, ["A", "C"], Assignment::new()))
            .unwrap();

        assert_eq!(table.len(), 4);
        assert!((table.total_prob() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_full_joint_sums_to_one() {
        let network = chain();
        let engine = NaiveInference::with_defaults();

        let joint = engine.full_joint(&network, false).unwrap();

        assert_eq!(joint.len(), 8);
        let total: f64 = joint.values().sum();
        assert!((total - 1.0).abs() < EPSILON);

        let row = Assignment::new().with("A", true).with("B", true).with("C", false);
        assert!((joint[&row] - 0.3 * 0.8 * 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_full_joint_with_actions() {
        let network = decision();
        let engine = NaiveInference::with_defaults();

        let without = engine.full_joint(&network, false).unwrap();
        let with = engine.full_joint(&network, true).unwrap();

        assert_eq!(without.len(), 4);
        assert_eq!(with.len(), 8);
        let total: f64 = with.values().sum();
        assert!((total - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_probability_rows() {
        let network = BNetwork::new()
            .with_node(ChanceNode::new("A", prior("A", 1.0)))
            .unwrap();
        let engine = NaiveInference::with_defaults();

        let joint = engine.full_joint(&network, false).unwrap();
        assert_eq!(joint[&Assignment::single("A", false)], 0.0);
        assert_eq!(joint[&Assignment::single("A", true)], 1.0);
    }

    #[test]
    fn test_degenerate_evidence() {
        let network = two_nodes();
        let engine = NaiveInference::with_defaults();

        let err = engine
            .query_prob(&ProbQuery::new(&network, ["A"], Assignment::single("B", "maybe")))
            .unwrap_err();
        assert!(matches!(err, InferenceError::DegenerateQuery(_)));

        let err = engine
            .query_util(&UtilQuery::new(&network, ["A"], Assignment::single("B", "maybe")))
            .unwrap_err();
        assert!(matches!(err, InferenceError::DegenerateQuery(_)));
    }

    #[test]
    fn test_unknown_query_variable() {
        let network = two_nodes();
        let engine = NaiveInference::with_defaults();

        let err = engine
            .query_prob(&ProbQuery::new(&network, ["Z"], Assignment::new()))
            .unwrap_err();
        assert!(matches!(err, InferenceError::UnknownVariable(var) if var == "Z"));
    }

    #[test]
    fn test_assignment_limit() {
        let network = chain();
        let engine = NaiveInference::new(InferenceConfig {
            max_assignments: 4,
            ..InferenceConfig::default()
        });

        let err = engine.full_joint(&network, false).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::TooManyAssignments { count: 8, limit: 4 }
        ));
    }

    #[test]
    fn test_expected_utility() {
        let network = decision();
        let engine = NaiveInference::with_defaults();

        let table = engine
            .query_util(&UtilQuery::new(&network, ["a_m"], Assignment::new()))
            .unwrap();

        let confirm = table.util(&Assignment::single("a_m", "Confirm"));
        let reject = table.util(&Assignment::single("a_m", "Reject"));
        assert!((confirm - (0.3 * 2.0 - 0.7)).abs() < EPSILON);
        assert!(reject.abs() < EPSILON);
        assert_eq!(table.best().map(|(a, _)| a.clone()), Some(Assignment::single("a_m", "Reject")));
    }

    #[test]
    fn test_expected_utility_given_evidence() {
        let network = decision();
        let engine = NaiveInference::with_defaults();

        let table = engine
            .query_util(&UtilQuery::new(&network, ["a_m"], Assignment::single("B", true)))
            .unwrap();

        let confirm = table.util(&Assignment::single("a_m", "Confirm"));
        assert!((confirm - 0.41 / 0.31).abs() < EPSILON);
        assert_eq!(
            table.best().map(|(a, _)| a.clone()),
            Some(Assignment::single("a_m", "Confirm"))
        );
    }

    /// Counts how often the wrapped rule is matched.
    #[derive(Debug)]
    struct CountingRule {
        inner: CaseRule,
        calls: AtomicUsize,
    }

    impl AnchoredRule for CountingRule {
        fn rule_type(&self) -> RuleType {
            self.inner.rule_type()
        }

        fn output_variables(&self) -> BTreeSet<String> {
            self.inner.output_variables()
        }

        fn parameters(&self) -> BTreeSet<String> {
            self.inner.parameters()
        }

        fn matching_output(&self, input: &Assignment) -> std::result::Result<RuleOutput, RuleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.matching_output(input)
        }
    }

    impl std::fmt::Display for CountingRule {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.inner)
        }
    }

    #[test]
    fn test_expected_utility_from_rule() {
        let rule = Arc::new(CountingRule {
            inner: CaseRule::new("go_if_a", RuleType::Util)
                .with_output_variable("a_m'")
                .with_case(
                    BasicCondition::equal("A", "true"),
                    RuleOutput::new().with_effect(BasicEffect::assign("a_m", "Go"), Parameter::Fixed(1.0)),
                ),
            calls: AtomicUsize::new(0),
        });
        let distrib = Arc::new(RuleUtilDistribution::new(rule.clone()).unwrap());

        let network = BNetwork::new()
            .with_node(ChanceNode::new("A", prior("A", 0.6)))
            .and_then(|n| n.with_node(ActionNode::new("a_m'", ["Go", "Stay"])))
            .and_then(|n| {
                n.with_node(UtilityNode::from_shared("U", distrib.clone()).with_inputs(["A", "a_m'"]))
            })
            .unwrap();
        let engine = NaiveInference::with_defaults();

        let table = engine
            .query_util(&UtilQuery::new(&network, ["a_m'"], Assignment::new()))
            .unwrap();

        assert!((table.util(&Assignment::single("a_m'", "Go")) - 0.6).abs() < EPSILON);
        assert!(table.util(&Assignment::single("a_m'", "Stay")).abs() < EPSILON);

        // two values of A times two actions, each matched once
        assert_eq!(distrib.cached_len(), 4);
        assert_eq!(rule.calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_reduction_drops_intermediate_node() {
        let network = chain();
        let engine = NaiveInference::with_defaults();

        let reduced = engine
            .reduce(&ReductionQuery::new(&network, ["A", "C"], Assignment::new()))
            .unwrap();

        assert_eq!(reduced.len(), 2);
        assert!(!reduced.contains("B"));
        assert!(reduced.chance_node("C").unwrap().input_ids().contains("A"));

        for a in [true, false] {
            let evidence = Assignment::single("A", a);
            let original = engine
                .query_prob(&ProbQuery::new(&network, ["C"], evidence.clone()))
                .unwrap();
            let smaller = engine
                .query_prob(&ProbQuery::new(&reduced, ["C"], evidence))
                .unwrap();
            assert!((prob_of(&original, "C", true) - prob_of(&smaller, "C", true)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_reduction_absorbs_evidence() {
        let network = chain();
        let engine = NaiveInference::with_defaults();
        let evidence = Assignment::single("C", true);

        let reduced = engine
            .reduce(&ReductionQuery::new(&network, ["A"], evidence.clone()))
            .unwrap();

        let original = engine
            .query_prob(&ProbQuery::new(&network, ["A"], evidence))
            .unwrap();
        let smaller = engine
            .query_prob(&ProbQuery::new(&reduced, ["A"], Assignment::new()))
            .unwrap();
        assert!((prob_of(&original, "A", true) - prob_of(&smaller, "A", true)).abs() < EPSILON);
    }

    #[test]
    fn test_reduction_keeps_posterior() {
        let network = chain();
        let engine = NaiveInference::with_defaults();

        let reduced = engine
            .reduce(&ReductionQuery::new(&network, ["A", "B", "C"], Assignment::new()))
            .unwrap();

        let original = engine
            .query_prob(&ProbQuery::new(&network, ["A", "B", "C"], Assignment::new()))
            .unwrap();
        let rebuilt = engine
            .query_prob(&ProbQuery::new(&reduced, ["A", "B", "C"], Assignment::new()))
            .unwrap();
        for (row, prob) in original.rows() {
            assert!((rebuilt.prob(row) - prob).abs() < EPSILON);
        }
    }

    #[test]
    fn test_reduction_keeps_common_cause_correlation() {
        let network = BNetwork::new()
            .with_node(ChanceNode::new("A", prior("A", 0.5)))
            .and_then(|n| n.with_node(ChanceNode::new("B", conditional("B", "A", 0.9, 0.1)).with_input("A")))
            .and_then(|n| n.with_node(ChanceNode::new("C", conditional("C", "A", 0.9, 0.1)).with_input("A")))
            .unwrap();
        let engine = NaiveInference::with_defaults();

        let reduced = engine
            .reduce(&ReductionQuery::new(&network, ["B", "C"], Assignment::new()))
            .unwrap();

        let original = engine
            .query_prob(&ProbQuery::new(&network, ["B", "C"], Assignment::new()))
            .unwrap();
        let smaller = engine
            .query_prob(&ProbQuery::new(&reduced, ["B", "C"], Assignment::new()))
            .unwrap();

        let both = Assignment::new().with("B", true).with("C", true);
        assert!((original.prob(&both) - 0.41).abs() < EPSILON);
        for (row, prob) in original.rows() {
            assert!((smaller.prob(row) - prob).abs() < EPSILON);
        }
    }

    #[test]
    fn test_reduction_skips_impossible_parents() {
        let network = BNetwork::new()
            .with_node(ChanceNode::new("A", prior("A", 1.0)))
            .and_then(|n| n.with_node(ChanceNode::new("B", conditional("B", "A", 0.6, 0.5)).with_input("A")))
            .unwrap();
        let engine = NaiveInference::with_defaults();

        let reduced = engine
            .reduce(&ReductionQuery::new(&network, ["A", "B"], Assignment::new()))
            .unwrap();

        let node = reduced.chance_node("B").unwrap();
        assert!((node.prob(&Assignment::single("A", true), &Value::Boolean(true)) - 0.6).abs() < EPSILON);
        assert_eq!(node.prob(&Assignment::single("A", false), &Value::Boolean(true)), 0.0);
    }

    #[test]
    fn test_reduction_unknown_variable() {
        let network = two_nodes();
        let engine = NaiveInference::with_defaults();

        let err = engine
            .reduce(&ReductionQuery::new(&network, ["A", "missing"], Assignment::new()))
            .unwrap_err();
        assert!(matches!(err, InferenceError::UnknownVariable(var) if var == "missing"));
    }

    proptest! {
        #[test]
        fn prop_posterior_is_normalised(
            p in 0.01f64..0.99,
            if_true in 0.01f64..0.99,
            if_false in 0.01f64..0.99,
        ) {
            let network = BNetwork::new()
                .with_node(ChanceNode::new("A", prior("A", p)))
                .and_then(|n| n.with_node(ChanceNode::new("B", conditional("B", "A", if_true, if_false)).with_input("A")))
                .unwrap();
            let engine = NaiveInference::with_defaults();

            let marginal = engine
                .query_prob(&ProbQuery::new(&network, ["B"], Assignment::new()))
                .unwrap();
            prop_assert!((marginal.total_prob() - 1.0).abs() < 1e-9);
            prop_assert!((prob_of(&marginal, "B", true) - (p * if_true + (1.0 - p) * if_false)).abs() < 1e-9);

            let posterior = engine
                .query_prob(&ProbQuery::new(&network, ["A"], Assignment::single("B", true)))
                .unwrap();
            prop_assert!((posterior.total_prob() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn prop_reduction_preserves_marginal(
            p in 0.01f64..0.99,
            if_true in 0.01f64..0.99,
            if_false in 0.01f64..0.99,
        ) {
            let network = BNetwork::new()
                .with_node(ChanceNode::new("A", prior("A", p)))
                .and_then(|n| n.with_node(ChanceNode::new("B", conditional("B", "A", if_true, if_false)).with_input("A")))
                .unwrap();
            let engine = NaiveInference::with_defaults();

            let reduced = engine
                .reduce(&ReductionQuery::new(&network, ["B"], Assignment::new()))
                .unwrap();
            let original = engine
                .query_prob(&ProbQuery::new(&network, ["B"], Assignment::new()))
                .unwrap();
            let smaller = engine
                .query_prob(&ProbQuery::new(&reduced, ["B"], Assignment::new()))
                .unwrap();
            prop_assert!((prob_of(&original, "B", true) - prob_of(&smaller, "B", true)).abs() < 1e-9);
        }
    }
}
