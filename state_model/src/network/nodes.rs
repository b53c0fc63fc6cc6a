//! Node definitions: chance, action and utility nodes.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::assignment::Assignment;
use crate::distribs::{ProbDistribution, UtilityFunction};
use crate::values::Value;

/// A node with a (conditional) probability distribution over its values.
#[derive(Debug, Clone)]
pub struct ChanceNode {
    id: String,
    input_ids: BTreeSet<String>,
    distrib: Arc<dyn ProbDistribution>,
}

impl ChanceNode {
    /// Create a chance node with the given distribution.
    pub fn new(id: impl Into<String>, distrib: impl ProbDistribution + 'static) -> Self {
        Self::from_shared(id, Arc::new(distrib))
    }

    /// Create a chance node over a distribution shared with other nodes.
    pub fn from_shared(id: impl Into<String>, distrib: Arc<dyn ProbDistribution>) -> Self {
        Self {
            id: id.into(),
            input_ids: BTreeSet::new(),
            distrib,
        }
    }

    /// Declare a parent node.
    pub fn with_input(mut self, input_id: impl Into<String>) -> Self {
        self.input_ids.insert(input_id.into());
        self
    }

    /// Declare several parent nodes.
    pub fn with_inputs(mut self, input_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.input_ids.extend(input_ids.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn input_ids(&self) -> &BTreeSet<String> {
        &self.input_ids
    }

    pub fn distrib(&self) -> &dyn ProbDistribution {
        self.distrib.as_ref()
    }

    /// Domain of the node.
    pub fn values(&self) -> Vec<Value> {
        self.distrib.values(&self.id)
    }

    /// P(node = value | parents), reading the parent values from `condition`.
    pub fn prob(&self, condition: &Assignment, value: &Value) -> f64 {
        let parents = condition.trimmed(&self.input_ids);
        self.distrib
            .prob(&parents, &Assignment::single(self.id.as_str(), value.clone()))
    }
}

/// A decision variable. Its values are equally likely a priori.
#[derive(Debug, Clone)]
pub struct ActionNode {
    id: String,
    values: Vec<Value>,
}

impl ActionNode {
    /// Create an action node over the given candidate actions.
    pub fn new(id: impl Into<String>, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        let mut distinct: Vec<Value> = Vec::new();
        for value in values.into_iter().map(Into::into) {
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }
        Self {
            id: id.into(),
            values: distinct,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn values(&self) -> Vec<Value> {
        self.values.clone()
    }

    /// Prior probability of an action value.
    pub fn prob(&self, value: &Value) -> f64 {
        if self.values.contains(value) {
            1.0 / self.values.len() as f64
        } else {
            0.0
        }
    }
}

/// A node contributing a utility computed from its inputs.
#[derive(Debug, Clone)]
pub struct UtilityNode {
    id: String,
    input_ids: BTreeSet<String>,
    function: Arc<dyn UtilityFunction>,
}

impl UtilityNode {
    /// Create a utility node with the given utility function.
    pub fn new(id: impl Into<String>, function: impl UtilityFunction + 'static) -> Self {
        Self::from_shared(id, Arc::new(function))
    }

    /// Create a utility node over a function shared with other nodes.
    pub fn from_shared(id: impl Into<String>, function: Arc<dyn UtilityFunction>) -> Self {
        Self {
            id: id.into(),
            input_ids: BTreeSet::new(),
            function,
        }
    }

    /// Declare an input node.
    pub fn with_input(mut self, input_id: impl Into<String>) -> Self {
        self.input_ids.insert(input_id.into());
        self
    }

    /// Declare several input nodes.
    pub fn with_inputs(mut self, input_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.input_ids.extend(input_ids.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn input_ids(&self) -> &BTreeSet<String> {
        &self.input_ids
    }

    pub fn function(&self) -> &dyn UtilityFunction {
        self.function.as_ref()
    }

    /// Utility of a full state-and-action assignment, restricted to the inputs of the node.
    pub fn utility(&self, full: &Assignment) -> f64 {
        self.function.utility(&full.trimmed(&self.input_ids))
    }
}

/// Any node of the network.
#[derive(Debug, Clone)]
pub enum Node {
    Chance(ChanceNode),
    Action(ActionNode),
    Utility(UtilityNode),
}

/// Kinds of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Chance,
    Action,
    Utility,
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Chance(n) => n.id(),
            Node::Action(n) => n.id(),
            Node::Utility(n) => n.id(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Chance(_) => NodeKind::Chance,
            Node::Action(_) => NodeKind::Action,
            Node::Utility(_) => NodeKind::Utility,
        }
    }

    /// Identifiers of the parent nodes (empty for action nodes).
    pub fn input_ids(&self) -> BTreeSet<String> {
        match self {
            Node::Chance(n) => n.input_ids().clone(),
            Node::Action(_) => BTreeSet::new(),
            Node::Utility(n) => n.input_ids().clone(),
        }
    }

    /// Domain of the node (empty for utility nodes).
    pub fn values(&self) -> Vec<Value> {
        match self {
            Node::Chance(n) => n.values(),
            Node::Action(n) => n.values(),
            Node::Utility(_) => Vec::new(),
        }
    }
}

impl From<ChanceNode> for Node {
    fn from(node: ChanceNode) -> Self {
        Node::Chance(node)
    }
}

impl From<ActionNode> for Node {
    fn from(node: ActionNode) -> Self {
        Node::Action(node)
    }
}

impl From<UtilityNode> for Node {
    fn from(node: UtilityNode) -> Self {
        Node::Utility(node)
    }
}
