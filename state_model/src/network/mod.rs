//! The Bayesian network of the dialogue state.
//!
//! Nodes refer to their parents by identifier; the network owns every node
//! in a single table keyed by identifier.

mod nodes;

pub use nodes::*;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use uuid::Uuid;

use crate::error::{ModelError, Result};

/// Unique identifier for networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub Uuid);

impl NetworkId {
    /// Create a new random network ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed acyclic graph of chance, action and utility nodes.
///
/// Parents must be added before their children, which keeps the graph
/// acyclic by construction.
#[derive(Debug, Clone, Default)]
pub struct BNetwork {
    id: NetworkId,
    nodes: BTreeMap<String, Node>,
}

impl BNetwork {
    /// Create a new empty network.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> NetworkId {
        self.id
    }

    /// Add a node to the network.
    ///
    /// Fails if the identifier is taken or if one of the inputs of the node
    /// is not in the network yet.
    pub fn add_node(&mut self, node: impl Into<Node>) -> Result<()> {
        let node = node.into();
        if self.nodes.contains_key(node.id()) {
            return Err(ModelError::DuplicateNode(node.id().to_string()));
        }
        if let Some(missing) = node
            .input_ids()
            .into_iter()
            .find(|input| !self.nodes.contains_key(input))
        {
            return Err(ModelError::UnknownInput {
                node: node.id().to_string(),
                input: missing,
            });
        }

        self.nodes.insert(node.id().to_string(), node);
        Ok(())
    }

    /// Add a node and return the network, for chained construction.
    pub fn with_node(mut self, node: impl Into<Node>) -> Result<Self> {
        self.add_node(node)?;
        Ok(self)
    }

    /// Get a node by ID.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a node by ID, failing if it is absent.
    pub fn require_node(&self, id: &str) -> Result<&Node> {
        self.node(id)
            .ok_or_else(|| ModelError::UnknownNode(id.to_string()))
    }

    /// Get a chance node by ID.
    pub fn chance_node(&self, id: &str) -> Option<&ChanceNode> {
        match self.nodes.get(id) {
            Some(Node::Chance(node)) => Some(node),
            _ => None,
        }
    }

    /// Check if a node with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate over all nodes, in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over the node identifiers, in identifier order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn chance_nodes(&self) -> impl Iterator<Item = &ChanceNode> {
        self.nodes.values().filter_map(|node| match node {
            Node::Chance(n) => Some(n),
            _ => None,
        })
    }

    pub fn action_nodes(&self) -> impl Iterator<Item = &ActionNode> {
        self.nodes.values().filter_map(|node| match node {
            Node::Action(n) => Some(n),
            _ => None,
        })
    }

    pub fn utility_nodes(&self) -> impl Iterator<Item = &UtilityNode> {
        self.nodes.values().filter_map(|node| match node {
            Node::Utility(n) => Some(n),
            _ => None,
        })
    }

    /// Get the total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node identifiers in topological order: parents come before their
    /// children, and nodes that are ready at the same time are taken in
    /// identifier order.
    pub fn sorted_node_ids(&self) -> Vec<String> {
        let mut pending: BTreeMap<&str, usize> = self
            .nodes
            .values()
            .map(|node| (node.id(), node.input_ids().len()))
            .collect();
        let mut children: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        for node in self.nodes.values() {
            for input in node.input_ids() {
                children.entry(input).or_default().push(node.id());
            }
        }

        let mut ready: BTreeSet<&str> = pending
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(id, _)| *id)
            .collect();
        let mut sorted = Vec::with_capacity(self.nodes.len());

        while let Some(id) = ready.pop_first() {
            sorted.push(id.to_string());
            for child in children.get(id).map(Vec::as_slice).unwrap_or(&[]) {
                if let Some(count) = pending.get_mut(child) {
                    *count -= 1;
                    if *count == 0 {
                        ready.insert(*child);
                    }
                }
            }
        }

        sorted
    }

    /// All the ancestors of a node, excluding the node itself.
    pub fn ancestor_ids(&self, id: &str) -> Result<BTreeSet<String>> {
        let mut ancestors = BTreeSet::new();
        let mut queue: VecDeque<String> = self.require_node(id)?.input_ids().into_iter().collect();

        while let Some(current) = queue.pop_front() {
            if ancestors.insert(current.clone()) {
                if let Some(node) = self.nodes.get(&current) {
                    queue.extend(node.input_ids());
                }
            }
        }

        Ok(ancestors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Assignment;
    use crate::distribs::{CategoricalTable, UtilityTable};

    fn prior(id: &str, p_true: f64) -> ChanceNode {
        ChanceNode::new(
            id,
            CategoricalTable::new()
                .with_row(Assignment::single(id, true), p_true)
                .with_row(Assignment::single(id, false), 1.0 - p_true),
        )
    }

    #[test]
    fn test_add_and_get_node() {
        let mut network = BNetwork::new();
        network.add_node(prior("a", 0.3)).unwrap();

        assert!(network.contains("a"));
        assert!(network.chance_node("a").is_some());
        assert_eq!(network.len(), 1);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut network = BNetwork::new();
        network.add_node(prior("a", 0.3)).unwrap();

        let err = network.add_node(prior("a", 0.5)).unwrap_err();
        assert_eq!(err, ModelError::DuplicateNode("a".to_string()));
    }

    #[test]
    fn test_unknown_input_rejected() {
        let mut network = BNetwork::new();
        let err = network.add_node(prior("b", 0.5).with_input("a")).unwrap_err();

        assert!(matches!(err, ModelError::UnknownInput { ref input, .. } if input == "a"));
        assert!(network.is_empty());
    }

    #[test]
    fn test_node_kinds() {
        let network = BNetwork::new()
            .with_node(prior("rain", 0.2))
            .and_then(|n| n.with_node(ActionNode::new("a_m", ["Umbrella", "Nothing"])))
            .and_then(|n| {
                n.with_node(UtilityNode::new("u", UtilityTable::new()).with_inputs(["rain", "a_m"]))
            })
            .unwrap();

        assert_eq!(network.chance_nodes().count(), 1);
        assert_eq!(network.action_nodes().count(), 1);
        assert_eq!(network.utility_nodes().count(), 1);
        assert!(network.chance_node("a_m").is_none());
    }

    #[test]
    fn test_sorted_node_ids() {
        let network = BNetwork::new()
            .with_node(prior("z", 0.5))
            .and_then(|n| n.with_node(prior("b", 0.5).with_input("z")))
            .and_then(|n| n.with_node(prior("a", 0.5).with_input("b")))
            .and_then(|n| n.with_node(prior("c", 0.5)))
            .unwrap();

        assert_eq!(network.sorted_node_ids(), vec!["c", "z", "b", "a"]);
    }

    #[test]
    fn test_ancestor_ids() {
        let network = BNetwork::new()
            .with_node(prior("a", 0.5))
            .and_then(|n| n.with_node(prior("b", 0.5).with_input("a")))
            .and_then(|n| n.with_node(prior("c", 0.5).with_input("b")))
            .and_then(|n| n.with_node(prior("d", 0.5)))
            .unwrap();

        let ancestors = network.ancestor_ids("c").unwrap();
        assert_eq!(ancestors.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(network.ancestor_ids("missing").is_err());
    }

    #[test]
    fn test_network_ids_are_unique() {
        assert_ne!(BNetwork::new().id(), BNetwork::new().id());
    }
}
