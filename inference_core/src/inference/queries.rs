//! Queries answered by the inference engine.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use state_model::{Assignment, BNetwork, NodeKind};

/// Posterior distribution of `query_vars` given `evidence`.
#[derive(Debug, Clone)]
pub struct ProbQuery<'a> {
    network: &'a BNetwork,
    query_vars: Vec<String>,
    evidence: Assignment,
}

impl<'a> ProbQuery<'a> {
    pub fn new(
        network: &'a BNetwork,
        query_vars: impl IntoIterator<Item = impl Into<String>>,
        evidence: Assignment,
    ) -> Self {
        Self {
            network,
            query_vars: query_vars.into_iter().map(Into::into).collect(),
            evidence,
        }
    }

    pub fn network(&self) -> &'a BNetwork {
        self.network
    }

    pub fn query_vars(&self) -> &[String] {
        &self.query_vars
    }

    pub fn evidence(&self) -> &Assignment {
        &self.evidence
    }
}

/// Expected utility of every assignment of `query_vars` given `evidence`.
#[derive(Debug, Clone)]
pub struct UtilQuery<'a> {
    network: &'a BNetwork,
    query_vars: Vec<String>,
    evidence: Assignment,
}

impl<'a> UtilQuery<'a> {
    pub fn new(
        network: &'a BNetwork,
        query_vars: impl IntoIterator<Item = impl Into<String>>,
        evidence: Assignment,
    ) -> Self {
        Self {
            network,
            query_vars: query_vars.into_iter().map(Into::into).collect(),
            evidence,
        }
    }

    pub fn network(&self) -> &'a BNetwork {
        self.network
    }

    pub fn query_vars(&self) -> &[String] {
        &self.query_vars
    }

    pub fn evidence(&self) -> &Assignment {
        &self.evidence
    }
}

/// Reduction of a network to a subset of its chance variables.
///
/// Each retained variable is rebuilt with a conditional table over its
/// input nodes, in the order given by `sorted_vars` (parents first).
#[derive(Debug, Clone)]
pub struct ReductionQuery<'a> {
    network: &'a BNetwork,
    sorted_vars: Vec<String>,
    evidence: Assignment,
    input_nodes: BTreeMap<String, BTreeSet<String>>,
}

impl<'a> ReductionQuery<'a> {
    /// Derive the order and the input nodes from the network.
    ///
    /// Variables are ordered topologically. The inputs of each variable are
    /// the retained variables placed before it that are connected to it in
    /// the network, ignoring edge directions; the others are independent of
    /// it under any evidence. Variables missing from the network are placed
    /// last, so that the reduction reports them.
    pub fn new(
        network: &'a BNetwork,
        retained: impl IntoIterator<Item = impl Into<String>>,
        evidence: Assignment,
    ) -> Self {
        let retained: BTreeSet<String> = retained.into_iter().map(Into::into).collect();

        let mut sorted_vars: Vec<String> = network
            .sorted_node_ids()
            .into_iter()
            .filter(|id| retained.contains(id))
            .collect();
        sorted_vars.extend(retained.iter().filter(|id| !network.contains(id)).cloned());

        let neighbours = undirected_neighbours(network);
        let mut input_nodes = BTreeMap::new();
        for (position, var) in sorted_vars.iter().enumerate() {
            let connected = connected_ids(&neighbours, var);
            let inputs: BTreeSet<String> = sorted_vars[..position]
                .iter()
                .filter(|earlier| connected.contains(*earlier))
                .cloned()
                .collect();
            input_nodes.insert(var.clone(), inputs);
        }

        Self {
            network,
            sorted_vars,
            evidence,
            input_nodes,
        }
    }

    /// Build a query from a caller-given order and input nodes.
    pub fn from_parts(
        network: &'a BNetwork,
        sorted_vars: Vec<String>,
        evidence: Assignment,
        input_nodes: BTreeMap<String, BTreeSet<String>>,
    ) -> Self {
        Self {
            network,
            sorted_vars,
            evidence,
            input_nodes,
        }
    }

    /// Builder method to override the input nodes of one variable.
    pub fn with_input_nodes(
        mut self,
        var: impl Into<String>,
        inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.input_nodes
            .insert(var.into(), inputs.into_iter().map(Into::into).collect());
        self
    }

    pub fn network(&self) -> &'a BNetwork {
        self.network
    }

    pub fn sorted_vars(&self) -> &[String] {
        &self.sorted_vars
    }

    pub fn evidence(&self) -> &Assignment {
        &self.evidence
    }

    /// Input nodes of a retained variable, empty if it has none.
    pub fn input_nodes(&self, var: &str) -> BTreeSet<String> {
        self.input_nodes.get(var).cloned().unwrap_or_default()
    }
}

/// Parents and children of every node, utility nodes left out.
fn undirected_neighbours(network: &BNetwork) -> BTreeMap<String, BTreeSet<String>> {
    let mut neighbours: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for node in network.nodes().filter(|node| node.kind() != NodeKind::Utility) {
        neighbours.entry(node.id().to_string()).or_default();
        for input in node.input_ids() {
            neighbours
                .entry(input.clone())
                .or_default()
                .insert(node.id().to_string());
            neighbours
                .entry(node.id().to_string())
                .or_default()
                .insert(input);
        }
    }
    neighbours
}

fn connected_ids(neighbours: &BTreeMap<String, BTreeSet<String>>, var: &str) -> HashSet<String> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([var.to_string()]);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if let Some(next) = neighbours.get(&current) {
            queue.extend(next.iter().cloned());
        }
    }

    visited
}
