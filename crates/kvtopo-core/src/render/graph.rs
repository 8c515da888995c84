//! Node/edge graph built from a topology

use std::collections::HashMap;
use std::fmt;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::topology::AdjacencyMap;

/// Interface labels carried by one drawn link
///
/// The tail is the reporting host, the head the neighbor it reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEdge {
    /// Interface on the tail node
    pub tail_label: String,
    /// Interface on the head node
    pub head_label: String,
}

impl fmt::Display for RenderEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.tail_label, self.head_label)
    }
}

/// Graph handed to a renderer
///
/// Node weights are router names. Node indices follow first appearance in
/// the topology, so DOT output is stable across runs.
#[derive(Debug, Clone, Default)]
pub struct RenderGraph {
    graph: UnGraph<String, RenderEdge>,
    index: HashMap<String, NodeIndex>,
}

impl RenderGraph {
    /// Build one node per distinct router name and one edge per entry
    ///
    /// Nodes are added in order of first appearance, local side first.
    #[must_use]
    pub fn from_topology(topology: &AdjacencyMap) -> Self {
        let mut out = Self::default();

        for adj in topology {
            let tail = out.node(&adj.local.node);
            let head = out.node(&adj.remote.node);
            out.graph.add_edge(
                tail,
                head,
                RenderEdge {
                    tail_label: adj.local.interface.clone(),
                    head_label: adj.remote.interface.clone(),
                },
            );
        }

        out
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Underlying petgraph graph
    #[must_use]
    pub fn graph(&self) -> &UnGraph<String, RenderEdge> {
        &self.graph
    }

    /// Node names in insertion order
    #[must_use]
    pub fn nodes(&self) -> Vec<&str> {
        self.graph
            .raw_nodes()
            .iter()
            .map(|n| n.weight.as_str())
            .collect()
    }

    /// Edges in topology order as `(tail, head, labels)`
    #[must_use]
    pub fn edges(&self) -> Vec<(&str, &str, &RenderEdge)> {
        self.graph
            .raw_edges()
            .iter()
            .map(|e| {
                (
                    self.graph[e.source()].as_str(),
                    self.graph[e.target()].as_str(),
                    &e.weight,
                )
            })
            .collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has neither nodes nor edges
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0 && self.graph.edge_count() == 0
    }
}
