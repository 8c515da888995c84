//! DOT serialization

use std::fmt;

use petgraph::dot::{Config, Dot as PetDot};
use petgraph::graph::{EdgeReference, NodeIndex, UnGraph};

use super::graph::{RenderEdge, RenderGraph};
use super::style::{AttrList, Style};

/// Spacing label placed on every edge so the two interface labels do not
/// overlap in the middle of the link
const EDGE_SPACER: &str = "            ";

/// Display adapter writing a [`RenderGraph`] as an undirected DOT graph
///
/// Style defaults come first, followed by the nodes and edges as written by
/// petgraph. Nodes are identified by index and labelled with the router name.
pub struct Dot<'a> {
    graph: &'a RenderGraph,
    style: &'a Style,
}

impl<'a> Dot<'a> {
    #[must_use]
    pub fn new(graph: &'a RenderGraph, style: &'a Style) -> Self {
        Self { graph, style }
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph {{")?;

        write_defaults(f, "graph", &self.style.graph)?;
        write_defaults(f, "node", &self.style.node)?;
        write_defaults(f, "edge", &self.style.edge)?;

        let edge_attrs = |_: &UnGraph<String, RenderEdge>, edge: EdgeReference<'_, RenderEdge>| {
            let labels = edge.weight();
            format!(
                "headlabel = {:?} label = {EDGE_SPACER:?} taillabel = {:?} ",
                labels.head_label, labels.tail_label
            )
        };
        let node_attrs = |_: &UnGraph<String, RenderEdge>, _: (NodeIndex, &String)| String::new();
        let content = PetDot::with_attr_getters(
            self.graph.graph(),
            &[Config::EdgeNoLabel, Config::GraphContentOnly],
            &edge_attrs,
            &node_attrs,
        );
        write!(f, "{content}")?;

        writeln!(f, "}}")
    }
}

fn write_defaults(f: &mut fmt::Formatter<'_>, kind: &str, attrs: &AttrList) -> fmt::Result {
    if attrs.is_empty() {
        return Ok(());
    }
    let list: Vec<String> = attrs
        .iter()
        .map(|(name, value)| format!("{name:?}={value:?}"))
        .collect();
    writeln!(f, "    {kind} [{}]", list.join(" "))
}
