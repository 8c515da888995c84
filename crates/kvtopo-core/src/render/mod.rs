//! Render module: Topology graph construction and Graphviz output
//!
//! Turns a deduplicated topology into a node/edge graph, serializes it as
//! DOT with the configured style and hands it to a [`Renderer`].

mod dot;
mod graph;
mod graphviz;
mod renderer;
mod style;

pub use dot::Dot;
pub use graph::{RenderEdge, RenderGraph};
pub use graphviz::GraphvizRenderer;
pub use renderer::{render_topology, OutputFormat, RenderError, Renderer};
pub use style::{AttrList, Style, StyleError, StyleOverrides};
