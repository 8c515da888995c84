//! kvtopo-core: Core library for OpenR adjacency topology rendering
//!
//! Scans the `breeze kvstore adj` section of an OpenR "show tech" dump,
//! collapses reciprocal adjacencies and turns the result into a Graphviz
//! graph.
//!
//! # Pipeline
//!
//! 1. [`extract_file`] - line scanner producing an [`AdjacencyMap`]
//! 2. [`dedup`] - reciprocal edge removal
//! 3. [`render_topology`] - graph construction, handed to a [`Renderer`]

pub mod extract;
pub mod render;
pub mod topology;

// Re-export commonly used types
pub use extract::{extract, extract_file, extract_str, ExtractError, ScanState};
pub use render::{
    render_topology, GraphvizRenderer, OutputFormat, RenderError, RenderGraph, Renderer, Style,
    StyleError,
};
pub use topology::{dedup, AdjacencyMap, DedupMode, Endpoint};
