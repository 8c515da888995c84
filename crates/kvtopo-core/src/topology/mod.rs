//! Topology module: Adjacency model and deduplication
//!
//! Holds the ordered adjacency mapping produced by the extractor and the
//! heuristics that collapse reciprocal entries before rendering.

mod dedup;
pub mod model;

pub use dedup::{dedup, DedupMode};
pub use model::{Adjacency, AdjacencyMap, Endpoint};

#[cfg(test)]
mod tests;
