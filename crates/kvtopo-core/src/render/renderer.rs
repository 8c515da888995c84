//! Renderer seam and top-level render entry point

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::graph::RenderGraph;
use super::style::Style;
use crate::topology::AdjacencyMap;

/// Errors that can occur while rendering a topology
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Graphviz program '{program}' not found")]
    BackendMissing { program: String },

    #[error("Graphviz program '{program}' failed ({status}): {stderr}")]
    BackendFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run Graphviz: {0}")]
    Io(#[from] std::io::Error),
}

/// Image format produced by the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    /// DOT source only; no layout is run
    Dot,
}

impl OutputFormat {
    /// File extension, also the Graphviz `-T` argument
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Dot => "dot",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "dot" | "gv" => Ok(Self::Dot),
            other => Err(format!("unsupported output format '{other}'")),
        }
    }
}

/// Something that can lay out a graph and write it to disk
pub trait Renderer {
    /// Render `graph` under the base path `output`, returning the written file
    ///
    /// # Errors
    /// Returns an error if the output cannot be produced.
    fn render(
        &self,
        graph: &RenderGraph,
        style: &Style,
        output: &Path,
    ) -> Result<PathBuf, RenderError>;
}

/// Build the render graph for a topology and hand it to `renderer`
///
/// # Errors
/// Returns the renderer's error.
pub fn render_topology<R>(
    topology: &AdjacencyMap,
    renderer: &R,
    style: &Style,
    output: &Path,
) -> Result<PathBuf, RenderError>
where
    R: Renderer + ?Sized,
{
    let graph = RenderGraph::from_topology(topology);
    info!(
        "Drawing topology: {} nodes, {} links",
        graph.node_count(),
        graph.edge_count()
    );
    renderer.render(&graph, style, output)
}
