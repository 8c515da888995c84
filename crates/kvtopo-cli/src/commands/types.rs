//! Command argument types shared between main and library

use std::path::PathBuf;

use clap::Args;
use kvtopo_core::{DedupMode, OutputFormat};

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// OpenR show tech output (prompted for when omitted)
    pub input: Option<PathBuf>,

    /// Base path for the graph; the format extension is appended (prompted for when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image format: png, svg, pdf or dot (source only)
    #[arg(long, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// How reciprocal adjacencies are collapsed: substring or exact
    #[arg(long, default_value_t = DedupMode::Substring)]
    pub dedup: DedupMode,

    /// JSON file overriding graph, node and edge attributes
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Graphviz layout program
    #[arg(long, default_value = "dot")]
    pub dot_program: String,
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// OpenR show tech output (prompted for when omitted)
    pub input: Option<PathBuf>,

    /// How reciprocal adjacencies are collapsed: substring or exact
    #[arg(long, default_value_t = DedupMode::Substring)]
    pub dedup: DedupMode,

    /// Print every adjacency as reported, without deduplication
    #[arg(long)]
    pub raw: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
