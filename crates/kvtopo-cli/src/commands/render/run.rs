//! Render command: Extract, deduplicate and draw the adjacency topology

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use kvtopo_core::{dedup, extract_file, render_topology, GraphvizRenderer, RenderError, Style};
use tracing::info;

use crate::commands::types::RenderArgs;
use crate::prompt::{Prompter, INPUT_PROMPT, OUTPUT_PROMPT};

/// Run the render command
///
/// Prints the path of the written file to `out`.
///
/// # Errors
/// Returns an error if the dump cannot be read, the style is invalid or
/// rendering fails.
pub fn run<R, W, O>(args: RenderArgs, prompter: &mut Prompter<R, W>, out: &mut O) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    let input = prompter.path_or_ask(args.input, INPUT_PROMPT)?;

    let adjacencies = extract_file(&input)?;
    let topology = dedup(&adjacencies, args.dedup);
    info!(
        "Found {} adjacencies in {}, {} after {} dedup",
        adjacencies.len(),
        input.display(),
        topology.len(),
        args.dedup
    );

    let output = prompter.path_or_ask(args.output, OUTPUT_PROMPT)?;

    let style = match &args.style {
        Some(path) => Style::from_json_file(path)?,
        None => Style::default(),
    };

    let renderer = GraphvizRenderer::new()
        .with_program(args.dot_program)
        .with_format(args.format);

    let written = render_topology(&topology, &renderer, &style, &output)
        .with_context(|| format!("Failed to render {}", output.display()))?;

    writeln!(out, "Graph saved in {}", written.display())?;
    Ok(written)
}

/// Installation instructions when the failure was a missing Graphviz
#[must_use]
pub fn missing_backend_hint(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<RenderError>() {
        Some(RenderError::BackendMissing { program }) => Some(format!(
            "Graphviz needs to be installed to render images ('{program}' was not found)\n\
             Install it with `apt install graphviz` or `brew install graphviz`, \
             or use --format dot to write the graph source only"
        )),
        _ => None,
    }
}
