//! Extract command: List adjacencies without drawing them

use std::io::{BufRead, Write};

use anyhow::Result;
use kvtopo_core::{dedup, extract_file, AdjacencyMap};
use tracing::info;

use crate::commands::types::ExtractArgs;
use crate::prompt::{Prompter, INPUT_PROMPT};

/// Run the extract command
///
/// # Errors
/// Returns an error if the dump cannot be read or output fails.
pub fn run<R, W, O>(args: ExtractArgs, prompter: &mut Prompter<R, W>, out: &mut O) -> Result<()>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    let input = prompter.path_or_ask(args.input, INPUT_PROMPT)?;

    let adjacencies = extract_file(&input)?;
    let topology = if args.raw {
        adjacencies
    } else {
        let reduced = dedup(&adjacencies, args.dedup);
        info!(
            "Kept {} of {} adjacencies ({} dedup)",
            reduced.len(),
            adjacencies.len(),
            args.dedup
        );
        reduced
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &topology)?;
        writeln!(out)?;
    } else {
        write_table(&topology, out)?;
    }

    Ok(())
}

fn write_table<O: Write>(topology: &AdjacencyMap, out: &mut O) -> Result<()> {
    if topology.is_empty() {
        writeln!(out, "No adjacencies found")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<32} {:<16} {:<32} REMOTE INTF",
        "HOST", "LOCAL INTF", "PEER"
    )?;
    writeln!(out, "{}", "-".repeat(94))?;

    for adj in topology {
        writeln!(
            out,
            "{:<32} {:<16} {:<32} {}",
            adj.local.node, adj.local.interface, adj.remote.node, adj.remote.interface
        )?;
    }

    writeln!(out, "\n{} adjacencies", topology.len())?;
    Ok(())
}
