//! kvtopo: Draw OpenR kvstore adjacency topologies

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kvtopo_cli::commands;
use kvtopo_cli::logging::setup_logging;
use kvtopo_cli::prompt::Prompter;
use kvtopo_cli::{ExtractArgs, RenderArgs};

#[derive(Parser)]
#[command(name = "kvtopo")]
#[command(author, version, about = "OpenR adjacency topology renderer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the topology found in a show tech dump
    Render(RenderArgs),

    /// Print the adjacencies found in a show tech dump
    Extract(ExtractArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut prompter = Prompter::stdio();
    let mut stdout = std::io::stdout();

    let result = match cli.command {
        Commands::Render(args) => {
            commands::render::run(args, &mut prompter, &mut stdout).map(|_| ())
        }
        Commands::Extract(args) => commands::extract::run(args, &mut prompter, &mut stdout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match commands::render::missing_backend_hint(&e) {
                Some(hint) => eprintln!("{hint}"),
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
