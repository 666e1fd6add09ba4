//! Faultline CLI
//!
//! Command-line interface for rendering failure reports

use clap::{Parser, Subcommand};
use faultline_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "faultline")]
#[command(about = "Faultline - Readable reports for failure chains", long_about = None)]
struct Cli {
    /// Emit diagnostic logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a JSON-described failure chain
    Render(commands::render::RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging_facility::init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
