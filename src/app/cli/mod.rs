//! CLI Adapter.

mod generate;
mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "studio-router")]
#[command(version)]
#[command(about = "Build and inspect studio route paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the path for a navigation target
    #[clap(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        command: generate::GenerateCommands,
    },
    /// Match a path against the route table and print its parameters as JSON
    #[clap(visible_alias = "m")]
    Match { path: String },
    /// List route templates
    #[clap(visible_alias = "ls")]
    Routes {
        /// Show a single route by symbolic name (e.g. VIEW_BY_GAV)
        name: Option<String>,
    },
    /// Validate a studio config file and print the resolved configuration
    Config {
        path: PathBuf,
        /// Deployed base path
        #[arg(long)]
        base_url: Option<String>,
        /// SDLC server key
        #[arg(long)]
        server_key: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { command } => generate::run_generate(command),
        Commands::Match { path } => inspect::run_match(&path),
        Commands::Routes { name } => inspect::run_routes(name),
        Commands::Config { path, base_url, server_key } => {
            inspect::run_config(path, base_url, server_key)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
