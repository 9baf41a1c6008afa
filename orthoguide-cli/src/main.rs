//! orthoguide CLI - gene rooting analysis client
//!
//! This is the main entry point for the orthoguide command-line tool, which provides:
//! - Interactive analysis form + results table (`tui` subcommand)
//! - Gene ID list normalization (`parse` subcommand)
//! - One-shot rooting requests against the rooting service (`roots` subcommand)
//! - Config file management (`config` subcommand)

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orthoguide_core::organism::find_organism;
use orthoguide_core::{HttpRootsService, OrthoConfig, RootsService};

mod commands;
mod config;
mod tracing_setup;
mod tui;
mod ui;

use commands::{parse::ParseArgs, roots::RootsArgs};
use config::ConfigArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "orthoguide",
    author,
    version,
    about = "Infer evolutionary roots for lists of gene IDs",
    long_about = "Paste gene identifiers, pick an organism and ask the rooting service \
                  where each gene's orthologous group originated."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Suppress progress spinners (for script consumption)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive rooting analysis (gene ID form + results table)
    Tui(TuiArgs),
    /// Normalize a gene ID list: one ID per line, trimmed, blanks dropped
    Parse(ParseArgs),
    /// Request roots for gene IDs and print the results table
    Roots(RootsArgs),
    /// Manage the orthoguide config file
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct TuiArgs {
    /// Species code preselected in the organism selector
    #[arg(long, short)]
    species: Option<String>,

    /// Rooting service base URL (overrides config)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match cli.command {
        Commands::Tui(_) => Some(OrthoConfig::home_dir().join("orthoguide.log")),
        _ => None,
    };
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        log_file,
    })
    .ok();

    // Initialize UI quiet mode from flag, env var, and TTY detection
    ui::init_quiet_mode(cli.quiet);

    match cli.command {
        Commands::Tui(args) => run_tui(args)?,
        Commands::Parse(args) => commands::run_parse(args)?,
        Commands::Roots(args) => commands::run_roots(args).await?,
        Commands::Config(args) => config::run_config(args)?,
    }

    Ok(())
}

fn run_tui(args: TuiArgs) -> Result<()> {
    let mut config = OrthoConfig::load().context("Failed to load config")?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
        config.validate()?;
    }

    let species = args
        .species
        .unwrap_or_else(|| config.analysis.default_species.clone());
    find_organism(&config.analysis.organisms, &species)?;

    let service: Arc<dyn RootsService> = Arc::new(HttpRootsService::from_config(&config.api)?);
    let runtime = tokio::runtime::Handle::current();

    // The run loop blocks on terminal input; keep the runtime's workers free
    tokio::task::block_in_place(|| tui::run(&config, &species, service, runtime))
}
