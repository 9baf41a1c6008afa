use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use orthoguide_core::organism::find_organism;
use orthoguide_core::{HttpRootsService, IdentifierList, OrthoConfig, RootsService, TableView};
use tracing::info;

use super::read_input;
use crate::ui;

#[derive(Parser, Debug)]
pub struct RootsArgs {
    /// Comma-separated gene IDs (e.g. NRP1,CDK6)
    #[arg(long, short, conflicts_with = "file")]
    pub genes: Option<String>,

    /// File with one gene ID per line (reads stdin if neither --genes nor --file is given)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Species code (defaults to analysis.default_species)
    #[arg(long, short)]
    pub species: Option<String>,

    /// Rooting service base URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table using the configured columns
    Table,
    /// Raw rows as returned by the service
    Json,
}

pub async fn run_roots(args: RootsArgs) -> Result<()> {
    let mut config = OrthoConfig::load().context("Failed to load config")?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
        config.validate()?;
    }

    let species = args
        .species
        .unwrap_or_else(|| config.analysis.default_species.clone());
    find_organism(&config.analysis.organisms, &species)?;

    let genes = match (&args.genes, &args.file) {
        (Some(list), _) => IdentifierList::from_tokens(list.split(',')),
        (None, file) => IdentifierList::parse(&read_input(file.as_deref())?),
    };
    if genes.is_empty() {
        bail!("No gene IDs given (use --genes, --file or stdin)");
    }

    info!(count = genes.len(), %species, url = %config.api.base_url, "requesting roots");

    let service = HttpRootsService::from_config(&config.api)?;
    let rows = ui::with_spinner_async(
        format!("Inferring roots for {} genes", genes.len()),
        |rows: &Vec<_>| format!("{} rows", rows.len()),
        service.get_roots(&genes, &species),
    )
    .await?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).context("Failed to serialize rows")?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let view = TableView::render(&rows, &config.table.columns);
            print!("{}", view.to_plain_text());
        }
    }

    Ok(())
}
