use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orthoguide_core::IdentifierList;
use tracing::debug;

use super::read_input;

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// File with one gene ID per line (reads stdin if omitted)
    pub input: Option<PathBuf>,

    /// Print as a JSON array instead of one ID per line
    #[arg(long)]
    pub json: bool,
}

pub fn run_parse(args: ParseArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let ids = IdentifierList::parse(&text);
    debug!(count = ids.len(), "parsed identifiers");

    if args.json {
        let json = serde_json::to_string(&ids).context("Failed to serialize identifiers")?;
        println!("{}", json);
    } else {
        for id in &ids {
            println!("{}", id);
        }
    }

    Ok(())
}
