use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orthoguide_core::config::CONFIG_TEMPLATE;
use orthoguide_core::OrthoConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default config file
    Init(InitArgs),
    /// Print the effective config (file + environment overrides)
    Show,
    /// Validate the config file
    Validate,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Validate => run_validate(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = OrthoConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create config directory: {:?}", parent))?;
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .context(format!("Failed to write config file: {:?}", config_path))?;

    println!("Created config at: {}", config_path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    let config = OrthoConfig::load()?;
    let toml_str =
        toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
    println!("{}", toml_str);
    Ok(())
}

fn run_validate() -> Result<()> {
    let config = OrthoConfig::load()?;
    println!("Config OK ({})", OrthoConfig::config_path().display());
    println!("  api.base_url:    {}", config.api.base_url);
    println!("  default species: {}", config.analysis.default_species);
    println!("  organisms:       {}", config.analysis.organisms.len());
    println!("  columns:         {}", config.table.columns.len());
    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", OrthoConfig::config_path().display());
    Ok(())
}
