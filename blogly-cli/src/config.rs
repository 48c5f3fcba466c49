use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use blogly_server::BloglyConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective configuration (file + environment) as TOML
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
    }
}

fn run_path() -> Result<()> {
    let path = BloglyConfig::config_path();
    println!("{}", path.display());

    if !path.exists() {
        eprintln!("(not created yet; defaults and environment are in effect)");
    }
    Ok(())
}

fn run_show() -> Result<()> {
    let config = BloglyConfig::load().context("Failed to load configuration")?;
    let rendered = config.to_toml().context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}
