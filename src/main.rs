//! Inkpress - a markdown blog content pipeline.
//!
//! Reads a directory of markdown posts with YAML frontmatter, builds a
//! validated post index, and generates the site metadata (rss feed,
//! sitemap) that the rest of the site consumes.

mod build;
mod cli;
mod config;
mod content;
mod generator;
mod inspect;
mod logger;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use inspect::{check_store, list_posts, list_tags};
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => build_site(config),
        Commands::List { tag } => list_posts(config, tag.as_deref()),
        Commands::Tags => list_tags(config),
        Commands::Check => check_store(config),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: the defaults describe a
/// conventional layout (`content/` in, `public/` out), so the tool stays
/// usable without any `inkpress.toml`.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
