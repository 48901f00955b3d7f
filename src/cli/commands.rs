use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::indexer::scan_directory;
use crate::models::{IndexConfig, Locale, NamingPolicy, OrderingPolicy};
use crate::render::render_index;
use crate::writer::write_index;

#[derive(Parser, Debug)]
#[command(name = "dir-index")]
#[command(version = "0.1.0")]
#[command(
    about = "Generate an index.html linking every subdirectory that has its own index.html",
    long_about = None
)]
pub struct Cli {
    /// Preset for page language, naming and ordering
    #[arg(long, value_enum, default_value_t = Locale::English)]
    pub variant: Locale,

    /// Override the preset's naming policy
    #[arg(long, value_enum)]
    pub naming: Option<NamingPolicy>,

    /// Override the preset's ordering policy
    #[arg(long, value_enum)]
    pub ordering: Option<OrderingPolicy>,

    /// Directory to scan and write into (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Scan and report without writing index.html
    #[arg(long)]
    pub dry_run: bool,
}

/// Applies per-policy overrides on top of the selected preset
pub fn resolve_config(cli: &Cli) -> IndexConfig {
    let preset = IndexConfig::for_locale(cli.variant);
    IndexConfig {
        naming: cli.naming.unwrap_or(preset.naming),
        ordering: cli.ordering.unwrap_or(preset.ordering),
        locale: preset.locale,
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to determine current directory")?,
    };

    println!("Scanning for directories with index.html...");
    let entries = scan_directory(&root, &config).context("Index generation failed")?;

    println!("Found {} directories:", entries.len());
    for entry in &entries {
        println!("  - {} ({})", entry.name, entry.path);
    }

    if cli.dry_run {
        println!("\nDry run: index.html not written");
        return Ok(());
    }

    println!("\nGenerating index.html...");
    let html = render_index(&entries, config.locale);
    write_index(&root, &html).context("Index generation failed")?;

    println!("✓ index.html generated successfully!");
    Ok(())
}
