//! CLI entry point for essay-press

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "essay-press")]
#[command(version)]
#[command(about = "A small static site generator for a collection of Markdown essays", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate static files (the default)
    #[command(alias = "g")]
    Generate,

    /// Remove the output directory
    Clean,

    /// List essays in listing order
    List,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "essay_press=debug,info"
    } else {
        "essay_press=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Reading current directory")?,
    };

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let site = essay_press::Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let site = essay_press::Site::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = essay_press::Site::new(&base_dir)?;
            essay_press::commands::list::run(&site)?;
        }

        Commands::Version => {
            println!("essay-press version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
