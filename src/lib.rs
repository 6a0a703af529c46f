//! essay-press: a small static site generator for a collection of essays
//!
//! A build reads every Markdown file in the content directory, renders it,
//! and writes a static site:
//!
//! ```text
//! dist/
//! ├── index.html              # hero + one card per essay
//! ├── style.css
//! ├── assets/badge.png        # only if materials/badge.png exists
//! └── posts/
//!     └── <slug>/index.html   # one per essay, introduction included
//! ```
//!
//! The pipeline is strictly one-way: [`content::loader`] reads sources,
//! [`helpers`] derives slugs and excerpts, [`content::Render`] turns Markdown
//! into HTML, [`templates`] composes pages and [`generator`] writes them.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod templates;

pub use error::{BuildError, Result};

use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A site rooted at a base directory, with its configuration resolved
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown sources
    pub content_dir: PathBuf,
    /// Output directory
    pub public_dir: PathBuf,
    /// Directory holding the optional badge image
    pub materials_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            tracing::debug!("Loading configuration from {:?}", config_path);
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let materials_dir = base_dir.join(&config.materials_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            materials_dir,
        }
    }

    /// Generate the static site
    pub fn generate(&self) -> anyhow::Result<()> {
        commands::generate::run(self)
    }

    /// Remove the output directory
    pub fn clean(&self) -> anyhow::Result<()> {
        commands::clean::run(self)
    }
}
