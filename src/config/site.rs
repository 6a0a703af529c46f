//! Site configuration (_config.yml)

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{BuildError, Result};

/// Main site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub index_description: String,
    pub language: String,
    pub contact_email: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub materials_dir: String,

    // Writing
    pub intro_file: String,
    pub badge_image: String,
    pub excerpt_length: usize,
    pub snippet_words: usize,

    // Date format (strftime)
    pub date_format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "The Mindset Of An Architect".to_string(),
            tagline: "Praktische notities voor impactvolle architecten".to_string(),
            description: "Essays on architecture mindset, impact, and practice.".to_string(),
            index_description: "Een collectie essays over de mindset van architecten.".to_string(),
            language: "nl".to_string(),
            contact_email: "info@example.com".to_string(),

            content_dir: "contents".to_string(),
            public_dir: "dist".to_string(),
            materials_dir: "materials".to_string(),

            intro_file: "Introductie.md".to_string(),
            badge_image: "badge.png".to_string(),
            excerpt_length: 220,
            snippet_words: 60,

            // nl-BE short date, e.g. 7/3/2024
            date_format: "%-d/%-m/%Y".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BuildError::io("read", path, e))?;
        serde_yaml::from_str(&content).map_err(|source| BuildError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether `file_name` names the introduction document
    pub fn is_intro(&self, file_name: &str) -> bool {
        file_name == self.intro_file
    }
}
