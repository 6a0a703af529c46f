//! Content loader - loads essays from the content directory

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::SourceFile;
use crate::error::{BuildError, Result};
use crate::helpers::{from_system_time, is_markdown_name, NameCollator};
use crate::Site;

/// Loads Markdown sources from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load every Markdown file directly inside the content directory, in
    /// locale-aware file name order
    pub fn load_sources(&self) -> Result<Vec<SourceFile>> {
        let content_dir = &self.site.content_dir;
        if !content_dir.is_dir() {
            return Err(BuildError::ContentDirMissing(content_dir.clone()));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(content_dir.as_path()).to_path_buf();
                BuildError::io("list", &path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_markdown_name(&name) {
                names.push(name);
            }
        }

        NameCollator::new(&self.site.config.language)?.sort(&mut names);

        let sources = names
            .into_iter()
            .map(|name| load_source(content_dir, name))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Found {} markdown files in {:?}", sources.len(), content_dir);
        Ok(sources)
    }
}

/// Read a single source file and its modification time
fn load_source(dir: &Path, name: String) -> Result<SourceFile> {
    let path = dir.join(&name);
    let bytes = fs::read(&path).map_err(|e| BuildError::io("read", &path, e))?;
    let raw = decode_source(&bytes);
    let modified = fs::metadata(&path)
        .and_then(|m| m.modified())
        .map_err(|e| BuildError::io("stat", &path, e))?;

    Ok(SourceFile {
        name,
        path,
        raw,
        modified: from_system_time(modified),
    })
}

/// Decode file contents as UTF-8, replacing invalid sequences and dropping a
/// leading byte order mark
fn decode_source(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}
