//! Post model

use chrono::{DateTime, Local};
use std::path::PathBuf;

use crate::helpers::{excerpt_from, slugify, title_from_filename};

/// A Markdown file as read from the content directory
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name, including the extension
    pub name: String,

    /// Full path on disk
    pub path: PathBuf,

    /// Raw Markdown text
    pub raw: String,

    /// Last modification time
    pub modified: DateTime<Local>,
}

/// An essay ready for composition
#[derive(Debug, Clone)]
pub struct Post {
    /// Display title derived from the file name
    pub title: String,

    /// URL path segment under `posts/`
    pub slug: String,

    /// Rendered HTML content
    pub content: String,

    /// Plain-text summary of the first paragraph
    pub excerpt: String,

    /// Last updated date (file mtime)
    pub updated: DateTime<Local>,

    /// Source file name
    pub source: String,

    /// Raw markdown content
    pub raw: String,
}

impl Post {
    /// Derive a post from its source file; `content` is the rendered body
    pub fn from_source(file: SourceFile, content: String, excerpt_length: usize) -> Self {
        let excerpt = excerpt_from(&file.raw, excerpt_length);
        Self {
            title: title_from_filename(&file.name),
            slug: slugify(&file.name),
            content,
            excerpt,
            updated: file.modified,
            source: file.name,
            raw: file.raw,
        }
    }

    /// Site-relative URL of the detail page
    pub fn path(&self) -> String {
        format!("posts/{}/index.html", self.slug)
    }
}
