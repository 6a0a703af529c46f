//! Build errors

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can abort a build. There is no partial success: any of
/// these stops the pipeline.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("content directory not found: {}", .0.display())]
    ContentDirMissing(PathBuf),

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("slug `{slug}` is produced by both `{first}` and `{second}`")]
    SlugCollision {
        slug: String,
        first: String,
        second: String,
    },

    #[error("cannot collate names for language `{language}`: {reason}")]
    Locale { language: String, reason: String },

    #[error("invalid configuration in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl BuildError {
    /// Wrap an I/O error with the operation and path that failed
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        BuildError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
