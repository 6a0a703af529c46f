//! Content module - source files, posts, and markdown rendering

pub mod loader;
mod markdown;
mod post;

pub use markdown::{MarkdownRenderer, Render};
pub use post::{Post, SourceFile};
