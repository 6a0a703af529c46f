//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

/// Converts Markdown text into an HTML fragment
pub trait Render {
    fn render(&self, markdown: &str) -> String;
}

/// Markdown renderer backed by pulldown-cmark.
///
/// GFM extensions and smart punctuation are on. Single newlines stay soft
/// breaks and headings get no generated ids.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // HEADING_ATTRIBUTES stays off: no `{#id}` anchors on headings
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        Self { options }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for MarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}
