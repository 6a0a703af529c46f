//! Text helpers: titles, slugs, excerpts and the intro snippet

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref MARKDOWN_EXT: Regex = Regex::new(r"(?i)\.md$").unwrap();
    static ref NON_SLUG: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n[\s\x{feff}]*\n").unwrap();
}

/// Marker appended to shortened excerpts and snippets
pub const ELLIPSIS: &str = "...";

/// Slug used when nothing of the name survives normalization
const FALLBACK_SLUG: &str = "post";

/// Strip a trailing `.md` (any case) from a file name
pub fn strip_markdown_ext(file_name: &str) -> &str {
    match MARKDOWN_EXT.find(file_name) {
        Some(m) => &file_name[..m.start()],
        None => file_name,
    }
}

/// Whether a file name carries the Markdown extension
pub fn is_markdown_name(file_name: &str) -> bool {
    MARKDOWN_EXT.is_match(file_name)
}

/// Display title for a source file: extension and underscores removed
pub fn title_from_filename(file_name: &str) -> String {
    strip_markdown_ext(file_name)
        .replace('_', "")
        .trim()
        .to_string()
}

/// Derive a URL-safe slug from a file name (or an already stripped title).
///
/// Accented letters are decomposed and lose their marks, everything outside
/// `[a-z0-9]` collapses into single hyphens. The result is stable across runs
/// because it becomes a permanent URL path.
///
/// # Examples
/// ```
/// use essay_press::helpers::slugify;
/// assert_eq!(slugify("Über Architectuur.md"), "uber-architectuur");
/// assert_eq!(slugify("???.md"), "post");
/// ```
pub fn slugify(name: &str) -> String {
    let base = strip_markdown_ext(name).trim();
    let normalized: String = base
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase();
    let slug = NON_SLUG.replace_all(&normalized, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Whitespace as browsers' `\s` sees it: Unicode white space plus the
/// byte order mark
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(is_space).filter(|w| !w.is_empty())
}

/// Collapse every whitespace run into a single space and trim
pub fn collapse_whitespace(s: &str) -> String {
    words(s).collect::<Vec<_>>().join(" ")
}

/// Paragraph blocks of a document, split on blank lines
fn paragraphs(raw: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK
        .split(raw)
        .filter(|block| !block.trim_matches(is_space).is_empty())
}

/// Plain-text excerpt from the first paragraph of `raw`, at most
/// `max_chars` characters long. Longer paragraphs are cut and end in
/// [`ELLIPSIS`]. Returns an empty string when the document has no text.
pub fn excerpt_from(raw: &str, max_chars: usize) -> String {
    let Some(first) = paragraphs(raw).next() else {
        return String::new();
    };

    let text = collapse_whitespace(first);
    if text.chars().count() <= max_chars {
        return text;
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut excerpt: String = text.chars().take(keep).collect();
    excerpt.push_str(ELLIPSIS);
    excerpt
}

/// Leading words of the introduction document for the index hero.
///
/// Headings are skipped so the snippet starts at the first prose paragraph.
/// At most `max_words` words are kept; [`ELLIPSIS`] marks a cut.
pub fn intro_snippet(raw: &str, max_words: usize) -> String {
    let Some(block) =
        paragraphs(raw).find(|block| !block.trim_start_matches(is_space).starts_with('#'))
    else {
        return String::new();
    };

    let all: Vec<&str> = words(block).collect();
    if all.len() <= max_words {
        return all.join(" ");
    }

    let mut snippet = all[..max_words].join(" ");
    snippet.push_str(ELLIPSIS);
    snippet
}
