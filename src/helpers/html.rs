//! HTML helper functions

/// Escape text for use in HTML content and double-quoted attributes
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Generate a stylesheet link tag relative to `prefix`
///
/// # Examples
/// ```ignore
/// css("../..", "style.css") // -> <link rel="stylesheet" href="../../style.css" />
/// ```
pub fn css(prefix: &str, path: &str) -> String {
    format!(
        r#"<link rel="stylesheet" href="{}/{}" />"#,
        prefix,
        path.trim_start_matches('/')
    )
}

/// Generate an anchor tag
pub fn link_to(href: &str, text: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(r#"<a class="{}" href="{}">{}</a>"#, class, href, text),
        None => format!(r#"<a href="{}">{}</a>"#, href, text),
    }
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();
    format!(r#"<img{} src="{}" alt="{}" />"#, class_attr, src, html_escape(alt))
}
