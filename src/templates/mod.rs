//! Page composition
//!
//! Every page is the shared layout shell wrapped around a page-specific body.
//! Composition is plain string assembly: the only decisions are whether an
//! optional block (intro teaser, badge) has anything to show.
//!
//! Text taken from file names and sources (titles, excerpts, the intro
//! snippet) is escaped for `& < > "` wherever it lands, not only inside
//! attributes, so a literal `&` or inline HTML in an essay's first paragraph
//! shows up as text on cards and in `<meta>`. The rendered Markdown body is
//! the one fragment inserted verbatim.

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{css, format_date, html_escape, image_tag, link_to};

/// The stylesheet written to `style.css`
pub const STYLESHEET: &str = include_str!("style.css");

/// Asset prefix of the root index page
pub const ROOT_PREFIX: &str = ".";

/// Asset prefix of a page at `posts/<slug>/index.html`
pub const POST_PREFIX: &str = "../..";

/// Teaser of the introduction document shown in the index hero
#[derive(Debug, Clone)]
pub struct IntroTeaser {
    /// Leading words of the introduction
    pub snippet: String,
    /// Link to the introduction's detail page, relative to the site root
    pub href: String,
}

/// Builds complete HTML documents from site configuration and posts
pub struct PageComposer<'a> {
    config: &'a SiteConfig,
}

impl<'a> PageComposer<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Wrap `body` in the layout shell.
    ///
    /// `prefix` is the relative path from the page back to the site root. An
    /// empty `description` falls back to the site description.
    pub fn layout(&self, page_title: &str, description: &str, body: &str, prefix: &str) -> String {
        let description = if description.trim().is_empty() {
            self.config.description.as_str()
        } else {
            description
        };
        let title = html_escape(&self.config.title);
        let home = format!("{}/index.html", prefix);

        format!(
            r#"<!doctype html>
<html lang="{lang}">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <meta name="description" content="{description}" />
  <title>{page_title}</title>
  {stylesheet}
</head>
<body>
  <div class="page">
    <header class="site-header">
      {brand}
      <span class="tagline">{tagline}</span>
    </header>
    {body}
    <footer class="site-footer">
      <div class="footer-inner">
        <div>
          <p class="footer-title">{title}</p>
          <p>Een collectie inzichten over ritme, toon, en beweging in architectuur.</p>
        </div>
        <div class="footer-links">
          {home_link}
          <a href="mailto:{email}">Contact</a>
        </div>
      </div>
    </footer>
  </div>
</body>
</html>
"#,
            lang = html_escape(&self.config.language),
            description = html_escape(description),
            page_title = html_escape(page_title),
            stylesheet = css(prefix, "style.css"),
            brand = link_to(&home, &title, Some("brand")),
            tagline = html_escape(&self.config.tagline),
            body = body,
            title = title,
            home_link = link_to(&home, "Home", None),
            email = html_escape(&self.config.contact_email),
        )
    }

    /// The root index page: hero plus one card per listed post, in order.
    ///
    /// `listing` must already exclude the introduction document.
    pub fn index_page(
        &self,
        listing: &[&Post],
        intro: Option<&IntroTeaser>,
        badge: Option<&str>,
    ) -> String {
        let cards: String = listing.iter().map(|post| self.post_card(post)).collect();
        let title = html_escape(&self.config.title);

        let body = format!(
            r##"
  <section class="hero">
    <div class="hero-content">
      <p class="eyebrow">Essays &amp; Observaties</p>
      <h1>{title}</h1>
      <p class="lede">Een levend notitieboek over hoe architecten bewegen, beslissen en teams vooruit helpen. Geen frameworks om de frameworks, maar concrete manieren om impact te maken.</p>{intro}
      <div class="hero-actions">
        <a class="button primary" href="#posts">Lees de stukken</a>
      </div>
    </div>
    <div class="hero-aside">
      <div class="shape"></div>{badge}
      <div class="bubble">Mindset boven model</div>
      <div class="bubble">Ritme boven ritueel</div>
      <div class="bubble">Impact boven inventaris</div>
    </div>
  </section>
  <section class="posts" id="posts">
    <div class="section-header">
      <p class="eyebrow">Alle artikelen</p>
      <h2>Verhalen en micro-lessen</h2>
    </div>
    <div class="post-grid">{cards}
    </div>
  </section>"##,
            title = title,
            intro = intro.map(intro_block).unwrap_or_default(),
            badge = badge.map(badge_block).unwrap_or_default(),
            cards = cards,
        );

        self.layout(
            &format!("{} | Architectuur essays", self.config.title),
            &self.config.index_description,
            &body,
            ROOT_PREFIX,
        )
    }

    /// One listing card on the index page
    fn post_card(&self, post: &Post) -> String {
        let href = format!("{}/{}", ROOT_PREFIX, post.path());
        format!(
            r#"
      <article class="post-card">
        <div class="post-meta">Laatste update: {date}</div>
        <h3>{title_link}</h3>
        <p class="post-excerpt">{excerpt}</p>
        {read_more}
      </article>"#,
            date = format_date(&post.updated, &self.config.date_format),
            title_link = link_to(&href, &html_escape(&post.title), None),
            excerpt = html_escape(&post.excerpt),
            read_more = link_to(&href, "Lees artikel →", Some("read-more")),
        )
    }

    /// The detail page of a single post
    pub fn post_page(&self, post: &Post) -> String {
        let body = format!(
            r#"
  <section class="post-shell">
    {back}
    <article class="post">
      <p class="eyebrow">{site_title}</p>
      <h1>{title}</h1>
      <div class="post-date">Bijgewerkt op {date}</div>
      <div class="post-content">{content}</div>
    </article>
  </section>"#,
            back = link_to(
                &format!("{}/index.html", POST_PREFIX),
                "← Terug naar alle artikelen",
                Some("back-link"),
            ),
            site_title = html_escape(&self.config.title),
            title = html_escape(&post.title),
            date = format_date(&post.updated, &self.config.date_format),
            content = post.content,
        );

        self.layout(
            &format!("{} | {}", post.title, self.config.title),
            &post.excerpt,
            &body,
            POST_PREFIX,
        )
    }
}

fn intro_block(intro: &IntroTeaser) -> String {
    format!(
        r#"
      <div class="intro">
        <p class="intro-snippet">{snippet}</p>
        {more}
      </div>"#,
        snippet = html_escape(&intro.snippet),
        more = link_to(
            &format!("{}/{}", ROOT_PREFIX, intro.href),
            "Lees de introductie →",
            Some("read-more"),
        ),
    )
}

fn badge_block(src: &str) -> String {
    format!(
        "\n      {}",
        image_tag(&format!("{}/{}", ROOT_PREFIX, src), "Badge", Some("badge"))
    )
}
