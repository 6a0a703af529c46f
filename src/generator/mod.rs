//! Generator module - renders posts and writes the output tree
//!
//! The whole site is written into a staging directory next to the output
//! directory. Only when every file is in place is the previous output removed
//! and the staging directory renamed over it. If anything fails earlier the
//! staging directory is dropped and the previous output stays untouched.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::content::{MarkdownRenderer, Post, Render, SourceFile};
use crate::error::{BuildError, Result};
use crate::helpers::intro_snippet;
use crate::templates::{IntroTeaser, PageComposer, STYLESHEET};
use crate::Site;

/// Output subdirectory holding one directory per post
pub const POSTS_DIR: &str = "posts";

/// Output subdirectory for copied assets
pub const ASSETS_DIR: &str = "assets";

/// What a finished build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Detail pages written (every source file)
    pub pages: usize,
    /// Cards on the index page
    pub listed: usize,
    /// Whether the introduction teaser was shown
    pub intro: bool,
    /// Whether the badge image was copied
    pub badge: bool,
}

/// Static site generator
pub struct Generator<'a, R: Render = MarkdownRenderer> {
    site: &'a Site,
    renderer: R,
}

impl<'a> Generator<'a> {
    /// Create a generator with the default Markdown renderer
    pub fn new(site: &'a Site) -> Self {
        Self::with_renderer(site, MarkdownRenderer::new())
    }
}

impl<'a, R: Render> Generator<'a, R> {
    /// Create a generator with a custom renderer
    pub fn with_renderer(site: &'a Site, renderer: R) -> Self {
        Self { site, renderer }
    }

    /// Render sources into posts, keeping their order.
    ///
    /// Two files that normalize to the same slug would overwrite each other's
    /// output directory, so that is an error.
    pub fn build_posts(&self, sources: Vec<SourceFile>) -> Result<Vec<Post>> {
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut posts = Vec::with_capacity(sources.len());

        for source in sources {
            let content = self.renderer.render(&source.raw);
            let post = Post::from_source(source, content, self.site.config.excerpt_length);

            if let Some(first) = seen.insert(post.slug.clone(), post.source.clone()) {
                return Err(BuildError::SlugCollision {
                    slug: post.slug,
                    first,
                    second: post.source,
                });
            }
            posts.push(post);
        }

        Ok(posts)
    }

    /// Generate the entire site from loaded sources
    pub fn generate(&self, sources: Vec<SourceFile>) -> Result<BuildSummary> {
        let posts = self.build_posts(sources)?;

        let staging = stage_dir(&self.site.public_dir)?;
        let summary = self.write_site(staging.path(), &posts)?;
        commit(staging, &self.site.public_dir)?;

        Ok(summary)
    }

    /// Write every output file below `root`
    fn write_site(&self, root: &Path, posts: &[Post]) -> Result<BuildSummary> {
        let config = &self.site.config;
        let composer = PageComposer::new(config);

        let posts_dir = root.join(POSTS_DIR);
        create_dir(&posts_dir)?;

        for post in posts {
            let dir = posts_dir.join(&post.slug);
            create_dir(&dir)?;
            write_file(&dir.join("index.html"), &composer.post_page(post))?;
            tracing::debug!("Generated {}", post.path());
        }

        let badge = self.copy_badge(root)?;

        let intro = posts
            .iter()
            .find(|p| config.is_intro(&p.source))
            .map(|p| IntroTeaser {
                snippet: intro_snippet(&p.raw, config.snippet_words),
                href: p.path(),
            })
            .filter(|teaser| !teaser.snippet.is_empty());

        let listing: Vec<&Post> = posts
            .iter()
            .filter(|p| !config.is_intro(&p.source))
            .collect();

        let index = composer.index_page(&listing, intro.as_ref(), badge.as_deref());
        write_file(&root.join("index.html"), &index)?;
        write_file(&root.join("style.css"), STYLESHEET)?;

        Ok(BuildSummary {
            pages: posts.len(),
            listed: listing.len(),
            intro: intro.is_some(),
            badge: badge.is_some(),
        })
    }

    /// Copy the badge image into `assets/` if the materials directory has
    /// one. Returns its site-relative path.
    fn copy_badge(&self, root: &Path) -> Result<Option<String>> {
        let name = &self.site.config.badge_image;
        let source = self.site.materials_dir.join(name);
        if !source.is_file() {
            tracing::debug!("No badge image at {:?}, skipping", source);
            return Ok(None);
        }

        let assets = root.join(ASSETS_DIR);
        create_dir(&assets)?;
        let dest = assets.join(name);
        fs::copy(&source, &dest).map_err(|e| BuildError::io("copy", &source, e))?;

        Ok(Some(format!("{}/{}", ASSETS_DIR, name)))
    }
}

/// Create the staging directory beside `public_dir`, so the final rename
/// stays on one filesystem
fn stage_dir(public_dir: &Path) -> Result<TempDir> {
    let parent = match public_dir.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    create_dir(&parent)?;

    let prefix = format!(
        ".{}-staging-",
        public_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "site".to_string())
    );
    tempfile::Builder::new()
        .prefix(&prefix)
        .tempdir_in(&parent)
        .map_err(|e| BuildError::io("create staging directory in", &parent, e))
}

/// Replace `public_dir` with the staged tree
fn commit(staging: TempDir, public_dir: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staging.path(), fs::Permissions::from_mode(0o755))
            .map_err(|e| BuildError::io("set permissions on", staging.path(), e))?;
    }

    remove_dir(public_dir)?;
    fs::rename(staging.path(), public_dir)
        .map_err(|e| BuildError::io("move staged site to", public_dir, e))?;

    // `staging` now points at a path that no longer exists; dropping it is a
    // no-op
    drop(staging);
    Ok(())
}

/// Remove a directory tree; a missing directory is fine
pub fn remove_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(BuildError::io("remove", dir, e)),
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| BuildError::io("create", dir, e))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| BuildError::io("write", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::loader::ContentLoader;
    use walkdir::WalkDir;

    /// Renders every document to the same fragment
    struct StubRenderer;

    impl Render for StubRenderer {
        fn render(&self, _markdown: &str) -> String {
            "<p>STUB</p>".to_string()
        }
    }

    fn site_with(files: &[(&str, &str)]) -> (TempDir, Site) {
        let tmp = TempDir::new().unwrap();
        let site = Site::with_config(tmp.path(), SiteConfig::default());
        fs::create_dir_all(&site.content_dir).unwrap();
        for (name, raw) in files {
            fs::write(site.content_dir.join(name), raw).unwrap();
        }
        (tmp, site)
    }

    fn build(site: &Site) -> Result<BuildSummary> {
        let sources = ContentLoader::new(site).load_sources()?;
        Generator::with_renderer(site, StubRenderer).generate(sources)
    }

    /// Relative path and contents of every file under `root`, sorted
    fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
        let mut files: Vec<_> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let rel = e.path().strip_prefix(root).unwrap().to_string_lossy().into_owned();
                (rel, fs::read(e.path()).unwrap())
            })
            .collect();
        files.sort();
        files
    }

    fn essays() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Introductie.md", "# Introductie\n\nWaarom dit notitieboek bestaat."),
            ("Ritme boven ritueel.md", "Ritme eerst.\n\nDaarna de rest."),
            ("Über Architectuur.md", "Over het vak."),
            ("Impact.md", "Impact telt."),
        ]
    }

    #[test]
    fn test_output_tree() {
        let (_tmp, site) = site_with(&essays());
        let summary = build(&site).unwrap();

        assert_eq!(
            summary,
            BuildSummary {
                pages: 4,
                listed: 3,
                intro: true,
                badge: false,
            }
        );

        let files: Vec<String> = snapshot(&site.public_dir).into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            files,
            vec![
                "index.html",
                "posts/impact/index.html",
                "posts/introductie/index.html",
                "posts/ritme-boven-ritueel/index.html",
                "posts/uber-architectuur/index.html",
                "style.css",
            ]
        );
    }

    #[test]
    fn test_listing_excludes_intro_and_keeps_order() {
        let (_tmp, site) = site_with(&essays());
        build(&site).unwrap();

        let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert_eq!(index.matches(r#"<article class="post-card">"#).count(), 3);
        assert!(!index.contains(r#"<a href="./posts/introductie/index.html">"#));
        assert!(index.contains("Waarom dit notitieboek bestaat."));

        let impact = index.find("./posts/impact/").unwrap();
        let ritme = index.find("./posts/ritme-boven-ritueel/").unwrap();
        let uber = index.find("./posts/uber-architectuur/").unwrap();
        assert!(impact < ritme && ritme < uber);
    }

    #[test]
    fn test_missing_intro_omits_teaser() {
        let (_tmp, site) = site_with(&[("Impact.md", "Impact telt.")]);
        let summary = build(&site).unwrap();
        assert!(!summary.intro);
        assert_eq!(summary.listed, 1);

        let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert!(!index.contains(r#"class="intro""#));
    }

    #[test]
    fn test_build_is_deterministic() {
        let (_tmp, site) = site_with(&essays());
        build(&site).unwrap();
        let first = snapshot(&site.public_dir);
        build(&site).unwrap();
        assert_eq!(first, snapshot(&site.public_dir));
    }

    #[test]
    fn test_stale_output_is_wiped() {
        let (_tmp, site) = site_with(&essays());
        fs::create_dir_all(site.public_dir.join("posts/old-post")).unwrap();
        fs::write(site.public_dir.join("posts/old-post/index.html"), "old").unwrap();
        fs::write(site.public_dir.join("notes.txt"), "manual").unwrap();

        build(&site).unwrap();

        assert!(!site.public_dir.join("notes.txt").exists());
        assert!(!site.public_dir.join("posts/old-post").exists());
        assert!(site.public_dir.join("index.html").exists());
    }

    #[test]
    fn test_no_staging_leftovers() {
        let (tmp, site) = site_with(&essays());
        build(&site).unwrap();

        let leftovers: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("-staging-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_badge_is_copied_when_present() {
        let (_tmp, site) = site_with(&essays());
        fs::create_dir_all(&site.materials_dir).unwrap();
        fs::write(site.materials_dir.join("badge.png"), b"\x89PNG fake").unwrap();

        let summary = build(&site).unwrap();
        assert!(summary.badge);
        assert_eq!(
            fs::read(site.public_dir.join("assets/badge.png")).unwrap(),
            b"\x89PNG fake"
        );
        let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert!(index.contains(r#"src="./assets/badge.png""#));
    }

    #[test]
    fn test_missing_badge_only_changes_assets() {
        let (_tmp, with_badge) = site_with(&essays());
        fs::create_dir_all(&with_badge.materials_dir).unwrap();
        fs::write(with_badge.materials_dir.join("badge.png"), b"png").unwrap();
        build(&with_badge).unwrap();

        let (_tmp2, without_badge) = site_with(&essays());
        build(&without_badge).unwrap();

        assert!(!without_badge.public_dir.join(ASSETS_DIR).exists());
        let posts = |site: &Site| {
            snapshot(&site.public_dir)
                .into_iter()
                .filter(|(p, _)| p.starts_with(POSTS_DIR))
                .map(|(p, _)| p)
                .collect::<Vec<_>>()
        };
        assert_eq!(posts(&with_badge), posts(&without_badge));
    }

    #[test]
    fn test_slug_collision_is_fatal_and_keeps_old_output() {
        let (_tmp, site) = site_with(&[("Café.md", "a"), ("Cafe.md", "b")]);
        fs::create_dir_all(&site.public_dir).unwrap();
        fs::write(site.public_dir.join("index.html"), "previous").unwrap();

        let err = build(&site).unwrap_err();
        match err {
            BuildError::SlugCollision { slug, first, second } => {
                assert_eq!(slug, "cafe");
                assert_eq!(first, "Cafe.md");
                assert_eq!(second, "Café.md");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            fs::read_to_string(site.public_dir.join("index.html")).unwrap(),
            "previous"
        );
    }

    #[test]
    fn test_quote_in_title_keeps_meta_well_formed() {
        let (_tmp, site) = site_with(&[(r#"Het "echte" werk.md"#, r#"Zeg "nee"."#)]);
        build(&site).unwrap();

        let page =
            fs::read_to_string(site.public_dir.join("posts/het-echte-werk/index.html")).unwrap();
        assert!(page.contains(r#"<meta name="description" content="Zeg &quot;nee&quot;." />"#));
        assert!(page.contains("<h1>Het &quot;echte&quot; werk</h1>"));
    }
}
