//! Generate static files

use anyhow::{Context, Result};

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Generate the static site: one full pass, wiping the previous output
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let sources = ContentLoader::new(site)
        .load_sources()
        .context("Loading essays")?;
    tracing::info!("Loaded {} essays from {:?}", sources.len(), site.content_dir);

    let summary = Generator::new(site)
        .generate(sources)
        .context("Generating site")?;

    if !summary.intro {
        tracing::info!(
            "No introduction ({}) found, index hero has no teaser",
            site.config.intro_file
        );
    }
    tracing::info!(
        "Wrote {} post pages and an index with {} cards to {:?}{}",
        summary.pages,
        summary.listed,
        site.public_dir,
        if summary.badge { " (badge copied)" } else { "" }
    );

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_builds_site() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        fs::create_dir_all(&site.content_dir).unwrap();
        fs::write(site.content_dir.join("Ritme.md"), "# Ritme\n\nTekst.").unwrap();

        run(&site).unwrap();

        assert!(site.public_dir.join("index.html").is_file());
        assert!(site.public_dir.join("style.css").is_file());
        let page = fs::read_to_string(site.public_dir.join("posts/ritme/index.html")).unwrap();
        assert!(page.contains("<h1>Ritme</h1>"));
    }

    #[test]
    fn test_run_fails_without_content_dir() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        let err = run(&site).unwrap_err();
        assert!(format!("{:#}", err).contains("content directory not found"));
        assert!(!site.public_dir.exists());
    }
}
