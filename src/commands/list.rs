//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::helpers::format_date;
use crate::Site;

/// Print every essay in listing order
pub fn run(site: &Site) -> Result<()> {
    let sources = ContentLoader::new(site).load_sources()?;
    let posts = Generator::new(site).build_posts(sources)?;

    println!("Posts ({}):", posts.len());
    for post in &posts {
        let marker = if site.config.is_intro(&post.source) {
            " (introduction)"
        } else {
            ""
        };
        println!(
            "  {} - {} [{}]{}",
            format_date(&post.updated, &site.config.date_format),
            post.title,
            post.slug,
            marker
        );
    }

    Ok(())
}
