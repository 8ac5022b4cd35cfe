//! The `build` command: index the store, then write feed and sitemap.

use crate::{
    config::SiteConfig,
    content::PostStore,
    generator::{rss::build_rss, sitemap::build_sitemap},
    log,
};
use anyhow::Result;

/// Load the post index and generate rss feed and sitemap in parallel.
///
/// Generation toggles come from `config.build.rss.enable` and
/// `config.build.sitemap.enable`. An empty store is a valid, renderable
/// state: both outputs are still written, just without post entries.
pub fn build_site(config: &'static SiteConfig) -> Result<()> {
    let index = PostStore::new(config).load_all();
    log!(
        "build";
        "indexed {} posts, {} tags, {} categories",
        index.len(),
        index.tags().len(),
        index.categories().len()
    );

    let (rss_result, sitemap_result) = rayon::join(
        || build_rss(config, &index),
        || build_sitemap(config, &index),
    );
    rss_result?;
    sitemap_result?;

    Ok(())
}
